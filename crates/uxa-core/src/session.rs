//! Single-flight analysis session.
//!
//! Drives one submission at a time through
//! `Idle -> Validating -> (Rejected | Analyzing) -> Complete`. The report
//! slot is only ever replaced by a fully built report, so callers never
//! observe a partial result.

use crate::config::UxaConfig;
use crate::error::AnalysisError;
use crate::generator::{CannedCritique, CritiqueGenerator};
use crate::report::AnalysisReport;
use crate::request::AnalysisRequest;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// No request in flight; a previous report may be cached.
    Idle,
    Validating,
    Rejected,
    Analyzing,
    /// Report available; accepts a new submission.
    Complete,
}

impl SessionPhase {
    pub fn allowed_transitions(self) -> &'static [SessionPhase] {
        use SessionPhase::*;
        match self {
            Idle | Complete => &[Validating],
            Validating => &[Rejected, Analyzing],
            Rejected => &[Idle],
            // Back to Idle on timeout, generation failure, or abandonment.
            Analyzing => &[Complete, Idle],
        }
    }

    pub fn can_transition_to(self, next: SessionPhase) -> bool {
        self.allowed_transitions().contains(&next)
    }

    /// True while a submission owns the session.
    pub fn is_in_flight(self) -> bool {
        matches!(self, SessionPhase::Validating | SessionPhase::Analyzing)
    }
}

#[derive(Debug)]
struct SessionState {
    phase: SessionPhase,
    report: Option<Arc<AnalysisReport>>,
}

impl SessionState {
    fn advance(&mut self, next: SessionPhase) {
        debug_assert!(
            self.phase.can_transition_to(next),
            "illegal session transition {:?} -> {:?}",
            self.phase,
            next
        );
        tracing::debug!(from = ?self.phase, to = ?next, "session phase");
        self.phase = next;
    }
}

pub struct AnalysisSession {
    generator: Arc<dyn CritiqueGenerator>,
    timeout: Option<Duration>,
    state: Mutex<SessionState>,
}

impl AnalysisSession {
    pub fn new(generator: Arc<dyn CritiqueGenerator>) -> Self {
        Self {
            generator,
            timeout: None,
            state: Mutex::new(SessionState {
                phase: SessionPhase::Idle,
                report: None,
            }),
        }
    }

    /// Session backed by the canned generator with delay, timeout and
    /// preview base taken from `cfg`.
    pub fn from_config(cfg: &UxaConfig) -> Self {
        let generator = CannedCritique::new(cfg.analysis_delay(), cfg.preview.file_base_url.clone());
        let session = Self::new(Arc::new(generator));
        match cfg.analysis_timeout() {
            Some(limit) => session.with_timeout(limit),
            None => session,
        }
    }

    /// Fail submissions whose generation takes longer than `limit`.
    pub fn with_timeout(mut self, limit: Duration) -> Self {
        self.timeout = Some(limit);
        self
    }

    pub fn phase(&self) -> SessionPhase {
        self.lock().phase
    }

    /// Most recent successful report, if any.
    pub fn report(&self) -> Option<Arc<AnalysisReport>> {
        self.lock().report.clone()
    }

    /// Validates `raw_url` and, if accepted, runs the generator.
    ///
    /// A submission made while another is in flight fails with `Busy`.
    /// Failed submissions leave the cached report untouched. Dropping the
    /// returned future abandons the analysis and returns the session to
    /// `Idle`.
    pub async fn submit(&self, raw_url: &str) -> Result<Arc<AnalysisReport>, AnalysisError> {
        let request = AnalysisRequest::new(raw_url);
        let validated = {
            let mut state = self.lock();
            if state.phase.is_in_flight() {
                tracing::warn!(phase = ?state.phase, "submission refused: analysis in progress");
                return Err(AnalysisError::Busy);
            }
            state.advance(SessionPhase::Validating);
            match request.validate() {
                Ok(validated) => {
                    state.advance(SessionPhase::Analyzing);
                    validated
                }
                Err(e) => {
                    tracing::warn!(error = %e, "submission rejected");
                    state.advance(SessionPhase::Rejected);
                    state.advance(SessionPhase::Idle);
                    return Err(e);
                }
            }
        };

        let guard = InFlight { session: self };
        tracing::info!(
            url = validated.raw_url(),
            file_id = validated.file_id().map(|id| id.as_str()),
            "analysis started"
        );

        let generation = self.generator.generate(&validated);
        let outcome = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, generation)
                .await
                .unwrap_or(Err(AnalysisError::TimedOut { after: limit })),
            None => generation.await,
        };
        let report = match outcome {
            Ok(report) => Arc::new(report),
            Err(e) => {
                tracing::warn!(error = %e, "analysis failed");
                return Err(e);
            }
        };

        {
            let mut state = self.lock();
            state.report = Some(Arc::clone(&report));
            state.advance(SessionPhase::Complete);
        }
        drop(guard);

        tracing::info!(
            file_name = report.file_name(),
            overall = %report.overall_score(),
            "analysis complete"
        );
        Ok(report)
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Returns the session to `Idle` if analysis ends without a report.
struct InFlight<'a> {
    session: &'a AnalysisSession,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        let mut state = self.session.lock();
        if state.phase == SessionPhase::Analyzing {
            state.advance(SessionPhase::Idle);
        }
    }
}
