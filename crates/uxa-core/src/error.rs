//! Errors surfaced by the analysis pipeline.

use crate::notice::Notice;
use std::time::Duration;
use thiserror::Error;

/// Recoverable failure of a single analysis submission.
///
/// None of these are fatal; the session stays usable and no report is
/// produced for the failed submission.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Submitted URL was empty or whitespace only.
    #[error("no design-file URL was provided")]
    EmptyInput,
    /// Submitted URL is not an acceptable design-file reference.
    #[error("not a valid design-file URL: {url}")]
    InvalidUrl { url: String },
    /// Another submission is still being validated or analysed.
    #[error("an analysis is already in progress")]
    Busy,
    /// Generation did not finish within the configured limit.
    #[error("analysis timed out after {}ms", .after.as_millis())]
    TimedOut { after: Duration },
    /// A generator could not produce a report.
    #[error("analysis failed: {0}")]
    GenerationFailure(String),
}

impl AnalysisError {
    /// User-visible notice for this error.
    pub fn notice(&self) -> Notice {
        match self {
            AnalysisError::EmptyInput => Notice::missing_input(),
            AnalysisError::InvalidUrl { .. } => Notice::invalid_url(),
            AnalysisError::Busy => Notice::busy(),
            AnalysisError::TimedOut { .. } => Notice::timed_out(),
            AnalysisError::GenerationFailure(_) => Notice::generation_failed(),
        }
    }

    /// True for errors caused by the submitted input itself.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AnalysisError::EmptyInput | AnalysisError::InvalidUrl { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notice::NoticeKind;

    #[test]
    fn errors_map_to_notices() {
        assert_eq!(AnalysisError::EmptyInput.notice().kind, NoticeKind::MissingInput);
        assert_eq!(
            AnalysisError::InvalidUrl { url: "x".into() }.notice().kind,
            NoticeKind::InvalidUrl
        );
        assert_eq!(
            AnalysisError::TimedOut { after: Duration::from_secs(1) }.notice().kind,
            NoticeKind::TimedOut
        );
    }

    #[test]
    fn timeout_is_not_a_validation_error() {
        assert!(AnalysisError::EmptyInput.is_validation());
        assert!(!AnalysisError::TimedOut { after: Duration::ZERO }.is_validation());
        assert!(!AnalysisError::Busy.is_validation());
    }

    #[test]
    fn display_messages() {
        assert_eq!(
            AnalysisError::TimedOut { after: Duration::from_millis(1500) }.to_string(),
            "analysis timed out after 1500ms"
        );
        assert_eq!(
            AnalysisError::InvalidUrl { url: "https://example.com".into() }.to_string(),
            "not a valid design-file URL: https://example.com"
        );
    }
}
