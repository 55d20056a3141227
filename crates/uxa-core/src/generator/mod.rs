//! Critique generation.
//!
//! [`CritiqueGenerator`] is the seam where a real analyser plugs in; the
//! session, validator and report model do not depend on which one is used.

mod canned;

pub use canned::CannedCritique;

use crate::error::AnalysisError;
use crate::report::AnalysisReport;
use crate::request::ValidatedRequest;
use async_trait::async_trait;

#[async_trait]
pub trait CritiqueGenerator: Send + Sync {
    /// Produces the full report for a validated request.
    ///
    /// Implementations that can fail report `AnalysisError::GenerationFailure`.
    async fn generate(&self, request: &ValidatedRequest) -> Result<AnalysisReport, AnalysisError>;
}
