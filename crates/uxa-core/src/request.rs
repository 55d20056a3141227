//! Analysis requests and their validated form.

use crate::error::AnalysisError;
use crate::url_model::{extract_file_id, validate_design_url, FileId};

/// One user submission. The URL is untrusted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    raw_url: String,
}

impl AnalysisRequest {
    pub fn new(raw_url: impl Into<String>) -> Self {
        Self {
            raw_url: raw_url.into(),
        }
    }

    pub fn raw_url(&self) -> &str {
        &self.raw_url
    }

    /// Checks the submission and derives its file identifier.
    ///
    /// Blank input is `EmptyInput`; anything [`validate_design_url`] rejects
    /// is `InvalidUrl`. The submitted casing and whitespace are kept for
    /// downstream use.
    pub fn validate(self) -> Result<ValidatedRequest, AnalysisError> {
        if self.raw_url.trim().is_empty() {
            return Err(AnalysisError::EmptyInput);
        }
        if !validate_design_url(&self.raw_url) {
            return Err(AnalysisError::InvalidUrl { url: self.raw_url });
        }
        let file_id = extract_file_id(&self.raw_url);
        Ok(ValidatedRequest {
            raw_url: self.raw_url,
            file_id,
        })
    }
}

/// A request that passed validation. Only obtainable via
/// [`AnalysisRequest::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest {
    raw_url: String,
    file_id: Option<FileId>,
}

impl ValidatedRequest {
    pub fn raw_url(&self) -> &str {
        &self.raw_url
    }

    /// `None` for accepted routes that carry no `file/` identifier.
    pub fn file_id(&self) -> Option<&FileId> {
        self.file_id.as_ref()
    }
}
