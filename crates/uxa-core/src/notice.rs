//! User-visible notifications.
//!
//! The core only decides *what* to tell the user; the presentation layer
//! decides how (toast, banner, terminal line).

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum NoticeKind {
    MissingInput,
    InvalidUrl,
    AnalysisComplete,
    Busy,
    TimedOut,
    GenerationFailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Destructive,
}

/// Tag plus human-readable text for one outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub severity: Severity,
    pub title: &'static str,
    pub message: &'static str,
}

impl Notice {
    fn destructive(kind: NoticeKind, title: &'static str, message: &'static str) -> Self {
        Self {
            kind,
            severity: Severity::Destructive,
            title,
            message,
        }
    }

    pub fn missing_input() -> Self {
        Self::destructive(
            NoticeKind::MissingInput,
            "URL Required",
            "Please enter a Figma file URL to analyze",
        )
    }

    pub fn invalid_url() -> Self {
        Self::destructive(
            NoticeKind::InvalidUrl,
            "Invalid URL",
            "Please enter a valid Figma file URL",
        )
    }

    pub fn analysis_complete() -> Self {
        Self {
            kind: NoticeKind::AnalysisComplete,
            severity: Severity::Info,
            title: "Analysis Complete",
            message: "Your Figma file has been analyzed with brutal honesty!",
        }
    }

    pub fn busy() -> Self {
        Self::destructive(
            NoticeKind::Busy,
            "Analysis In Progress",
            "Wait for the current analysis to finish before submitting another file",
        )
    }

    pub fn timed_out() -> Self {
        Self::destructive(
            NoticeKind::TimedOut,
            "Analysis Timed Out",
            "The analysis took too long to complete. Please try again",
        )
    }

    pub fn generation_failed() -> Self {
        Self::destructive(
            NoticeKind::GenerationFailed,
            "Analysis Failed",
            "The design file could not be analyzed",
        )
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_completion_is_informational() {
        assert_eq!(Notice::analysis_complete().severity, Severity::Info);
        for n in [
            Notice::missing_input(),
            Notice::invalid_url(),
            Notice::busy(),
            Notice::timed_out(),
            Notice::generation_failed(),
        ] {
            assert_eq!(n.severity, Severity::Destructive, "{n}");
        }
    }

    #[test]
    fn display_joins_title_and_message() {
        assert_eq!(
            Notice::missing_input().to_string(),
            "URL Required: Please enter a Figma file URL to analyze"
        );
    }

    #[test]
    fn serializes_kind_as_camel_case() {
        let json = serde_json::to_value(Notice::invalid_url()).unwrap();
        assert_eq!(json["kind"], "invalidUrl");
        assert_eq!(json["severity"], "destructive");
    }
}
