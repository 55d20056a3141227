//! File identifier extraction from design-file URLs.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

static FILE_ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"file/([a-zA-Z0-9]+)").expect("static file id pattern"));

/// Alphanumeric token naming a design file within the tool's URL scheme.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct FileId(String);

impl FileId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Extracts the identifier following the first `file/` segment in `raw`.
///
/// Only the `file/` route is recognised. Prototype and design routes pass
/// validation but yield `None` here; callers fall back to the raw URL.
pub fn extract_file_id(raw: &str) -> Option<FileId> {
    FILE_ID_PATTERN
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .map(|m| FileId(m.as_str().to_string()))
}
