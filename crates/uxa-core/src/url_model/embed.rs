//! Preview and embed URL construction.

use super::file_id::FileId;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::Url;

/// Characters escaped by JavaScript's `encodeURIComponent`: everything
/// except ASCII alphanumerics and `-_.!~*'()`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Builds `<endpoint>?embed_host=share&url=<encoded raw input>`.
///
/// The raw input is percent-encoded as a URI component, exactly as
/// submitted. `endpoint` must be an absolute URL without a query.
pub fn embed_url(endpoint: &str, raw: &str) -> Result<String, url::ParseError> {
    let base = Url::parse(endpoint)?;
    let encoded = utf8_percent_encode(raw, URI_COMPONENT);
    Ok(format!("{}?embed_host=share&url={encoded}", base.as_str()))
}

/// Canonical preview reference: `<base><id>` when an identifier was
/// extracted, otherwise the raw URL unchanged.
pub fn preview_reference(base: &str, file_id: Option<&FileId>, raw: &str) -> String {
    match file_id {
        Some(id) => format!("{base}{id}"),
        None => raw.to_string(),
    }
}
