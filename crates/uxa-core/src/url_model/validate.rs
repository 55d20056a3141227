//! Design-file URL validation.

/// Host marker every accepted design-file reference must contain.
pub const HOST_MARKER: &str = "figma.com";

/// Route segments accepted when the input is not a well-formed absolute URL.
const FALLBACK_ROUTES: [&str; 3] = ["/file/", "/proto/", "/design/"];

/// Returns true when `raw` looks like a reference to a design file.
///
/// The check is purely syntactic and never touches the network:
/// - the trimmed, lower-cased input must contain [`HOST_MARKER`];
/// - if `raw` parses as an absolute URL, that is enough (path shape is not checked);
/// - otherwise one of the `/file/`, `/proto/`, `/design/` routes must appear.
pub fn validate_design_url(raw: &str) -> bool {
    let normalized = raw.trim().to_lowercase();
    if !normalized.contains(HOST_MARKER) {
        return false;
    }

    if url::Url::parse(raw).is_ok() {
        return true;
    }

    FALLBACK_ROUTES
        .iter()
        .any(|route| normalized.contains(route))
}
