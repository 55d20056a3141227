//! Design-file URL model.
//!
//! Validates user-supplied design-file references, extracts the file
//! identifier, and builds preview/embed links for the presentation layer.

mod embed;
mod file_id;
mod validate;

pub use embed::{embed_url, preview_reference};
pub use file_id::{extract_file_id, FileId};
pub use validate::{validate_design_url, HOST_MARKER};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_route_validates_and_yields_id() {
        let raw = "https://figma.com/file/ABC123/My-Design";
        assert!(validate_design_url(raw));
        assert_eq!(extract_file_id(raw).unwrap().as_str(), "ABC123");
    }

    #[test]
    fn design_route_validates_without_id() {
        let raw = "figma.com/design/xyz";
        assert!(validate_design_url(raw));
        assert!(extract_file_id(raw).is_none());
    }

    #[test]
    fn foreign_host_with_file_route_is_rejected_but_extractable() {
        let raw = "https://example.com/file/ABC123";
        assert!(!validate_design_url(raw));
        assert_eq!(extract_file_id(raw).unwrap().as_str(), "ABC123");
    }
}
