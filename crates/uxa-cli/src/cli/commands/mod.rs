//! CLI command handlers, one per file.

mod analyze;
mod embed;
mod validate;

pub use analyze::run_analyze;
pub use embed::run_embed;
pub use validate::run_validate;
