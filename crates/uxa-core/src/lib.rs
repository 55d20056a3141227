pub mod config;
pub mod logging;

pub mod error;
pub mod generator;
pub mod notice;
pub mod report;
pub mod request;
pub mod session;
pub mod url_model;

pub use error::AnalysisError;
pub use generator::{CannedCritique, CritiqueGenerator};
pub use notice::{Notice, NoticeKind};
pub use report::AnalysisReport;
pub use request::{AnalysisRequest, ValidatedRequest};
pub use session::{AnalysisSession, SessionPhase};
