pub mod checker;
pub mod engine;
pub mod url_source;

pub use crate::domain::model::{CheckOutcome, HeaderMismatch, RunSummary, EXPECTED_HEADERS};
pub use crate::domain::ports::UrlCheck;
