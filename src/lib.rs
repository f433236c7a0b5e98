pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use app::run;
pub use config::CliConfig;
pub use self::core::{checker::Checker, engine::CheckEngine, url_source::UrlSource};
pub use utils::error::{CheckCorsError, CheckError, Result};
