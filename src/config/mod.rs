pub mod request_headers;

use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use crate::utils::validation::{validate_at_least, validate_file_arg, Validate};
use clap::Parser;
use std::ffi::OsString;

/// Flags that may also be spelled with a single dash (`-urls list.txt`,
/// `-urls=list.txt`).
const LONG_FLAGS: &[&str] = &["urls", "reqheaders", "concurrency", "verbose", "log-format"];

#[derive(Debug, Clone, Parser)]
#[command(name = "checkcors")]
#[command(about = "Check that a list of URLs advertise permissive CORS headers")]
pub struct CliConfig {
    #[arg(long, value_name = "PATH", help = "path to file with list of URLs to check")]
    pub urls: String,

    #[arg(long, value_name = "PATH", help = "path to JSON file with request headers")]
    pub reqheaders: Option<String>,

    #[arg(long, help = "Maximum number of checks in flight (unbounded when omitted)")]
    pub concurrency: Option<usize>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_file_arg("urls", &self.urls)?;

        if let Some(path) = &self.reqheaders {
            validate_file_arg("reqheaders", path)?;
        }

        if let Some(limit) = self.concurrency {
            validate_at_least("concurrency", limit, 1)?;
        }

        Ok(())
    }
}

/// Rewrites single-dash long flags to the double-dash form clap expects.
/// Arguments after a bare `--` are left alone.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut flags_done = false;

    args.into_iter()
        .map(Into::<OsString>::into)
        .map(|arg| {
            if flags_done {
                return arg;
            }
            if arg == "--" {
                flags_done = true;
                return arg;
            }

            let rewritten = arg.to_str().and_then(|s| {
                let flag = s.strip_prefix('-').filter(|f| !f.starts_with('-'))?;
                let name = flag.split_once('=').map_or(flag, |(name, _)| name);
                LONG_FLAGS.contains(&name).then(|| OsString::from(format!("-{}", s)))
            });
            rewritten.unwrap_or(arg)
        })
        .collect()
}
