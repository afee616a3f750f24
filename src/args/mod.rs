use clap::Parser;
use std::time::Duration;

pub mod types;
pub mod validation;

pub use types::{Args, CleanArgs};

use crate::controller::nhl::UpstreamConfig;
use crate::error::ConfigError;
use crate::model::AbbreviationMap;

/// # Errors
///
/// Will return `Err` if the abbreviation file cannot be loaded
pub fn args_checks() -> Result<CleanArgs, ConfigError> {
    CleanArgs::new(Args::parse())
}

impl CleanArgs {
    /// # Errors
    ///
    /// Will return `Err` if the abbreviation file cannot be loaded
    pub fn new(args: Args) -> Result<Self, ConfigError> {
        let abbreviations = match &args.abbreviations_file {
            Some(path) => AbbreviationMap::from_file(path)?,
            None => AbbreviationMap::bundled(),
        };

        Ok(CleanArgs {
            bind: args.bind,
            port: args.port,
            season: args.season,
            cache_ttl: chrono::Duration::seconds(i64::from(args.cache_ttl_secs)),
            upstream: UpstreamConfig {
                stats_base_url: args.stats_base_url,
                web_base_url: args.web_base_url,
                timeout: Duration::from_secs(u64::from(args.upstream_timeout_secs)),
            },
            abbreviations,
            log_level: args.log_level,
        })
    }
}
