use clap::Parser;

use crate::controller::nhl::{DEFAULT_STATS_BASE_URL, DEFAULT_WEB_BASE_URL, UpstreamConfig};
use crate::model::{AbbreviationMap, Season};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Address the HTTP server binds to
    #[arg(long, env = "NHL_BIND", value_name = "ADDRESS", default_value = "0.0.0.0")]
    pub bind: String,

    #[arg(short = 'p', long, env = "NHL_PORT", value_name = "PORT", default_value_t = 3001)]
    pub port: u16,

    /// Season id used for every upstream call, e.g. 20232024
    #[arg(
        short = 's',
        long,
        env = "NHL_SEASON",
        value_name = "SEASON",
        default_value = "20232024",
        value_parser = crate::args::validation::parse_season
    )]
    pub season: Season,

    /// How long the team list is served from memory
    #[arg(
        long,
        env = "NHL_CACHE_TTL_SECS",
        value_name = "SECONDS",
        default_value_t = 300,
        value_parser = clap::value_parser!(u32).range(1..=86_400)
    )]
    pub cache_ttl_secs: u32,

    /// Timeout applied to each upstream request
    #[arg(
        long,
        env = "NHL_UPSTREAM_TIMEOUT_SECS",
        value_name = "SECONDS",
        default_value_t = 10,
        value_parser = clap::value_parser!(u32).range(1..=300)
    )]
    pub upstream_timeout_secs: u32,

    #[arg(
        long,
        env = "NHL_STATS_BASE_URL",
        value_name = "URL",
        default_value = DEFAULT_STATS_BASE_URL,
        value_parser = crate::args::validation::check_base_url
    )]
    pub stats_base_url: String,

    #[arg(
        long,
        env = "NHL_WEB_BASE_URL",
        value_name = "URL",
        default_value = DEFAULT_WEB_BASE_URL,
        value_parser = crate::args::validation::check_base_url
    )]
    pub web_base_url: String,

    /// JSON object of full team name to club code. Replaces the bundled map.
    #[arg(
        long,
        env = "NHL_ABBREVIATIONS_FILE",
        value_name = "FILE",
        value_parser = crate::args::validation::check_readable_file
    )]
    pub abbreviations_file: Option<String>,

    /// Log level for this service when RUST_LOG is not set
    #[arg(
        long,
        env = "NHL_LOG_LEVEL",
        value_name = "LEVEL",
        default_value = "info",
        value_parser = crate::args::validation::check_log_level
    )]
    pub log_level: String,
}

#[derive(Debug, Clone)]
pub struct CleanArgs {
    pub bind: String,
    pub port: u16,
    pub season: Season,
    pub cache_ttl: chrono::Duration,
    pub upstream: UpstreamConfig,
    pub abbreviations: AbbreviationMap,
    pub log_level: String,
}
