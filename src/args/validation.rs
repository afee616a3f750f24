use std::{fs, path::PathBuf};

use crate::model::Season;

/// # Errors
///
/// Will return `Err` if the file is not readable
pub fn check_readable_file(file: &str) -> Result<String, String> {
    let path = PathBuf::from(file);
    if !path.is_file() || fs::metadata(&path).is_err() {
        return Err(format!("The file '{file}' is not readable."));
    }
    Ok(file.to_string())
}

/// # Errors
///
/// Will return `Err` if the value is not a season id like 20232024
pub fn parse_season(value: &str) -> Result<Season, String> {
    value.parse::<Season>().map_err(|e| e.to_string())
}

/// # Errors
///
/// Will return `Err` if the url is not http(s)
pub fn check_base_url(url: &str) -> Result<String, String> {
    let url = url.trim();
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"));
    match rest {
        Some(host) if !host.is_empty() => Ok(url.trim_end_matches('/').to_string()),
        _ => Err(format!("The base url '{url}' must start with http:// or https://.")),
    }
}

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// # Errors
///
/// Will return `Err` if the level is not one of trace, debug, info, warn, error
pub fn check_log_level(level: &str) -> Result<String, String> {
    let level = level.trim().to_ascii_lowercase();
    if LOG_LEVELS.contains(&level.as_str()) {
        Ok(level)
    } else {
        Err(format!(
            "The log level '{level}' is not valid. Expected one of {LOG_LEVELS:?}."
        ))
    }
}
