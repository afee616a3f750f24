use ahash::RandomState;
use std::collections::{HashMap, HashSet};

use crate::error::ConfigError;

const DEFAULT_ABBREVIATIONS: &str = include_str!("../data/team_abbreviations.json");

/// Full team name to three-letter club code, loaded once at startup.
#[derive(Clone, Debug)]
pub struct AbbreviationMap {
    by_name: HashMap<String, String, RandomState>,
    codes: HashSet<String, RandomState>,
}

impl AbbreviationMap {
    /// # Errors
    ///
    /// Will return `Err` if `json` is not an object of string values, or is empty.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let by_name: HashMap<String, String, RandomState> = serde_json::from_str(json)?;
        if by_name.is_empty() {
            return Err(ConfigError::EmptyAbbreviations);
        }
        let codes = by_name.values().cloned().collect();
        Ok(Self { by_name, codes })
    }

    /// # Errors
    ///
    /// Will return `Err` if the file cannot be read or is not a valid map.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    /// The map bundled with the binary.
    ///
    /// # Panics
    ///
    /// Will panic if the bundled json is malformed, which the unit tests rule out.
    #[must_use]
    pub fn bundled() -> Self {
        Self::from_json_str(DEFAULT_ABBREVIATIONS).expect("bundled abbreviation map is valid")
    }

    #[must_use]
    pub fn code_for(&self, team_name: &str) -> Option<&str> {
        self.by_name.get(team_name).map(String::as_str)
    }

    #[must_use]
    pub fn contains_code(&self, code: &str) -> bool {
        self.codes.contains(code)
    }

    /// Number of team names the map knows.
    #[must_use]
    pub fn team_count(&self) -> usize {
        self.by_name.len()
    }
}
