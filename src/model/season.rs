use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// An NHL season id such as `20232024`: start year followed by end year.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Season(u32);

impl Season {
    /// # Errors
    ///
    /// Will return `Err` if `id` is not two consecutive four-digit years.
    pub fn new(id: u32) -> Result<Self, ConfigError> {
        let start = id / 10_000;
        let end = id % 10_000;
        if !(1000..=9999).contains(&start) || end != start + 1 {
            return Err(ConfigError::InvalidSeason(id.to_string()));
        }
        Ok(Self(id))
    }

    #[must_use]
    pub fn id(self) -> u32 {
        self.0
    }
}

impl Default for Season {
    fn default() -> Self {
        Self(20_232_024)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.len() != 8 {
            return Err(ConfigError::InvalidSeason(s.to_string()));
        }
        let id = trimmed
            .parse::<u32>()
            .map_err(|_| ConfigError::InvalidSeason(s.to_string()))?;
        Self::new(id)
    }
}

/// Which part of the season to report player stats for. The numeric code is
/// what the upstream API uses in URLs and in season metadata.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SeasonType {
    Regular,
    Playoff,
}

impl SeasonType {
    /// Game-type marker for playoff games in season metadata.
    pub const PLAYOFF_GAME_TYPE: u8 = 3;

    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            SeasonType::Regular => 2,
            SeasonType::Playoff => Self::PLAYOFF_GAME_TYPE,
        }
    }

    /// Parse the wire form used in request paths (`"2"` or `"3"`).
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "2" => Some(SeasonType::Regular),
            "3" => Some(SeasonType::Playoff),
            _ => None,
        }
    }
}

impl fmt::Display for SeasonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
