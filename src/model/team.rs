use serde::{Deserialize, Serialize};

use super::season::{Season, SeasonType};

/// Games in an NHL regular season; `progress` is wins against this.
pub const REGULAR_SEASON_GAMES: u32 = 82;

/// One row of the upstream team summary report. Only the fields we reshape
/// are kept; counts the provider leaves out or nulls read as zero.
#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RawTeamSummary {
    pub team_id: i64,
    pub team_full_name: String,
    #[serde(default)]
    pub wins: Option<u32>,
    #[serde(default)]
    pub losses: Option<u32>,
    #[serde(default)]
    pub ot_losses: Option<u32>,
}

#[derive(Deserialize, Debug)]
pub struct TeamSummaryReport {
    pub data: Option<Vec<RawTeamSummary>>,
}

/// A team's entry from the per-club season listing.
#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SeasonGameTypes {
    pub season: u32,
    #[serde(default)]
    pub game_types: Vec<u8>,
}

impl SeasonGameTypes {
    #[must_use]
    pub fn has_playoff_games(&self) -> bool {
        self.game_types.contains(&SeasonType::PLAYOFF_GAME_TYPE)
    }

    /// Pick the entry for `season` out of a club's season listing.
    #[must_use]
    pub fn find(entries: Vec<SeasonGameTypes>, season: Season) -> Option<SeasonGameTypes> {
        entries.into_iter().find(|entry| entry.season == season.id())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TeamSummary {
    pub id: i64,
    pub name: String,
    pub points: u32,
    pub record: String,
    #[serde(rename = "progress")]
    pub progress_percent: u32,
    pub has_playoff_games: bool,
}

impl TeamSummary {
    #[must_use]
    pub fn from_raw(raw: &RawTeamSummary, has_playoff_games: bool) -> Self {
        let wins = raw.wins.unwrap_or(0);
        TeamSummary {
            id: raw.team_id,
            name: raw.team_full_name.clone(),
            points: wins,
            record: format_record(raw.losses, raw.ot_losses),
            progress_percent: progress_percent(wins),
            has_playoff_games,
        }
    }
}

/// `"{losses}-{ot_losses}"`, missing counts shown as 0.
#[must_use]
pub fn format_record(losses: Option<u32>, ot_losses: Option<u32>) -> String {
    format!("{}-{}", losses.unwrap_or(0), ot_losses.unwrap_or(0))
}

/// Wins as a rounded percentage of a full regular season.
#[must_use]
pub fn progress_percent(wins: u32) -> u32 {
    // round half up in integer math: (wins * 100 + 41) / 82
    (wins * 100 + REGULAR_SEASON_GAMES / 2) / REGULAR_SEASON_GAMES
}
