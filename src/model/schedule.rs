use serde::{Deserialize, Serialize};

/// One game from the rolling schedule window, as returned to clients.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ScheduleEntry {
    #[serde(rename = "dayAbbrev")]
    pub day_abbrev: String,
    #[serde(rename = "homeTeam")]
    pub home_team_code: String,
    #[serde(rename = "awayTeam")]
    pub away_team_code: String,
    pub venue: String,
    #[serde(rename = "startTimeUTC")]
    pub start_time_utc: String,
}

impl ScheduleEntry {
    #[must_use]
    pub fn involves(&self, team_code: &str) -> bool {
        self.home_team_code == team_code || self.away_team_code == team_code
    }
}

/// Upstream `schedule/now` payload: a week of days, each with its games.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleWindow {
    pub game_week: Vec<ScheduleDay>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDay {
    pub day_abbrev: String,
    #[serde(default)]
    pub games: Vec<ScheduledGame>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledGame {
    pub venue: LocalizedName,
    #[serde(rename = "startTimeUTC")]
    pub start_time_utc: String,
    pub home_team: TeamRef,
    pub away_team: TeamRef,
}

#[derive(Deserialize, Debug)]
pub struct LocalizedName {
    pub default: String,
}

#[derive(Deserialize, Debug)]
pub struct TeamRef {
    pub abbrev: String,
}

impl ScheduleWindow {
    /// Flatten days into games, each tagged with its day's abbreviation,
    /// keeping the upstream (chronological) order.
    #[must_use]
    pub fn into_entries(self) -> Vec<ScheduleEntry> {
        self.game_week
            .into_iter()
            .flat_map(|day| {
                let day_abbrev = day.day_abbrev;
                day.games.into_iter().map(move |game| ScheduleEntry {
                    day_abbrev: day_abbrev.clone(),
                    home_team_code: game.home_team.abbrev,
                    away_team_code: game.away_team.abbrev,
                    venue: game.venue.default,
                    start_time_utc: game.start_time_utc,
                })
            })
            .collect()
    }
}

/// The soonest game in `entries` that `team_code` plays in, home or away.
#[must_use]
pub fn find_upcoming_game(entries: Vec<ScheduleEntry>, team_code: &str) -> Option<ScheduleEntry> {
    entries.into_iter().find(|entry| entry.involves(team_code))
}
