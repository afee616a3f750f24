#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Duration;
use serde_json::json;
use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use nhl_standings::controller::nhl::{Clock, NhlApiClient};
use nhl_standings::error::UpstreamError;
use nhl_standings::model::{
    AbbreviationMap, PlayerStatsBundle, RawTeamSummary, ScheduleEntry, Season, SeasonGameTypes,
    SeasonType,
};
use nhl_standings::AppState;

/// In-memory stand-in for the NHL endpoints. `None` payloads answer with the
/// error the real client would produce for a broken response.
#[derive(Default)]
pub struct MockNhlClient {
    pub teams: Option<Vec<RawTeamSummary>>,
    pub playoff_teams: HashSet<String>,
    pub failing_meta: HashSet<String>,
    pub panicking_meta: HashSet<String>,
    pub schedule: Option<Vec<ScheduleEntry>>,
    pub players: Option<PlayerStatsBundle>,
    pub summary_delay: Option<std::time::Duration>,
    pub summary_calls: AtomicUsize,
    pub meta_calls: AtomicUsize,
    pub schedule_calls: AtomicUsize,
    pub player_calls: AtomicUsize,
}

impl MockNhlClient {
    pub fn with_teams(teams: Vec<RawTeamSummary>) -> Self {
        Self {
            teams: Some(teams),
            ..Self::default()
        }
    }

    pub fn playoff(mut self, codes: &[&str]) -> Self {
        self.playoff_teams = codes.iter().map(|c| (*c).to_string()).collect();
        self
    }

    pub fn failing(mut self, codes: &[&str]) -> Self {
        self.failing_meta = codes.iter().map(|c| (*c).to_string()).collect();
        self
    }

    pub fn panicking(mut self, codes: &[&str]) -> Self {
        self.panicking_meta = codes.iter().map(|c| (*c).to_string()).collect();
        self
    }

    pub fn schedule(mut self, entries: Vec<ScheduleEntry>) -> Self {
        self.schedule = Some(entries);
        self
    }

    pub fn players(mut self, bundle: PlayerStatsBundle) -> Self {
        self.players = Some(bundle);
        self
    }

    pub fn slow_summaries(mut self, delay: std::time::Duration) -> Self {
        self.summary_delay = Some(delay);
        self
    }

    pub fn calls(counter: &AtomicUsize) -> usize {
        counter.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl NhlApiClient for MockNhlClient {
    async fn fetch_team_summaries(
        &self,
        _season: Season,
    ) -> Result<Vec<RawTeamSummary>, UpstreamError> {
        self.summary_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.summary_delay {
            tokio::time::sleep(delay).await;
        }
        self.teams
            .clone()
            .ok_or_else(|| UpstreamError::payload("team summary", "missing data array"))
    }

    async fn fetch_team_season_meta(
        &self,
        team_code: &str,
        season: Season,
    ) -> Result<Option<SeasonGameTypes>, UpstreamError> {
        self.meta_calls.fetch_add(1, Ordering::SeqCst);
        if self.panicking_meta.contains(team_code) {
            panic!("season listing handler blew up for {team_code}");
        }
        if self.failing_meta.contains(team_code) {
            return Err(UpstreamError::Network {
                resource: format!("club season listing {team_code}"),
                message: "connection reset".into(),
            });
        }
        let game_types = if self.playoff_teams.contains(team_code) {
            vec![2, 3]
        } else {
            vec![2]
        };
        Ok(Some(SeasonGameTypes {
            season: season.id(),
            game_types,
        }))
    }

    async fn fetch_schedule_window(&self) -> Result<Vec<ScheduleEntry>, UpstreamError> {
        self.schedule_calls.fetch_add(1, Ordering::SeqCst);
        self.schedule.clone().ok_or_else(|| UpstreamError::Timeout {
            resource: "schedule".into(),
        })
    }

    async fn fetch_player_stats(
        &self,
        team_code: &str,
        season: Season,
        season_type: SeasonType,
    ) -> Result<PlayerStatsBundle, UpstreamError> {
        self.player_calls.fetch_add(1, Ordering::SeqCst);
        self.players.clone().ok_or_else(|| {
            UpstreamError::payload(
                format!("club stats {team_code}/{season}/{season_type}"),
                "missing field `goalies`",
            )
        })
    }
}

pub fn raw_team(
    id: i64,
    name: &str,
    wins: u32,
    losses: u32,
    ot_losses: Option<u32>,
) -> RawTeamSummary {
    RawTeamSummary {
        team_id: id,
        team_full_name: name.to_string(),
        wins: Some(wins),
        losses: Some(losses),
        ot_losses,
    }
}

/// Three mapped clubs and one name the abbreviation map does not know.
pub fn fixture_teams() -> Vec<RawTeamSummary> {
    vec![
        raw_team(6, "Boston Bruins", 47, 20, Some(15)),
        raw_team(10, "Toronto Maple Leafs", 46, 26, Some(10)),
        raw_team(13, "Florida Panthers", 52, 24, None),
        raw_team(99, "Quebec Nordiques", 30, 10, None),
    ]
}

pub fn game(day: &str, home: &str, away: &str, start: &str) -> ScheduleEntry {
    ScheduleEntry {
        day_abbrev: day.to_string(),
        home_team_code: home.to_string(),
        away_team_code: away.to_string(),
        venue: format!("{home} Arena"),
        start_time_utc: start.to_string(),
    }
}

pub fn player_bundle() -> PlayerStatsBundle {
    PlayerStatsBundle {
        skaters: vec![
            json!({ "playerId": 8479318, "firstName": { "default": "Auston" }, "goals": 69 }),
            json!({ "playerId": 8478483, "firstName": { "default": "Mitch" }, "goals": 26 }),
        ],
        goalies: vec![json!({ "playerId": 8479361, "wins": 23 })],
    }
}

pub fn state_for(mock: Arc<MockNhlClient>) -> AppState {
    AppState::new(
        mock,
        AbbreviationMap::bundled(),
        Season::default(),
        Duration::seconds(300),
    )
}

pub fn state_with_clock(mock: Arc<MockNhlClient>, clock: Arc<dyn Clock>) -> AppState {
    AppState::with_clock(
        mock,
        AbbreviationMap::bundled(),
        Season::default(),
        Duration::seconds(300),
        clock,
    )
}
