use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use crate::error::UpstreamError;
use crate::model::{
    PlayerStatsBundle, RawTeamSummary, ScheduleEntry, ScheduleWindow, Season, SeasonGameTypes,
    SeasonType, TeamSummaryReport,
};

pub const DEFAULT_STATS_BASE_URL: &str = "https://api.nhle.com/stats/rest/en";
pub const DEFAULT_WEB_BASE_URL: &str = "https://api-web.nhle.com/v1";
pub const DEFAULT_UPSTREAM_TIMEOUT: Duration = Duration::from_secs(10);

/// Read-only access to the NHL statistics endpoints the service depends on.
#[async_trait]
pub trait NhlApiClient: Send + Sync {
    /// Every team's summary row for `season`, in provider order.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the call fails or the report is not a non-empty list.
    async fn fetch_team_summaries(&self, season: Season)
    -> Result<Vec<RawTeamSummary>, UpstreamError>;

    /// The club's entry for `season` from its season listing, if it has one.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the call fails or the listing is malformed.
    async fn fetch_team_season_meta(
        &self,
        team_code: &str,
        season: Season,
    ) -> Result<Option<SeasonGameTypes>, UpstreamError>;

    /// All games in the current rolling schedule window, soonest first.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the call fails or the window is malformed.
    async fn fetch_schedule_window(&self) -> Result<Vec<ScheduleEntry>, UpstreamError>;

    /// # Errors
    ///
    /// Will return `Err` if the call fails or either player array is missing.
    async fn fetch_player_stats(
        &self,
        team_code: &str,
        season: Season,
        season_type: SeasonType,
    ) -> Result<PlayerStatsBundle, UpstreamError>;
}

#[derive(Clone, Debug)]
pub struct UpstreamConfig {
    pub stats_base_url: String,
    pub web_base_url: String,
    pub timeout: Duration,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            stats_base_url: DEFAULT_STATS_BASE_URL.to_string(),
            web_base_url: DEFAULT_WEB_BASE_URL.to_string(),
            timeout: DEFAULT_UPSTREAM_TIMEOUT,
        }
    }
}

/// `NhlApiClient` over HTTP. One pooled `reqwest::Client` is shared by all calls.
#[derive(Clone)]
pub struct ReqwestNhlClient {
    client: Client,
    stats_base_url: String,
    web_base_url: String,
}

impl ReqwestNhlClient {
    /// # Errors
    ///
    /// Will return `Err` if the underlying HTTP client cannot be built.
    pub fn new(config: &UpstreamConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.timeout)
            .build()?;
        Ok(Self {
            client,
            stats_base_url: config.stats_base_url.trim_end_matches('/').to_string(),
            web_base_url: config.web_base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        resource: &str,
        url: &str,
    ) -> Result<T, UpstreamError> {
        debug!(resource, url, "upstream request");
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| UpstreamError::from_reqwest(resource, &e))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(UpstreamError::Status {
                resource: resource.to_string(),
                status: status.as_u16(),
            });
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| UpstreamError::from_reqwest(resource, &e))?;
        serde_json::from_slice(&body).map_err(|e| UpstreamError::payload(resource, e.to_string()))
    }
}

#[async_trait]
impl NhlApiClient for ReqwestNhlClient {
    async fn fetch_team_summaries(
        &self,
        season: Season,
    ) -> Result<Vec<RawTeamSummary>, UpstreamError> {
        let resource = "team summary";
        let url = format!(
            "{}/team/summary?cayenneExp=seasonId={season}",
            self.stats_base_url
        );
        let report: TeamSummaryReport = self.get_json(resource, &url).await?;
        match report.data {
            Some(teams) if !teams.is_empty() => Ok(teams),
            Some(_) => Err(UpstreamError::payload(resource, "team list is empty")),
            None => Err(UpstreamError::payload(resource, "missing data array")),
        }
    }

    async fn fetch_team_season_meta(
        &self,
        team_code: &str,
        season: Season,
    ) -> Result<Option<SeasonGameTypes>, UpstreamError> {
        let resource = format!("club season listing {team_code}");
        let url = format!("{}/club-stats-season/{team_code}", self.web_base_url);
        let entries: Vec<SeasonGameTypes> = self.get_json(&resource, &url).await?;
        Ok(SeasonGameTypes::find(entries, season))
    }

    async fn fetch_schedule_window(&self) -> Result<Vec<ScheduleEntry>, UpstreamError> {
        let url = format!("{}/schedule/now", self.web_base_url);
        let window: ScheduleWindow = self.get_json("schedule", &url).await?;
        Ok(window.into_entries())
    }

    async fn fetch_player_stats(
        &self,
        team_code: &str,
        season: Season,
        season_type: SeasonType,
    ) -> Result<PlayerStatsBundle, UpstreamError> {
        let resource = format!("club stats {team_code}/{season}/{season_type}");
        let url = format!(
            "{}/club-stats/{team_code}/{season}/{season_type}",
            self.web_base_url
        );
        self.get_json(&resource, &url).await
    }
}
