use chrono::Duration;
use std::sync::Arc;

use crate::controller::nhl::{Clock, NhlApiClient, SlotCache, SystemClock};
use crate::error::UpstreamError;
use crate::model::{AbbreviationMap, Season, TeamSummary};

/// Everything the handlers share. Cloned into each actix worker; the cache
/// and client sit behind `Arc`s so all workers see the same slot.
#[derive(Clone)]
pub struct AppState {
    pub api: Arc<dyn NhlApiClient>,
    pub abbreviations: Arc<AbbreviationMap>,
    pub team_cache: Arc<SlotCache<Vec<TeamSummary>, UpstreamError>>,
    pub season: Season,
}

impl AppState {
    #[must_use]
    pub fn new(
        api: Arc<dyn NhlApiClient>,
        abbreviations: AbbreviationMap,
        season: Season,
        cache_ttl: Duration,
    ) -> Self {
        Self::with_clock(api, abbreviations, season, cache_ttl, Arc::new(SystemClock))
    }

    #[must_use]
    pub fn with_clock(
        api: Arc<dyn NhlApiClient>,
        abbreviations: AbbreviationMap,
        season: Season,
        cache_ttl: Duration,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            api,
            abbreviations: Arc::new(abbreviations),
            team_cache: Arc::new(SlotCache::with_clock(cache_ttl, clock)),
            season,
        }
    }
}
