use futures::future::join_all;
use std::sync::Arc;
use tracing::{info, warn};

use super::client::NhlApiClient;
use crate::error::{LookupGap, UpstreamError};
use crate::model::{AbbreviationMap, Season, TeamSummary};

/// Whether the club played playoff games in `season`. A club with no entry
/// for the season did not.
///
/// # Errors
///
/// Will return `Err` if the season listing cannot be fetched.
pub async fn playoff_participation(
    api: &dyn NhlApiClient,
    team_code: &str,
    season: Season,
) -> Result<bool, LookupGap> {
    let meta = api.fetch_team_season_meta(team_code, season).await?;
    Ok(meta.is_some_and(|entry| entry.has_playoff_games()))
}

/// Build the team list for `season`.
///
/// The summary report is fetched first; its failure fails the whole call.
/// Then one playoff lookup per team runs as its own task and all of them are
/// joined. A team whose name has no abbreviation, whose lookup fails, or whose
/// task dies is reported with `has_playoff_games = false` and nothing else
/// changes. Output keeps the report's order.
///
/// # Errors
///
/// Will return `Err` if the team summary report cannot be fetched.
pub async fn aggregate_teams(
    api: Arc<dyn NhlApiClient>,
    abbreviations: &AbbreviationMap,
    season: Season,
) -> Result<Vec<TeamSummary>, UpstreamError> {
    let raw_teams = api.fetch_team_summaries(season).await?;
    info!(count = raw_teams.len(), %season, "fetched team summaries");

    let lookups = raw_teams
        .iter()
        .map(|team| {
            let api = Arc::clone(&api);
            let code = abbreviations
                .code_for(&team.team_full_name)
                .map(str::to_owned);
            let team_name = team.team_full_name.clone();
            tokio::task::spawn(async move {
                match code {
                    Some(code) => playoff_participation(api.as_ref(), &code, season).await,
                    None => Err(LookupGap::UnmappedTeam(team_name)),
                }
            })
        })
        .collect::<Vec<_>>();

    let outcomes = join_all(lookups).await;

    let teams = raw_teams
        .iter()
        .zip(outcomes)
        .map(|(raw, joined)| {
            let outcome =
                joined.unwrap_or_else(|join_err| Err(LookupGap::TaskAborted(join_err.to_string())));
            let has_playoff_games = match outcome {
                Ok(flag) => flag,
                Err(gap) => {
                    warn!(
                        team = %raw.team_full_name,
                        error = %gap,
                        "treating team as without playoff games"
                    );
                    false
                }
            };
            TeamSummary::from_raw(raw, has_playoff_games)
        })
        .collect::<Vec<_>>();

    info!(count = teams.len(), "processed team summaries");
    Ok(teams)
}
