use actix_web::middleware::DefaultHeaders;
use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};
use std::sync::Arc;
use tracing::{error, info, warn};

use super::state::AppState;
use crate::BANNER;
use crate::controller::nhl::aggregate_teams;
use crate::error::AppError;
use crate::model::{SeasonType, find_upcoming_game};

/// Registers every route the service exposes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/health", web::get().to(HttpResponse::Ok))
        .route("/api/teams", web::get().to(teams))
        .route(
            "/api/team/{abbr}/upcoming-games",
            web::get().to(upcoming_game),
        )
        .route("/api/team/{abbr}/players/{type}", web::get().to(players));
}

/// The browser UI is served from another origin.
#[must_use]
pub fn cors_headers() -> DefaultHeaders {
    DefaultHeaders::new().add(("Access-Control-Allow-Origin", "*"))
}

pub async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(BANNER)
}

/// # Errors
///
/// Will return `Err` if the cache is cold and the team summary report cannot be fetched.
pub async fn teams(state: Data<AppState>) -> Result<HttpResponse, AppError> {
    info!("fetching teams data");
    let api = Arc::clone(&state.api);
    let teams = state
        .team_cache
        .get_or_try_refresh(|| aggregate_teams(api, &state.abbreviations, state.season))
        .await
        .map_err(|e| {
            error!(error = %e, retryable = e.is_retryable(), "error fetching teams data");
            AppError::upstream("Error fetching teams data", e)
        })?;

    Ok(HttpResponse::Ok().json(teams.as_slice()))
}

/// Soonest game in the current schedule window for the team, or `null`.
///
/// # Errors
///
/// Will return `Err` if the schedule window cannot be fetched.
pub async fn upcoming_game(
    path: web::Path<String>,
    state: Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let abbr = path.into_inner();
    let schedule = state.api.fetch_schedule_window().await.map_err(|e| {
        error!(team = %abbr, error = %e, "error fetching upcoming games");
        AppError::upstream("Error fetching upcoming games", e)
    })?;

    let game = find_upcoming_game(schedule, &abbr);
    if game.is_none() {
        info!(team = %abbr, "no upcoming game in schedule window");
    }
    Ok(HttpResponse::Ok().json(game))
}

/// # Errors
///
/// Will return `Err` if the season type is not `2` or `3`, the team code is
/// unknown, or the player stats cannot be fetched.
pub async fn players(
    path: web::Path<(String, String)>,
    state: Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let (abbr, type_code) = path.into_inner();

    let Some(season_type) = SeasonType::from_code(&type_code) else {
        warn!(season_type = %type_code, "invalid season type");
        return Err(AppError::InvalidSeasonType(type_code));
    };

    if !state.abbreviations.contains_code(&abbr) {
        warn!(team = %abbr, "team abbreviation not found");
        return Err(AppError::UnknownTeam(abbr));
    }

    let bundle = state
        .api
        .fetch_player_stats(&abbr, state.season, season_type)
        .await
        .map_err(|e| {
            error!(team = %abbr, %season_type, error = %e, "error fetching player data");
            AppError::upstream(
                format!("Error fetching player data for {abbr} (type {type_code})"),
                e,
            )
        })?;

    info!(
        team = %abbr,
        %season_type,
        skaters = bundle.skaters.len(),
        goalies = bundle.goalies.len(),
        "fetched player and goalie data"
    );
    Ok(HttpResponse::Ok().json(bundle))
}
