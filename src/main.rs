use actix_web::web::Data;
use actix_web::{App, HttpServer, middleware};
use std::sync::Arc;
use tracing::{error, info};

use nhl_standings::args;
use nhl_standings::controller::nhl::ReqwestNhlClient;
use nhl_standings::controller::teams::{AppState, configure_routes, cors_headers};
use nhl_standings::logging::init_logging;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = match args::args_checks() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    };
    init_logging(&args.log_level)?;

    let client = ReqwestNhlClient::new(&args.upstream).inspect_err(|e| {
        error!(error = %e, "failed to build upstream client");
    })?;
    let state = AppState::new(
        Arc::new(client),
        args.abbreviations,
        args.season,
        args.cache_ttl,
    );

    info!(
        season = %args.season,
        cache_ttl_secs = args.cache_ttl.num_seconds(),
        teams = state.abbreviations.team_count(),
        "starting server on http://{}:{}",
        args.bind,
        args.port
    );

    HttpServer::new(move || {
        App::new()
            .app_data(Data::new(state.clone()))
            .wrap(cors_headers())
            .wrap(middleware::Logger::default())
            .configure(configure_routes)
    })
    .bind((args.bind.as_str(), args.port))?
    .run()
    .await?;
    Ok(())
}
