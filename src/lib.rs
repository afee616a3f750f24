pub mod args;
pub mod error;
pub mod logging;
pub mod model;
pub mod controller {
    pub mod nhl;
    pub mod teams;
}

pub use controller::teams::AppState;
pub use error::{AppError, ConfigError, UpstreamError};

/// Plain-text banner served at `/`.
pub const BANNER: &str = "NHL Team Data API";
