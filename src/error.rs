use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

/// Failure talking to the upstream statistics provider.
///
/// `Timeout` and `Network` mean the request never produced a usable response
/// and may succeed if tried again. `Status` and `Payload` mean the provider
/// answered, but not with something we can use.
#[derive(Clone, Debug, Error)]
pub enum UpstreamError {
    #[error("timed out fetching {resource}")]
    Timeout { resource: String },

    #[error("connection to {resource} failed: {message}")]
    Network { resource: String, message: String },

    #[error("{resource} responded with status {status}")]
    Status { resource: String, status: u16 },

    #[error("unexpected payload from {resource}: {message}")]
    Payload { resource: String, message: String },
}

impl UpstreamError {
    /// Classify a reqwest failure for `resource`.
    pub fn from_reqwest(resource: impl Into<String>, err: &reqwest::Error) -> Self {
        let resource = resource.into();
        if err.is_timeout() {
            Self::Timeout { resource }
        } else if let Some(status) = err.status() {
            Self::Status {
                resource,
                status: status.as_u16(),
            }
        } else if err.is_decode() {
            Self::Payload {
                resource,
                message: err.to_string(),
            }
        } else {
            Self::Network {
                resource,
                message: err.to_string(),
            }
        }
    }

    pub fn payload(resource: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Payload {
            resource: resource.into(),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn resource(&self) -> &str {
        match self {
            Self::Timeout { resource }
            | Self::Network { resource, .. }
            | Self::Status { resource, .. }
            | Self::Payload { resource, .. } => resource,
        }
    }

    /// Whether another attempt could plausibly succeed. Nothing retries
    /// automatically; this only informs logging and callers.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Timeout { .. } | Self::Network { .. } => true,
            Self::Status { status, .. } => *status == 429 || *status >= 500,
            Self::Payload { .. } => false,
        }
    }
}

/// A single team's auxiliary lookup that could not be completed. These are
/// logged by the aggregator and never reach a client.
#[derive(Debug, Error)]
pub enum LookupGap {
    #[error("no abbreviation found for team: {0}")]
    UnmappedTeam(String),

    #[error("season metadata lookup failed: {0}")]
    Upstream(#[from] UpstreamError),

    #[error("season metadata task aborted: {0}")]
    TaskAborted(String),
}

/// Error returned by request handlers. The `Display` text is what the client
/// sees in the `message` field, so upstream details stay in `source`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Team abbreviation {0} not found")]
    UnknownTeam(String),

    #[error("Invalid type {0}")]
    InvalidSeasonType(String),

    #[error("{context}")]
    Upstream {
        context: String,
        #[source]
        source: UpstreamError,
    },
}

impl AppError {
    pub fn upstream(context: impl Into<String>, source: UpstreamError) -> Self {
        Self::Upstream {
            context: context.into(),
            source,
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::UnknownTeam(_) => StatusCode::NOT_FOUND,
            AppError::InvalidSeasonType(_) => StatusCode::BAD_REQUEST,
            AppError::Upstream { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "message": self.to_string() }))
    }
}

/// Startup failures. These end the process before the server binds.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("abbreviation map is not valid json: {0}")]
    AbbreviationJson(#[from] serde_json::Error),

    #[error("abbreviation map is empty")]
    EmptyAbbreviations,

    #[error("invalid season {0}: expected two consecutive years like 20232024")]
    InvalidSeason(String),

    #[error("failed to build http client: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("log setup error: {0}")]
    LogSetup(String),
}
