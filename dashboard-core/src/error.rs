//! Typed errors for the dashboard.
//!
//! The API client reports what actually happened on the wire (`ClientError`);
//! the orchestrator classifies that into the user-facing taxonomy
//! (`SearchError`) by structured match, never by message inspection.

use thiserror::Error;

/// Validation failures for the city input. Recovered locally, surfaced as a
/// user message, never logged as a system failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Please enter a city name")]
    Empty,

    #[error("City name must be at least 2 characters long")]
    TooShort,
}

/// Failure surface of the weather API client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Non-2xx HTTP status; carries the status code and the raw body.
    #[error("provider returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// HTTP 200 with an embedded provider error code (`cod` != 200).
    #[error("provider error code {cod}: {message}")]
    Provider { cod: String, message: String },

    /// The request could not be completed (connectivity, DNS, body read).
    #[error("transport failure: {0}")]
    Transport(String),

    /// The body was not the JSON the provider documents.
    #[error("failed to parse provider response: {0}")]
    Parse(String),
}

/// The user-facing error taxonomy for one search.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error(transparent)]
    InvalidInput(#[from] InputError),

    #[error("location not found")]
    NotFound,

    #[error("credential rejected by provider")]
    Unauthorized,

    #[error("request throttled by provider")]
    RateLimited,

    #[error("network failure")]
    Transport,

    #[error("provider request failed")]
    Provider,
}

impl SearchError {
    /// Message shown to the user. Unmapped cases fall through to a generic
    /// "try again" message; nothing internal ever reaches the surface.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidInput(err) => err.to_string(),
            Self::NotFound => "City not found. Please check the spelling and try again.".into(),
            Self::Unauthorized => "API key error. Please check the configuration.".into(),
            Self::RateLimited => "Too many requests. Please try again later.".into(),
            Self::Transport => "Network error. Please try again later.".into(),
            Self::Provider => "Failed to fetch weather data. Please try again.".into(),
        }
    }
}

impl From<ClientError> for SearchError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Status { status: 404, .. } => Self::NotFound,
            ClientError::Status { status: 401, .. } => Self::Unauthorized,
            ClientError::Status { status: 429, .. } => Self::RateLimited,
            ClientError::Transport(_) => Self::Transport,
            ClientError::Status { .. } | ClientError::Provider { .. } | ClientError::Parse(_) => {
                Self::Provider
            }
        }
    }
}
