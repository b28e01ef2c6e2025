//! Error types for search and configuration

use std::path::PathBuf;

/// Message shown when the backend rejects a search without saying why
pub const SEARCH_FAILED: &str = "Search failed";

/// Message shown when the health probe marked the backend as down
pub const BACKEND_UNAVAILABLE: &str = "Backend service is not available. Please try again later.";

/// Errors surfaced by the search panel.
///
/// The `Display` output is what the user sees, so every variant renders as a
/// plain sentence. The type is `Clone` because it travels inside iced messages.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The request could not be sent or the response could not be read
    #[error("{0}")]
    Transport(String),

    /// The backend answered with a non-success status
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The backend answered 2xx with a body we could not parse
    #[error("{0}")]
    Decode(String),

    #[error("{}", BACKEND_UNAVAILABLE)]
    Unavailable,
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            SearchError::Decode(err.to_string())
        } else {
            SearchError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for SearchError {
    fn from(err: serde_json::Error) -> Self {
        SearchError::Decode(err.to_string())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid value for {key}: {value:?}")]
    InvalidEnv { key: &'static str, value: String },
}
