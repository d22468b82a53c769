use serde::Deserialize;

use crate::nlp::ExtractorKind;

/// Configuration options for the assistant service.
///
/// Loaded from an optional YAML file and `APP_*` environment variables.
#[derive(Clone, Debug, Deserialize)]
pub struct ServerConfig {
    /// Path of the SQLite database file.
    pub database_url: String,
    #[serde(default = "default_address")]
    pub address: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Entity extractor selected at startup.
    #[serde(default)]
    pub extractor: ExtractorKind,
    /// Number of suggestions returned by `GET /suggestions`.
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: usize,
    /// History size used when the request does not pass `limit`.
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
    /// Upper bound for the `limit` query parameter of `GET /history`.
    #[serde(default = "default_max_history_limit")]
    pub max_history_limit: usize,
}

fn default_address() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_suggestion_limit() -> usize {
    6
}

fn default_history_limit() -> usize {
    50
}

fn default_max_history_limit() -> usize {
    500
}

impl ServerConfig {
    /// Configuration with defaults for everything but the database path.
    pub fn with_database(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            address: default_address(),
            port: default_port(),
            extractor: ExtractorKind::default(),
            suggestion_limit: default_suggestion_limit(),
            history_limit: default_history_limit(),
            max_history_limit: default_max_history_limit(),
        }
    }
}
