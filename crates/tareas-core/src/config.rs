//! Store connection parameters.
//!
//! Client-visible, non-secret config as used by this class of managed
//! store: the database endpoint and an optional auth key, supplied once
//! at startup.

use thiserror::Error;

const ENV_DATABASE_URL: &str = "TAREAS_DATABASE_URL";
const ENV_API_KEY: &str = "TAREAS_API_KEY";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    MissingVar(&'static str),
}

/// Connection parameters for the backing store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Database endpoint, e.g. `https://<project>-default-rtdb.firebaseio.com`.
    pub database_url: String,
    /// Optional auth token, sent as the `auth` query parameter.
    pub api_key: Option<String>,
}

impl StoreConfig {
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            api_key: None,
        }
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Read `TAREAS_DATABASE_URL` (required) and `TAREAS_API_KEY`
    /// (optional) from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = std::env::var(ENV_DATABASE_URL)
            .map_err(|_| ConfigError::MissingVar(ENV_DATABASE_URL))?;
        let api_key = std::env::var(ENV_API_KEY).ok();
        Ok(Self {
            database_url,
            api_key,
        })
    }
}
