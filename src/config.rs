use std::path::PathBuf;

use crate::error::EngineError;
use crate::messages::{Language, Messages};

/// Application-level constants
pub const APP_NAME: &str = "Attesta";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable naming the SQLite database holding the doctor
/// registry and the fraud case table.
pub const ENV_DATABASE: &str = "ATTESTA_DATABASE";

/// Environment variable selecting the UI language (nl/fr/en).
pub const ENV_LANGUAGE: &str = "ATTESTA_LANGUAGE";

/// Get the application data directory
/// ~/Attesta/ on all platforms (user-visible, per design requirement)
pub fn app_data_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join("Attesta")
}

/// Default location of the registry/case database.
pub fn default_database_path() -> PathBuf {
    app_data_dir().join("attesta.db")
}

pub fn default_log_filter() -> String {
    format!("{}=info", env!("CARGO_PKG_NAME"))
}

/// Collaborator configuration, constructed by the caller and handed to the
/// engine. There are no module-level singletons: the caller owns the
/// database connection lifecycle.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub database_path: PathBuf,
    pub language: Language,
}

impl EngineConfig {
    /// Read configuration from the environment. A missing database location
    /// is a configuration error, reported directly and never retried.
    pub fn from_env() -> Result<Self, EngineError> {
        let language = std::env::var(ENV_LANGUAGE)
            .map(|code| Language::parse(&code))
            .unwrap_or_default();

        let database_path = match std::env::var(ENV_DATABASE) {
            Ok(path) if !path.trim().is_empty() => PathBuf::from(path),
            _ => {
                tracing::warn!("{ENV_DATABASE} is not set, registry database unreachable");
                return Err(EngineError::Configuration(Messages::db_config_missing(
                    language,
                )));
            }
        };

        Ok(Self {
            database_path,
            language,
        })
    }
}
