//! Environment-driven runtime configuration.
//!
//! # Responsibility
//! - Resolve fixture source and logging settings from the environment.
//! - Build the record store the rest of the core reads from.
//!
//! # Invariants
//! - Blank environment values are treated as unset.
//! - Without a fixture path the compiled-in fixture is used.

use crate::logging::{default_log_level, init_logging};
use crate::repo::contact_repo::{InMemoryContactRepository, RepoError};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const ENV_FIXTURE_PATH: &str = "LINKBOARD_FIXTURE_PATH";
pub const ENV_LOG_LEVEL: &str = "LINKBOARD_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "LINKBOARD_LOG_DIR";

#[derive(Debug)]
pub enum ConfigError {
    /// Fixture file could not be loaded or failed validation.
    Fixture { path: PathBuf, source: RepoError },
    Logging(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fixture { path, source } => {
                write!(f, "fixture `{}` unusable: {source}", path.display())
            }
            Self::Logging(message) => write!(f, "logging setup failed: {message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Fixture { source, .. } => Some(source),
            Self::Logging(_) => None,
        }
    }
}

/// Resolved runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub fixture_path: Option<PathBuf>,
    pub log_level: String,
    /// Logging stays off when unset.
    pub log_dir: Option<PathBuf>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            fixture_path: None,
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl DashboardConfig {
    /// Reads `LINKBOARD_*` variables from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves settings through `lookup`, for callers and tests that do not
    /// want to touch the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Self {
            fixture_path: non_blank(ENV_FIXTURE_PATH).map(PathBuf::from),
            log_level: non_blank(ENV_LOG_LEVEL).unwrap_or_else(|| default_log_level().to_string()),
            log_dir: non_blank(ENV_LOG_DIR).map(PathBuf::from),
        }
    }

    /// Starts file logging when a log directory is configured.
    ///
    /// Returns `Ok(false)` when logging is not configured.
    pub fn init_logging(&self) -> Result<bool, ConfigError> {
        let Some(dir) = &self.log_dir else {
            return Ok(false);
        };
        init_logging(&self.log_level, &dir.to_string_lossy()).map_err(ConfigError::Logging)?;
        Ok(true)
    }

    /// Builds the record store named by this configuration.
    pub fn load_repository(&self) -> Result<InMemoryContactRepository, ConfigError> {
        match &self.fixture_path {
            Some(path) => InMemoryContactRepository::from_json_file(path).map_err(|source| {
                ConfigError::Fixture {
                    path: path.clone(),
                    source,
                }
            }),
            None => {
                info!("event=fixture_load module=config status=ok source=builtin");
                Ok(InMemoryContactRepository::builtin())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DashboardConfig, ENV_FIXTURE_PATH, ENV_LOG_LEVEL};
    use crate::logging::default_log_level;
    use std::path::PathBuf;

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = DashboardConfig::from_lookup(|key| match key {
            ENV_FIXTURE_PATH => Some("   ".to_string()),
            _ => None,
        });
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.log_level, default_log_level());
    }

    #[test]
    fn lookup_values_are_trimmed() {
        let config = DashboardConfig::from_lookup(|key| match key {
            ENV_FIXTURE_PATH => Some(" /tmp/contacts.json ".to_string()),
            ENV_LOG_LEVEL => Some("warn".to_string()),
            _ => None,
        });
        assert_eq!(config.fixture_path, Some(PathBuf::from("/tmp/contacts.json")));
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir, None);
    }

    #[test]
    fn logging_is_skipped_without_directory() {
        let config = DashboardConfig::default();
        assert!(!config.init_logging().expect("no-op init"));
    }
}
