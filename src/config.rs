//! Application-level configuration loaded once at startup from the env file and process environment.

use std::{env, path::PathBuf, str::FromStr, time::Duration};

use thiserror::Error;
use tracing::info;

/// Default location of the env file read at startup.
const DEFAULT_ENV_FILE: &str = ".env";
/// Environment variable that overrides [`DEFAULT_ENV_FILE`].
const ENV_FILE_ENV: &str = "XO_GAME_ENV_FILE";
const DEFAULT_MONGO_URI: &str = "mongodb://localhost:27017";
const DEFAULT_PORT: u16 = 8080;

/// Errors raised while assembling the [`AppConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The env file is missing or unreadable.
    #[error("failed to load env file `{path}`")]
    EnvFile {
        /// Path that was tried.
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },
    /// A variable is set but cannot be parsed.
    #[error("invalid value `{value}` for `{var}`: expected {expected}")]
    InvalidValue {
        /// Name of the offending variable.
        var: &'static str,
        /// Raw value found.
        value: String,
        /// Description of the accepted values.
        expected: &'static str,
    },
}

/// Storage backend selected at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    /// MongoDB, the production backend.
    Mongo,
    /// Process memory; data is lost on exit.
    Memory,
}

impl FromStr for StoreKind {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "mongo" | "mongodb" => Ok(Self::Mongo),
            "memory" => Ok(Self::Memory),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone)]
/// Immutable runtime configuration shared across the application.
pub struct AppConfig {
    /// MongoDB connection string.
    pub mongo_uri: String,
    /// Database name override; `None` keeps the built-in default.
    pub mongo_db: Option<String>,
    /// TCP port the HTTP server listens on.
    pub port: u16,
    /// Skip undecodable documents while listing instead of failing.
    pub skip_malformed: bool,
    /// Upper bound for a single storage call; `None` waits indefinitely.
    pub store_timeout: Option<Duration>,
    /// Backend to run against.
    pub store: StoreKind,
}

impl AppConfig {
    /// Load the env file, then read the configuration from the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        let path = resolve_env_file();
        dotenvy::from_path(&path).map_err(|source| ConfigError::EnvFile {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), "loaded env file");

        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |var: &str| lookup(var).filter(|value| !value.trim().is_empty());

        let mongo_uri = lookup("MONGO_URI").unwrap_or_else(|| DEFAULT_MONGO_URI.to_owned());
        let mongo_db = lookup("MONGO_DB");

        let port = match lookup("PORT").or_else(|| lookup("SERVER_PORT")) {
            Some(value) => parse(&value, "PORT", "a TCP port number")?,
            None => DEFAULT_PORT,
        };

        let skip_malformed = match lookup("XO_GAME_SKIP_MALFORMED") {
            Some(value) => parse_bool(&value, "XO_GAME_SKIP_MALFORMED")?,
            None => true,
        };

        let store_timeout = match lookup("XO_GAME_STORE_TIMEOUT_MS") {
            Some(value) => {
                let millis: u64 = parse(&value, "XO_GAME_STORE_TIMEOUT_MS", "milliseconds")?;
                (millis > 0).then(|| Duration::from_millis(millis))
            }
            None => None,
        };

        let store = match lookup("XO_GAME_STORE") {
            Some(value) => value.parse::<StoreKind>().map_err(|()| ConfigError::InvalidValue {
                var: "XO_GAME_STORE",
                value,
                expected: "`mongo` or `memory`",
            })?,
            None => StoreKind::Mongo,
        };

        Ok(Self {
            mongo_uri,
            mongo_db,
            port,
            skip_malformed,
            store_timeout,
            store,
        })
    }
}

/// Resolve the env file path taking the environment override into account.
fn resolve_env_file() -> PathBuf {
    env::var_os(ENV_FILE_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ENV_FILE))
}

fn parse<T: FromStr>(
    value: &str,
    var: &'static str,
    expected: &'static str,
) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue {
            var,
            value: value.to_owned(),
            expected,
        })
}

fn parse_bool(value: &str, var: &'static str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            var,
            value: value.to_owned(),
            expected: "a boolean",
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|var| vars.get(var).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.mongo_uri, "mongodb://localhost:27017");
        assert_eq!(config.mongo_db, None);
        assert_eq!(config.port, 8080);
        assert!(config.skip_malformed);
        assert_eq!(config.store_timeout, None);
        assert_eq!(config.store, StoreKind::Mongo);
    }

    #[test]
    fn empty_mongo_uri_falls_back_to_default() {
        let config = config_from(&[("MONGO_URI", "")]).unwrap();
        assert_eq!(config.mongo_uri, "mongodb://localhost:27017");
    }

    #[test]
    fn reads_every_variable() {
        let config = config_from(&[
            ("MONGO_URI", "mongodb://db:27017"),
            ("MONGO_DB", "other"),
            ("SERVER_PORT", "9000"),
            ("XO_GAME_SKIP_MALFORMED", "false"),
            ("XO_GAME_STORE_TIMEOUT_MS", "2500"),
            ("XO_GAME_STORE", "memory"),
        ])
        .unwrap();
        assert_eq!(config.mongo_uri, "mongodb://db:27017");
        assert_eq!(config.mongo_db.as_deref(), Some("other"));
        assert_eq!(config.port, 9000);
        assert!(!config.skip_malformed);
        assert_eq!(config.store_timeout, Some(Duration::from_millis(2500)));
        assert_eq!(config.store, StoreKind::Memory);
    }

    #[test]
    fn port_takes_precedence_over_server_port() {
        let config = config_from(&[("PORT", "3000"), ("SERVER_PORT", "9000")]).unwrap();
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn zero_timeout_disables_the_limit() {
        let config = config_from(&[("XO_GAME_STORE_TIMEOUT_MS", "0")]).unwrap();
        assert_eq!(config.store_timeout, None);
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(matches!(
            config_from(&[("PORT", "http")]),
            Err(ConfigError::InvalidValue { var: "PORT", .. })
        ));
        assert!(matches!(
            config_from(&[("XO_GAME_SKIP_MALFORMED", "maybe")]),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            config_from(&[("XO_GAME_STORE", "redis")]),
            Err(ConfigError::InvalidValue {
                var: "XO_GAME_STORE",
                ..
            })
        ));
    }
}
