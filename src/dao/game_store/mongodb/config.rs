use std::time::Duration;

use mongodb::options::ClientOptions;

use super::error::{MongoDaoError, MongoResult};

pub const DEFAULT_DATABASE_NAME: &str = "xo_game";
pub const GAME_COLLECTION_NAME: &str = "games";
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection settings for [`super::MongoGameStore`].
#[derive(Clone, Debug)]
pub struct MongoConfig {
    pub options: ClientOptions,
    pub database_name: String,
    /// Upper bound for reaching the server at startup.
    pub connect_timeout: Duration,
    /// Skip documents that do not decode instead of failing the whole listing.
    pub skip_malformed: bool,
}

impl MongoConfig {
    pub async fn from_uri(uri: &str, db_name: Option<&str>) -> MongoResult<Self> {
        let database_name = db_name.unwrap_or(DEFAULT_DATABASE_NAME).to_owned();
        let mut options =
            ClientOptions::parse(uri)
                .await
                .map_err(|source| MongoDaoError::InvalidUri {
                    uri: uri.to_owned(),
                    source,
                })?;
        options.connect_timeout = Some(CONNECT_TIMEOUT);
        options.server_selection_timeout = Some(CONNECT_TIMEOUT);

        Ok(Self {
            options,
            database_name,
            connect_timeout: CONNECT_TIMEOUT,
            skip_malformed: true,
        })
    }

    /// Choose whether malformed documents are skipped while listing.
    pub fn with_skip_malformed(mut self, skip_malformed: bool) -> Self {
        self.skip_malformed = skip_malformed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn parses_uri_and_applies_defaults() {
        let config = MongoConfig::from_uri("mongodb://localhost:27017", None)
            .await
            .unwrap();
        assert_eq!(config.database_name, "xo_game");
        assert_eq!(config.options.connect_timeout, Some(CONNECT_TIMEOUT));
        assert!(config.skip_malformed);
    }

    #[tokio::test]
    async fn rejects_malformed_uri() {
        let err = MongoConfig::from_uri("not-a-mongo-uri", Some("db"))
            .await
            .unwrap_err();
        assert!(matches!(err, MongoDaoError::InvalidUri { .. }));
    }
}
