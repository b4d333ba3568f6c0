use std::time::Duration;

use mongodb::error::Error as MongoError;
use thiserror::Error;

use super::models::DecodeError;
use crate::dao::models::InvalidGameId;

pub type MongoResult<T> = std::result::Result<T, MongoDaoError>;

#[derive(Debug, Error)]
pub enum MongoDaoError {
    #[error("failed to parse MongoDB connection URI `{uri}`")]
    InvalidUri {
        uri: String,
        #[source]
        source: MongoError,
    },
    #[error("failed to build MongoDB client from options")]
    ClientConstruction {
        #[source]
        source: MongoError,
    },
    #[error("MongoDB ping failed during initial connection after {attempts} attempt(s)")]
    InitialPing {
        attempts: u32,
        #[source]
        source: MongoError,
    },
    #[error("MongoDB did not answer within {0:?}")]
    ConnectTimeout(Duration),
    #[error("failed to list games")]
    ListGames {
        #[source]
        source: MongoError,
    },
    #[error("failed to decode game document")]
    DecodeGame {
        #[source]
        source: DecodeError,
    },
    #[error("failed to insert game")]
    InsertGame {
        #[source]
        source: MongoError,
    },
    #[error("inserted game received an unusable identifier")]
    InvalidId {
        #[source]
        source: InvalidGameId,
    },
}
