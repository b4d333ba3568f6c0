mod config;
mod connection;
mod error;
mod models;
pub mod store;

pub use config::{CONNECT_TIMEOUT, DEFAULT_DATABASE_NAME, MongoConfig};
pub use error::MongoDaoError;
pub use models::DecodeError;
pub use store::MongoGameStore;

use crate::dao::storage::StorageError;

impl From<MongoDaoError> for StorageError {
    fn from(err: MongoDaoError) -> Self {
        match err {
            MongoDaoError::DecodeGame { .. } | MongoDaoError::InvalidId { .. } => {
                StorageError::corrupted(err)
            }
            _ => StorageError::unavailable(err),
        }
    }
}
