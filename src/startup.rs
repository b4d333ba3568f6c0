//! Single fallible initialization sequence turning an [`AppConfig`] into ready-to-serve state.

use std::sync::Arc;

use axum::Router;
use thiserror::Error;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::{
    config::{AppConfig, StoreKind},
    dao::game_store::{
        GameStore,
        memory::MemoryGameStore,
        mongodb::{MongoConfig, MongoDaoError, MongoGameStore},
    },
    routes,
    state::{AppState, SharedState},
};

/// Failures that prevent the server from starting.
#[derive(Debug, Error)]
pub enum StartupError {
    /// The MongoDB backend could not be configured or reached.
    #[error("failed to initialize MongoDB game store")]
    Mongo(#[from] MongoDaoError),
}

/// Connect the configured storage backend and build the shared state around it.
pub async fn initialize(config: &AppConfig) -> Result<SharedState, StartupError> {
    let store: Arc<dyn GameStore> = match config.store {
        StoreKind::Mongo => {
            let mongo_config = MongoConfig::from_uri(&config.mongo_uri, config.mongo_db.as_deref())
                .await?
                .with_skip_malformed(config.skip_malformed);
            let database = mongo_config.database_name.clone();
            let store = MongoGameStore::connect(mongo_config).await?;
            info!(%database, "connected to MongoDB");
            Arc::new(store)
        }
        StoreKind::Memory => {
            warn!("using in-memory game store; games are lost on exit");
            Arc::new(MemoryGameStore::new())
        }
    };

    Ok(AppState::with_store_timeout(store, config.store_timeout))
}

/// Build the top-level router and attach cross-cutting middleware layers.
pub fn build_router(state: SharedState) -> Router<()> {
    routes::router(state).layer(TraceLayer::new_for_http())
}
