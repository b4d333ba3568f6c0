use std::{sync::Arc, time::Duration};

use crate::dao::game_store::GameStore;

pub type SharedState = Arc<AppState>;

/// Central application state holding the storage handle shared by every request.
pub struct AppState {
    game_store: Arc<dyn GameStore>,
    store_timeout: Option<Duration>,
}

impl AppState {
    /// Construct a new [`AppState`] wrapped in an [`Arc`] so it can be cloned cheaply.
    pub fn new(game_store: Arc<dyn GameStore>) -> SharedState {
        Self::with_store_timeout(game_store, None)
    }

    /// Same as [`AppState::new`] but bounding every storage call to `store_timeout`.
    pub fn with_store_timeout(
        game_store: Arc<dyn GameStore>,
        store_timeout: Option<Duration>,
    ) -> SharedState {
        Arc::new(Self {
            game_store,
            store_timeout,
        })
    }

    /// Handle to the installed game store.
    pub fn game_store(&self) -> &Arc<dyn GameStore> {
        &self.game_store
    }

    /// Limit applied to individual storage operations, if any.
    pub fn store_timeout(&self) -> Option<Duration> {
        self.store_timeout
    }
}
