use axum::Router;

use crate::state::SharedState;

pub mod game;

/// Compose all route trees and wire in the shared state.
pub fn router(state: SharedState) -> Router<()> {
    game::router().with_state(state)
}
