use std::future::Future;

use tokio::time::timeout;
use tracing::{info, warn};

use crate::{
    dao::storage::StorageResult,
    dto::game::GameDto,
    error::ServiceError,
    state::SharedState,
};

/// Return every stored game.
pub async fn list_games(state: &SharedState) -> Result<Vec<GameDto>, ServiceError> {
    let games = run_store_call(state, state.game_store().list_games())
        .await
        .inspect_err(|err| warn!(error = %err, "failed to list games"))?;

    Ok(games.into_iter().map(Into::into).collect())
}

/// Persist a new game and return it with its assigned identifier.
pub async fn create_game(state: &SharedState, request: GameDto) -> Result<GameDto, ServiceError> {
    let created = run_store_call(state, state.game_store().create_game(request.into()))
        .await
        .inspect_err(|err| warn!(error = %err, "failed to create game"))?;

    let game: GameDto = created.into();
    info!(id = %game.id, "game created");
    Ok(game)
}

/// Await a storage call, bounded by the configured store timeout when there is one.
async fn run_store_call<T>(
    state: &SharedState,
    call: impl Future<Output = StorageResult<T>>,
) -> Result<T, ServiceError> {
    match state.store_timeout() {
        Some(limit) => timeout(limit, call)
            .await
            .map_err(|_| ServiceError::Timeout(limit))?
            .map_err(Into::into),
        None => call.await.map_err(Into::into),
    }
}
