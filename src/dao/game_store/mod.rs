/// In-process backend sharing the MongoDB contract.
pub mod memory;
/// MongoDB backend.
pub mod mongodb;

use crate::dao::models::GameEntity;
use crate::dao::storage::StorageResult;
use futures::future::BoxFuture;

/// Abstraction over the persistence layer for game states.
pub trait GameStore: Send + Sync {
    /// Return every stored game in backend iteration order.
    fn list_games(&self) -> BoxFuture<'static, StorageResult<Vec<GameEntity>>>;
    /// Persist a new game and return it with its assigned identifier.
    fn create_game(&self, game: GameEntity) -> BoxFuture<'static, StorageResult<GameEntity>>;
}
