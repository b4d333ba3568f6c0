use std::sync::Arc;

use futures::future::BoxFuture;
use mongodb::bson::oid::ObjectId;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::dao::{
    game_store::GameStore,
    models::{GameEntity, GameId},
    storage::{StorageError, StorageResult},
};

/// Write refused by [`MemoryGameStore`].
#[derive(Debug, Error)]
#[error("game `{0}` already exists")]
pub struct DuplicateGameId(pub GameId);

/// [`GameStore`] keeping games in process memory, in insertion order.
///
/// Identifiers are freshly generated object ids rendered as hex, matching what the
/// MongoDB backend hands out for documents inserted without an `_id`. A caller-chosen
/// id that is already taken is refused, like a duplicate `_id` insert.
#[derive(Clone, Default)]
pub struct MemoryGameStore {
    games: Arc<RwLock<Vec<GameEntity>>>,
}

impl MemoryGameStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl GameStore for MemoryGameStore {
    fn list_games(&self) -> BoxFuture<'static, StorageResult<Vec<GameEntity>>> {
        let games = self.games.clone();
        Box::pin(async move { Ok(games.read().await.clone()) })
    }

    fn create_game(&self, mut game: GameEntity) -> BoxFuture<'static, StorageResult<GameEntity>> {
        let games = self.games.clone();
        Box::pin(async move {
            let mut games = games.write().await;
            let id = match game.id.take() {
                Some(id) if games.iter().any(|stored| stored.id.as_ref() == Some(&id)) => {
                    return Err(StorageError::rejected(DuplicateGameId(id)));
                }
                Some(id) => id,
                None => generate_id(),
            };
            game.id = Some(id);
            games.push(game.clone());
            Ok(game)
        })
    }
}

fn generate_id() -> GameId {
    ObjectId::new().into()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn game(is_x_next: bool) -> GameEntity {
        GameEntity {
            id: None,
            squares: vec!["X".into(), String::new(), "O".into()],
            is_x_next,
        }
    }

    fn with_id(id: &str) -> GameEntity {
        GameEntity {
            id: Some(GameId::new(id).unwrap()),
            ..game(false)
        }
    }

    #[tokio::test]
    async fn starts_empty() {
        let store = MemoryGameStore::new();
        assert!(store.list_games().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_assigns_distinct_ids() {
        let store = MemoryGameStore::new();
        let mut ids = HashSet::new();
        for _ in 0..10 {
            let created = store.create_game(game(true)).await.unwrap();
            assert!(ids.insert(created.id.unwrap()));
        }
        assert_eq!(store.list_games().await.unwrap().len(), 10);
    }

    #[tokio::test]
    async fn listed_games_match_created_ones() {
        let store = MemoryGameStore::new();
        let first = store.create_game(game(true)).await.unwrap();
        let second = store.create_game(game(false)).await.unwrap();

        let listed = store.list_games().await.unwrap();
        assert_eq!(listed, vec![first, second]);
    }

    #[tokio::test]
    async fn provided_id_is_kept() {
        let store = MemoryGameStore::new();
        let created = store.create_game(with_id("chosen")).await.unwrap();
        assert_eq!(created.id.unwrap().as_str(), "chosen");
    }

    #[tokio::test]
    async fn duplicate_id_is_rejected_and_not_stored() {
        let store = MemoryGameStore::new();
        store.create_game(with_id("dup")).await.unwrap();

        let err = store.create_game(with_id("dup")).await.unwrap_err();
        assert!(matches!(err, StorageError::Rejected { .. }));
        assert_eq!(err.to_string(), "game `dup` already exists");
        assert_eq!(store.list_games().await.unwrap().len(), 1);
    }
}
