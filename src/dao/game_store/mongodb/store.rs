use std::sync::Arc;

use futures::{TryStream, TryStreamExt, future::BoxFuture};
use mongodb::{Client, Collection, bson::Document};
use tracing::{debug, warn};

use super::{
    config::{GAME_COLLECTION_NAME, MongoConfig},
    connection::establish_connection,
    error::{MongoDaoError, MongoResult},
    models::{all_games, decode_game, game_document},
};
use crate::dao::{
    game_store::GameStore,
    models::{GameEntity, GameId},
    storage::StorageResult,
};

/// MongoDB-backed [`GameStore`] implementation.
#[derive(Clone)]
pub struct MongoGameStore {
    inner: Arc<MongoInner>,
}

struct MongoInner {
    // Held so the connection pool lives as long as the store.
    _client: Client,
    collection: Collection<Document>,
    skip_malformed: bool,
}

impl MongoGameStore {
    /// Establish a connection to MongoDB and bind the games collection.
    pub async fn connect(config: MongoConfig) -> MongoResult<Self> {
        let (client, database) = establish_connection(
            &config.options,
            &config.database_name,
            config.connect_timeout,
        )
        .await?;
        let collection = database.collection::<Document>(GAME_COLLECTION_NAME);

        let inner = Arc::new(MongoInner {
            _client: client,
            collection,
            skip_malformed: config.skip_malformed,
        });

        Ok(Self { inner })
    }

    async fn list_games(&self) -> MongoResult<Vec<GameEntity>> {
        let cursor = self
            .inner
            .collection
            .find(all_games())
            .await
            .map_err(|source| MongoDaoError::ListGames { source })?;

        let games = collect_games(cursor, self.inner.skip_malformed).await?;
        debug!(count = games.len(), "listed games");
        Ok(games)
    }

    async fn create_game(&self, mut game: GameEntity) -> MongoResult<GameEntity> {
        let document = game_document(&game);
        let result = self
            .inner
            .collection
            .insert_one(document)
            .await
            .map_err(|source| MongoDaoError::InsertGame { source })?;

        let id = GameId::try_from(result.inserted_id)
            .map_err(|source| MongoDaoError::InvalidId { source })?;
        debug!(%id, "inserted game");
        game.id = Some(id);
        Ok(game)
    }
}

/// Drain a stream of raw documents into games.
///
/// Documents that do not decode are skipped with a warning when `skip_malformed` is set;
/// otherwise the first one ends the listing with [`MongoDaoError::DecodeGame`].
async fn collect_games<S>(mut documents: S, skip_malformed: bool) -> MongoResult<Vec<GameEntity>>
where
    S: TryStream<Ok = Document, Error = mongodb::error::Error> + Unpin,
{
    let mut games = Vec::new();
    while let Some(document) = documents
        .try_next()
        .await
        .map_err(|source| MongoDaoError::ListGames { source })?
    {
        match decode_game(document) {
            Ok(game) => games.push(game),
            Err(err) if skip_malformed => {
                warn!(error = %err, "skipping malformed game document");
            }
            Err(source) => return Err(MongoDaoError::DecodeGame { source }),
        }
    }
    Ok(games)
}

impl GameStore for MongoGameStore {
    fn list_games(&self) -> BoxFuture<'static, StorageResult<Vec<GameEntity>>> {
        let store = self.clone();
        Box::pin(async move { store.list_games().await.map_err(Into::into) })
    }

    fn create_game(&self, game: GameEntity) -> BoxFuture<'static, StorageResult<GameEntity>> {
        let store = self.clone();
        Box::pin(async move { store.create_game(game).await.map_err(Into::into) })
    }
}
