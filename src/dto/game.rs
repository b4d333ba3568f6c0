use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::dao::models::{GameEntity, GameId};

/// Game state as exchanged with HTTP clients.
///
/// Every field is optional on input and falls back to its zero value when absent
/// or `null`, so a partially filled body still produces a game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct GameDto {
    /// Store-assigned identifier; omitted when empty.
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub id: String,
    /// Board cells in order: `""` for a free cell, `"X"` or `"O"` otherwise.
    #[serde(deserialize_with = "null_as_default")]
    pub squares: Vec<String>,
    /// Whether `X` plays next.
    #[serde(rename = "isXNext", deserialize_with = "null_as_default")]
    pub is_x_next: bool,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl From<GameEntity> for GameDto {
    fn from(game: GameEntity) -> Self {
        Self {
            id: game.id.map(GameId::into_string).unwrap_or_default(),
            squares: game.squares,
            is_x_next: game.is_x_next,
        }
    }
}

impl From<GameDto> for GameEntity {
    fn from(dto: GameDto) -> Self {
        Self {
            // An empty id means "let the store pick one".
            id: GameId::new(dto.id).ok(),
            squares: dto.squares,
            is_x_next: dto.is_x_next,
        }
    }
}
