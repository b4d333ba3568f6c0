use std::fmt;

use mongodb::bson::{Bson, oid::ObjectId};
use thiserror::Error;

/// Identifier assigned to a game by the storage backend.
///
/// Backends hand out their own native identifiers; they are converted into this
/// string form at the storage boundary and never leave it in any other shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameId(String);

impl GameId {
    /// Wrap a textual identifier, rejecting the empty string.
    pub fn new(value: impl Into<String>) -> Result<Self, InvalidGameId> {
        let value = value.into();
        if value.is_empty() {
            return Err(InvalidGameId::Empty);
        }
        Ok(Self(value))
    }

    /// Borrow the textual form of the identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the identifier and return its textual form.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reasons a backend identifier cannot be represented as a [`GameId`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidGameId {
    /// The identifier was an empty string.
    #[error("game identifier is empty")]
    Empty,
    /// The identifier has a BSON type with no textual form.
    #[error("game identifier of BSON type {0:?} is not supported")]
    UnsupportedType(mongodb::bson::spec::ElementType),
}

impl From<ObjectId> for GameId {
    fn from(oid: ObjectId) -> Self {
        Self(oid.to_hex())
    }
}

impl TryFrom<Bson> for GameId {
    type Error = InvalidGameId;

    fn try_from(value: Bson) -> Result<Self, Self::Error> {
        match value {
            Bson::ObjectId(oid) => Ok(oid.into()),
            Bson::String(value) => Self::new(value),
            other => Err(InvalidGameId::UnsupportedType(other.element_type())),
        }
    }
}

/// Game state as seen by the storage layer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameEntity {
    /// Identifier, `None` until the backend assigned one.
    pub id: Option<GameId>,
    /// Board cells in order; `""` marks a free cell.
    pub squares: Vec<String>,
    /// Whether `X` plays next.
    pub is_x_next: bool,
}

#[cfg(test)]
mod tests {
    use mongodb::bson::spec::ElementType;

    use super::*;

    #[test]
    fn object_id_converts_to_hex() {
        let oid = ObjectId::new();
        let id = GameId::try_from(Bson::ObjectId(oid)).unwrap();
        assert_eq!(id.as_str(), oid.to_hex());
        assert_eq!(id.as_str().len(), 24);
    }

    #[test]
    fn string_id_is_kept_verbatim() {
        let id = GameId::try_from(Bson::String("game-1".into())).unwrap();
        assert_eq!(id.to_string(), "game-1");
    }

    #[test]
    fn empty_string_id_is_rejected() {
        assert_eq!(
            GameId::try_from(Bson::String(String::new())),
            Err(InvalidGameId::Empty)
        );
    }

    #[test]
    fn numeric_id_is_rejected() {
        assert_eq!(
            GameId::try_from(Bson::Int32(7)),
            Err(InvalidGameId::UnsupportedType(ElementType::Int32))
        );
    }
}
