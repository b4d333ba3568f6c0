use mongodb::bson::{Bson, Document, doc, spec::ElementType};
use thiserror::Error;

use crate::dao::models::{GameEntity, GameId, InvalidGameId};

const ID_FIELD: &str = "_id";
const SQUARES_FIELD: &str = "squares";
const IS_X_NEXT_FIELD: &str = "isXNext";

/// Reasons a stored document cannot be turned into a [`GameEntity`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("document has no `_id`")]
    MissingId,
    #[error("invalid `_id`")]
    InvalidId(#[source] InvalidGameId),
    #[error("field `{field}` has BSON type {actual:?}, expected {expected:?}")]
    WrongType {
        field: &'static str,
        expected: ElementType,
        actual: ElementType,
    },
    #[error("`squares[{index}]` has BSON type {actual:?}, expected a string")]
    WrongSquareType { index: usize, actual: ElementType },
}

/// Build the document inserted for `game`. `_id` is only written when the game already has one.
pub fn game_document(game: &GameEntity) -> Document {
    let mut document = Document::new();
    if let Some(id) = &game.id {
        document.insert(ID_FIELD, id.as_str());
    }
    document.insert(SQUARES_FIELD, game.squares.clone());
    document.insert(IS_X_NEXT_FIELD, game.is_x_next);
    document
}

/// Decode a stored document. Missing `squares`/`isXNext` fall back to their zero values.
pub fn decode_game(mut document: Document) -> Result<GameEntity, DecodeError> {
    let id = document.remove(ID_FIELD).ok_or(DecodeError::MissingId)?;
    let id = GameId::try_from(id).map_err(DecodeError::InvalidId)?;

    let squares = match document.remove(SQUARES_FIELD) {
        None | Some(Bson::Null) => Vec::new(),
        Some(Bson::Array(values)) => values
            .into_iter()
            .enumerate()
            .map(|(index, value)| match value {
                Bson::String(square) => Ok(square),
                other => Err(DecodeError::WrongSquareType {
                    index,
                    actual: other.element_type(),
                }),
            })
            .collect::<Result<Vec<_>, _>>()?,
        Some(other) => {
            return Err(DecodeError::WrongType {
                field: SQUARES_FIELD,
                expected: ElementType::Array,
                actual: other.element_type(),
            });
        }
    };

    let is_x_next = match document.remove(IS_X_NEXT_FIELD) {
        None | Some(Bson::Null) => false,
        Some(Bson::Boolean(value)) => value,
        Some(other) => {
            return Err(DecodeError::WrongType {
                field: IS_X_NEXT_FIELD,
                expected: ElementType::Boolean,
                actual: other.element_type(),
            });
        }
    };

    Ok(GameEntity {
        id: Some(id),
        squares,
        is_x_next,
    })
}

/// Empty filter matching every game.
pub fn all_games() -> Document {
    doc! {}
}

#[cfg(test)]
mod tests {
    use mongodb::bson::oid::ObjectId;

    use super::*;

    fn board() -> Vec<String> {
        let mut squares = vec![String::new(); 9];
        squares[4] = "X".into();
        squares
    }

    #[test]
    fn new_game_document_omits_id() {
        let game = GameEntity {
            id: None,
            squares: board(),
            is_x_next: false,
        };
        let document = game_document(&game);

        assert!(!document.contains_key("_id"));
        assert_eq!(document.get_bool("isXNext").ok(), Some(false));
        assert_eq!(document.get_array("squares").map(Vec::len).ok(), Some(9));
    }

    #[test]
    fn existing_id_is_written_as_string() {
        let game = GameEntity {
            id: Some(GameId::new("custom").unwrap()),
            ..GameEntity::default()
        };
        let document = game_document(&game);
        assert_eq!(document.get_str("_id").ok(), Some("custom"));
    }

    #[test]
    fn decodes_object_id_document() {
        let oid = ObjectId::new();
        let document = doc! {
            "_id": oid,
            "squares": ["X", "", "O"],
            "isXNext": true,
        };

        let game = decode_game(document).unwrap();
        assert_eq!(game.id.unwrap().as_str(), oid.to_hex());
        assert_eq!(game.squares, vec!["X", "", "O"]);
        assert!(game.is_x_next);
    }

    #[test]
    fn missing_fields_take_zero_values() {
        let game = decode_game(doc! { "_id": "g1" }).unwrap();
        assert!(game.squares.is_empty());
        assert!(!game.is_x_next);
    }

    #[test]
    fn missing_id_is_an_error() {
        let err = decode_game(doc! { "squares": [], "isXNext": true }).unwrap_err();
        assert_eq!(err, DecodeError::MissingId);
    }

    #[test]
    fn non_string_square_is_an_error() {
        let err = decode_game(doc! { "_id": "g1", "squares": ["X", 3] }).unwrap_err();
        assert_eq!(
            err,
            DecodeError::WrongSquareType {
                index: 1,
                actual: ElementType::Int32,
            }
        );
    }

    #[test]
    fn wrongly_typed_flag_is_an_error() {
        let err = decode_game(doc! { "_id": "g1", "isXNext": "yes" }).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::WrongType {
                field: "isXNext",
                ..
            }
        ));
    }
}
