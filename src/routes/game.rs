use axum::{
    Json, Router,
    body::Bytes,
    extract::{FromRequest, Request, State},
    routing::get,
};

use crate::{dto::game::GameDto, error::AppError, services::game_service, state::SharedState};

/// Routes storing and listing game states.
pub fn router() -> Router<SharedState> {
    Router::new().route("/api/games", get(list_games).post(create_game))
}

/// List every stored game.
#[utoipa::path(
    get,
    path = "/api/games",
    tag = "game",
    responses(
        (status = 200, description = "Stored games", body = Vec<GameDto>),
        (status = 500, description = "Storage failure", body = String, content_type = "text/plain")
    )
)]
pub async fn list_games(State(state): State<SharedState>) -> Result<Json<Vec<GameDto>>, AppError> {
    let games = game_service::list_games(&state).await?;
    Ok(Json(games))
}

/// Store a new game; the response carries the identifier assigned by the store.
#[utoipa::path(
    post,
    path = "/api/games",
    tag = "game",
    request_body = GameDto,
    responses(
        (status = 200, description = "Game created", body = GameDto),
        (status = 400, description = "Body is not a game", body = String, content_type = "text/plain"),
        (status = 500, description = "Storage failure", body = String, content_type = "text/plain")
    )
)]
pub async fn create_game(
    State(state): State<SharedState>,
    GameBody(payload): GameBody,
) -> Result<Json<GameDto>, AppError> {
    let game = game_service::create_game(&state, payload).await?;
    Ok(Json(game))
}

/// Lenient JSON body extractor for [`GameDto`].
///
/// Unlike [`Json`] it does not require a `Content-Type` header and treats an empty
/// body as the zero game. Bodies that are not valid JSON for a game are rejected.
pub struct GameBody(pub GameDto);

impl<S> FromRequest<S> for GameBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(GameDto::default()));
        }

        serde_json::from_slice(&bytes)
            .map(Self)
            .map_err(|err| AppError::BadRequest(err.to_string()))
    }
}
