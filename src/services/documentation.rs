use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for the game API.
#[openapi(
    paths(
        crate::routes::game::list_games,
        crate::routes::game::create_game,
    ),
    components(schemas(crate::dto::game::GameDto)),
    tags((name = "game", description = "Game state persistence"))
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_both_game_operations() {
        let doc = ApiDoc::openapi();
        let item = doc
            .paths
            .paths
            .get("/api/games")
            .expect("games path documented");
        assert!(item.get.is_some());
        assert!(item.post.is_some());
    }
}
