/// OpenAPI documentation generation.
pub mod documentation;
/// Game persistence operations behind the HTTP routes.
pub mod game_service;
