/// Game payloads for the `/api/games` routes.
pub mod game;
