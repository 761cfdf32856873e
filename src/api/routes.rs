// Responsibility
// - /api 以下の URL 構造を定義
// - /public/** は RoutePolicy 側で認証免除になる前提のパス設計
//   (どのパスが public かは routes ではなく Config/RoutePolicy が決める)
use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use crate::api::handlers::{
    games::{create_game, get_game, list_games},
    info::info,
    users::{me, register},
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/public/info", get(info))
        .route("/public/users", post(register))
        .route("/private/me", get(me))
        .route("/private/games", get(list_games).post(create_game))
        .route("/private/games/{game_id}", get(get_game))
}
