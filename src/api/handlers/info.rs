/*
 * Responsibility
 * - GET /api/public/info (疎通用)
 * - 認証なしで到達できることの確認用でもある
 */
use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

pub async fn info() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({"service": "boardgame-api", "status": "ok"})),
    )
}
