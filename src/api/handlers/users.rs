/*
 * Responsibility
 * - POST /api/public/users (登録) と GET /api/private/me
 * - Json を extractor で受け、DTO validation → service/repo 呼び出し
 * - パスワードは bcrypt でハッシュ化してから保存（平文はログにも残さない）
 */
use axum::{Json, extract::State, http::StatusCode};

use crate::{
    api::dto::users::{RegisterRequest, UserResponse},
    api::extractors::PrincipalExtractor,
    error::AppError,
    repos::user_repo,
    state::AppState,
};

// Capabilities granted to a newly registered player.
const DEFAULT_CAPABILITIES: [&str; 2] = ["games:read", "games:write"];

pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    req.validate()
        .map_err(|msg| AppError::InvalidRequest(msg.to_string()))?;

    let password_hash = state.passwords.hash(&req.password).map_err(|err| {
        tracing::error!(error = %err, "password hashing failed");
        AppError::Internal
    })?;

    let capabilities: Vec<String> = DEFAULT_CAPABILITIES
        .iter()
        .map(|c| c.to_string())
        .collect();

    let row = user_repo::insert(
        &state.db,
        req.username.trim(),
        &password_hash,
        &capabilities,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(UserResponse {
            id: row.user_id,
            username: row.username,
            capabilities: row.capabilities,
        }),
    ))
}

pub async fn me(
    PrincipalExtractor(principal): PrincipalExtractor,
) -> Json<UserResponse> {
    Json(UserResponse {
        id: principal.user_id,
        username: principal.subject,
        capabilities: principal.capabilities,
    })
}
