/*
 * Responsibility
 * - /api/private/games 系 handler
 * - 作成時の owner は認証済み Principal から取る (クライアント申告にしない)
 */
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};

use crate::{
    api::dto::games::{CreateGameRequest, GameResponse, ListGamesQuery},
    api::extractors::PrincipalExtractor,
    error::AppError,
    repos::game_repo,
    state::AppState,
};

const DEFAULT_MAX_PLAYERS: i32 = 4;
const DEFAULT_PAGE_SIZE: i64 = 20;
const MAX_PAGE_SIZE: i64 = 100;

fn to_response(row: game_repo::GameRow) -> GameResponse {
    GameResponse {
        id: row.game_id,
        name: row.name,
        owner_id: row.owner_id,
        max_players: row.max_players,
        created_at: row.created_at,
    }
}

pub async fn list_games(
    State(state): State<AppState>,
    Query(query): Query<ListGamesQuery>,
) -> Result<Json<Vec<GameResponse>>, AppError> {
    let limit = query.limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);
    let offset = query.offset.unwrap_or(0).max(0);

    let rows = game_repo::list(&state.db, limit, offset).await?;

    Ok(Json(rows.into_iter().map(to_response).collect()))
}

pub async fn create_game(
    State(state): State<AppState>,
    PrincipalExtractor(principal): PrincipalExtractor,
    Json(req): Json<CreateGameRequest>,
) -> Result<(StatusCode, Json<GameResponse>), AppError> {
    req.validate()
        .map_err(|msg| AppError::InvalidRequest(msg.to_string()))?;

    let max_players = req.max_players.unwrap_or(DEFAULT_MAX_PLAYERS);

    let row = game_repo::create(
        &state.db,
        req.name.trim(),
        principal.user_id,
        max_players,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(to_response(row))))
}

pub async fn get_game(
    State(state): State<AppState>,
    Path(game_id): Path<i64>,
) -> Result<Json<GameResponse>, AppError> {
    let row = game_repo::get(&state.db, game_id)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(to_response(row)))
}
