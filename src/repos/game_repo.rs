/*
 * Responsibility
 * - games テーブル向け SQLx 操作
 * - owner_id は users への FK 前提
 */
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::repos::error::RepoError;

#[derive(Debug, Clone, FromRow)]
pub struct GameRow {
    pub game_id: i64,
    pub name: String,
    pub owner_id: Uuid,
    pub max_players: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub async fn list(db: &PgPool, limit: i64, offset: i64) -> Result<Vec<GameRow>, RepoError> {
    let rows = sqlx::query_as::<_, GameRow>(
        r#"
        SELECT game_id, name, owner_id, max_players, created_at, updated_at
        FROM games
        ORDER BY game_id DESC
        LIMIT $1 OFFSET $2
        "#,
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(db)
    .await?;

    Ok(rows)
}

pub async fn create(
    db: &PgPool,
    name: &str,
    owner_id: Uuid,
    max_players: i32,
) -> Result<GameRow, RepoError> {
    let row = sqlx::query_as::<_, GameRow>(
        r#"
        INSERT INTO games (name, owner_id, max_players)
        VALUES ($1, $2, $3)
        RETURNING game_id, name, owner_id, max_players, created_at, updated_at
        "#,
    )
    .bind(name)
    .bind(owner_id)
    .bind(max_players)
    .fetch_one(db)
    .await?;

    Ok(row)
}

pub async fn get(db: &PgPool, game_id: i64) -> Result<Option<GameRow>, RepoError> {
    let row = sqlx::query_as::<_, GameRow>(
        r#"
        SELECT game_id, name, owner_id, max_players, created_at, updated_at
        FROM games
        WHERE game_id = $1
        "#,
    )
    .bind(game_id)
    .fetch_optional(db)
    .await?;

    Ok(row)
}
