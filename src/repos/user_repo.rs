/*
 * Responsibility
 * - users テーブル向け SQLx 操作
 * - PgPool を受け取り lookup / insert を提供
 * - DB エラーは RepoError に変換して返す (unique violation → Conflict)
 */
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::repos::error::RepoError;

// password_hash is write-only from this service's point of view: it is set
// at registration and consumed by the external credential issuer at login,
// never read back here.
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub user_id: Uuid,
    pub username: String,
    pub capabilities: Vec<String>,
    pub created_at: DateTime<Utc>,
}

pub async fn find_by_username(db: &PgPool, username: &str) -> Result<Option<UserRow>, RepoError> {
    let row = sqlx::query_as::<_, UserRow>(
        r#"
        SELECT user_id, username, capabilities, created_at
        FROM users
        WHERE username = $1
        "#,
    )
    .bind(username)
    .fetch_optional(db)
    .await?;

    Ok(row)
}

pub async fn insert(
    db: &PgPool,
    username: &str,
    password_hash: &str,
    capabilities: &[String],
) -> Result<UserRow, RepoError> {
    let row = sqlx::query_as::<_, UserRow>(
        r#"
        INSERT INTO users (username, password_hash, capabilities)
        VALUES ($1, $2, $3)
        RETURNING user_id, username, capabilities, created_at
        "#,
    )
    .bind(username)
    .bind(password_hash)
    .bind(capabilities)
    .fetch_one(db)
    .await?;

    Ok(row)
}
