/*
 * Responsibility
 * - Games の request/response DTO
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const MIN_PLAYERS: i32 = 2;
pub const MAX_PLAYERS: i32 = 16;

#[derive(Debug, Deserialize)]
pub struct CreateGameRequest {
    pub name: String,
    // Defaults to 4 when omitted
    pub max_players: Option<i32>,
}

impl CreateGameRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("name is required");
        }
        if self.name.len() > 128 {
            return Err("name must be <= 128 chars");
        }
        if let Some(n) = self.max_players
            && !(MIN_PLAYERS..=MAX_PLAYERS).contains(&n)
        {
            return Err("max_players out of range");
        }

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct ListGamesQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct GameResponse {
    pub id: i64,
    pub name: String,
    pub owner_id: Uuid,
    pub max_players: i32,
    pub created_at: DateTime<Utc>,
}
