/*
 * Responsibility
 * - Users の request/response DTO
 * - validation (形式チェック) 用の validate() を持たせる
 */
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        let username = self.username.trim();
        if username.is_empty() {
            return Err("username is required");
        }
        if username.len() > 64 {
            return Err("username must be <= 64 chars");
        }
        if self.password.len() < 8 {
            return Err("password must be >= 8 chars");
        }
        if self.password.len() > 128 {
            return Err("password must be <= 128 chars");
        }

        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub capabilities: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(username: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn accepts_reasonable_input() {
        assert!(request("alice", "longenough").validate().is_ok());
    }

    #[test]
    fn rejects_blank_username_and_short_password() {
        assert!(request("   ", "longenough").validate().is_err());
        assert!(request("alice", "short").validate().is_err());
    }
}
