//! Identity resolution: subject identifier → `Principal`.
//!
//! The gate depends only on the `IdentityResolver` trait; the concrete
//! implementation (a Postgres lookup) is injected at startup. Tests inject
//! an in-memory one.

use async_trait::async_trait;
use sqlx::PgPool;
use thiserror::Error;
use uuid::Uuid;

use crate::repos::{error::RepoError, user_repo};

/// Resolved identity plus capability set for the current request.
///
/// Owned by the request that authenticated it; dropped when the request
/// completes.
#[derive(Debug, Clone)]
pub struct Principal {
    pub user_id: Uuid,
    pub subject: String,
    pub capabilities: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("unknown subject")]
    NotFound,
    #[error("identity store unavailable")]
    Store(#[from] RepoError),
}

#[async_trait]
pub trait IdentityResolver: Send + Sync {
    async fn resolve(&self, subject: &str) -> Result<Principal, ResolveError>;
}

/// Postgres-backed resolver over the users table.
pub struct PgIdentityResolver {
    db: PgPool,
}

impl PgIdentityResolver {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl IdentityResolver for PgIdentityResolver {
    async fn resolve(&self, subject: &str) -> Result<Principal, ResolveError> {
        let row = user_repo::find_by_username(&self.db, subject)
            .await?
            .ok_or(ResolveError::NotFound)?;

        Ok(Principal {
            user_id: row.user_id,
            subject: row.username,
            capabilities: row.capabilities,
        })
    }
}
