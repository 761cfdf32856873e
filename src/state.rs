/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - db: PgPool, auth: TokenVerifier, identity: IdentityResolver など
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 * - 全フィールドは起動時に構築し、以後 read-only
 */
use std::sync::Arc;

use sqlx::PgPool;

use crate::services::auth::{TokenVerifier, password::PasswordHasher, policy::RoutePolicy};
use crate::services::identity::IdentityResolver;

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub auth: Arc<TokenVerifier>,
    pub identity: Arc<dyn IdentityResolver>,
    pub routes: Arc<RoutePolicy>,
    pub passwords: Arc<PasswordHasher>,
}

impl AppState {
    pub fn new(
        db: PgPool,
        auth: Arc<TokenVerifier>,
        identity: Arc<dyn IdentityResolver>,
        routes: Arc<RoutePolicy>,
        passwords: Arc<PasswordHasher>,
    ) -> Self {
        Self {
            db,
            auth,
            identity,
            routes,
            passwords,
        }
    }
}
