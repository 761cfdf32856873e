use axum::extract::FromRequestParts;
use axum::http::{StatusCode, request::Parts};

use crate::services::identity::Principal;
use crate::state::AppState;

use super::AuthCtx;

/// Handler で、認証済み Principal を受け取るための extractor
/// gate middleware が AuthCtx を request.extensions() に insert 済みである前提
/// anonymous / 未設定の場合は 401 を返す（access 側が先に弾くので実質 backstop）
pub struct PrincipalExtractor(pub Principal);

impl FromRequestParts<AppState> for PrincipalExtractor
where
    AppState: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthCtx>()
            .and_then(|ctx| ctx.principal().cloned())
            .map(PrincipalExtractor)
            .ok_or(StatusCode::UNAUTHORIZED)
    }
}
