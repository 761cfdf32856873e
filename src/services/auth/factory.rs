/// Factory: build the `TokenVerifier` from application `Config`.
///
/// A bad key or bad issuer/audience wiring is a startup error, never a
/// runtime fallback.
use std::sync::Arc;

use crate::config::{Config, ConfigError};
use crate::services::auth::TokenVerifier;

pub fn build_token_verifier(config: &Config) -> Result<Arc<TokenVerifier>, ConfigError> {
    let verifier = TokenVerifier::new(
        &config.access_jwt_public_key_pem,
        &config.auth_issuer,
        &config.auth_audience,
        config.access_token_leeway_seconds,
    )
    .map_err(|reason| {
        tracing::error!(%reason, "failed to build token verifier");
        ConfigError::Invalid("ACCESS_JWT_PUBLIC_KEY_PEM")
    })?;

    Ok(Arc::new(verifier))
}
