//! Request authentication pipeline.
//!
//! Two stages, applied as one unit so their relative order is a startup-time
//! invariant rather than a registration side effect:
//!
//! 1. `gate`: verifies the bearer credential and writes the security
//!    context (principal or anonymous) into request extensions
//! 2. `access`: classifies the path via the route policy and rejects
//!    anonymous requests to protected paths
//!
//! `apply` layers `access` first and `gate` last; with axum the last layer
//! is the outermost, so the gate always runs before the access decision.

mod access;
mod entry_point;
mod gate;

use axum::{Router, middleware};

use crate::state::AppState;

/// Attach the authentication pipeline to the given router.
///
/// ```ignore
/// let app = Router::new().nest("/api", api::routes());
/// let app = middleware::auth::apply(app, state.clone());
/// ```
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    // axum 0.8 の from_fn は State extractor を受け取れないため、`from_fn_with_state` で明示的に state を渡す
    router
        .layer(middleware::from_fn_with_state(
            state.clone(),
            access::access_middleware,
        ))
        .layer(middleware::from_fn_with_state(state, gate::gate_middleware))
}

#[cfg(test)]
mod tests;
