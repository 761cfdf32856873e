//! Access decision: public paths pass, everything else needs a principal.
//!
//! Purely a function of (path, security context); decided exactly once per
//! request, no retries.

use axum::{body::Body, extract::State, http::Request, middleware::Next, response::Response};

use crate::api::extractors::{AuthCtx, AuthFailure};
use crate::services::auth::policy::Access;
use crate::state::AppState;

use super::entry_point;

pub(super) async fn access_middleware(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    if state.routes.classify(req.uri().path()) == Access::Public {
        // Public path: the security context is not consulted at all.
        return next.run(req).await;
    }

    let verdict = match req.extensions().get::<AuthCtx>() {
        Some(AuthCtx::Authenticated(_)) => Ok(()),
        Some(AuthCtx::Anonymous { reason }) => Err(*reason),
        // Gate not applied: fail closed.
        None => Err(AuthFailure::MissingCredential),
    };

    match verdict {
        Ok(()) => next.run(req).await,
        Err(reason) => entry_point::unauthorized(reason),
    }
}
