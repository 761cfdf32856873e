//! Authentication gate: bearer credential verification.
//!
//! Runs once per request, before the access decision stage. A missing or
//! failing credential does not reject here: the request continues as
//! anonymous and the access stage decides whether that matters. Deferring
//! keeps public paths reachable with a bad credential, and makes every
//! protected rejection look the same to the caller no matter which
//! verification step failed.

use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, Request, header},
    middleware::Next,
    response::Response,
};

use crate::api::extractors::{AuthCtx, AuthFailure};
use crate::services::auth::token::VerifyError;
use crate::services::identity::ResolveError;
use crate::state::AppState;

pub(super) async fn gate_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    // Contract: one context write per request. A second gate in the chain is
    // a wiring bug.
    debug_assert!(
        req.extensions().get::<AuthCtx>().is_none(),
        "authentication gate ran twice on one request"
    );

    let ctx = authenticate(&state, req.headers()).await;
    req.extensions_mut().insert(ctx);

    next.run(req).await
}

/// Header extraction → verification → identity resolution. Every failure
/// collapses into an anonymous context; the reason is kept for logs only.
async fn authenticate(state: &AppState, headers: &HeaderMap) -> AuthCtx {
    let header_value = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    let Some(raw) = header_value else {
        return AuthCtx::anonymous(AuthFailure::MissingCredential);
    };

    let Some(token) = raw.strip_prefix("Bearer ") else {
        tracing::warn!("authorization header is not a bearer credential");
        return AuthCtx::anonymous(AuthFailure::Malformed);
    };

    let subject = match state.auth.verify_subject(token) {
        Ok(subject) => subject,
        Err(err) => {
            tracing::warn!(error = %err, "credential verification failed");
            return AuthCtx::anonymous(downgrade(&err));
        }
    };

    match state.identity.resolve(&subject).await {
        Ok(principal) => AuthCtx::Authenticated(principal),
        Err(ResolveError::NotFound) => {
            tracing::warn!(subject = %subject, "no identity for verified subject");
            AuthCtx::anonymous(AuthFailure::IdentityNotFound)
        }
        Err(err @ ResolveError::Store(_)) => {
            tracing::error!(error = %err, "identity lookup failed");
            AuthCtx::anonymous(AuthFailure::ResolverUnavailable)
        }
    }
}

fn downgrade(err: &VerifyError) -> AuthFailure {
    match err {
        VerifyError::Expired => AuthFailure::Expired,
        VerifyError::NotYetValid => AuthFailure::NotYetValid,
        VerifyError::InvalidSignature => AuthFailure::InvalidSignature,
        VerifyError::Malformed | VerifyError::EmptyClaim(_) => AuthFailure::Malformed,
    }
}
