//! The single point where authentication failures become client-visible.

use axum::response::{IntoResponse, Response};

use crate::api::extractors::AuthFailure;
use crate::error::AppError;

/// Uniform 401 rejection.
///
/// The failure category is logged for operators; the status and body are
/// identical for every category.
pub(super) fn unauthorized(reason: AuthFailure) -> Response {
    tracing::warn!(?reason, "rejecting unauthenticated request");
    AppError::Unauthorized.into_response()
}
