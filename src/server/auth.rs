use super::{
    handlers::AppState,
    types::{ApiError, api_error},
};
use crate::{Error, Result};
use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use subtle::ConstantTimeEq;
use tracing::warn;

/// Accepts only `Bearer <token>`, compared over the whole header value.
pub fn check_bearer(authorization: Option<&str>, token: &str) -> Result<()> {
    let Some(value) = authorization else {
        return Err(Error::Unauthenticated);
    };

    let expected = format!("Bearer {token}");
    if bool::from(value.as_bytes().ct_eq(expected.as_bytes())) {
        Ok(())
    } else {
        Err(Error::Forbidden)
    }
}

pub async fn require_bearer_token(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> std::result::Result<Response, ApiError> {
    let outcome = match request.headers().get(header::AUTHORIZATION) {
        None => check_bearer(None, &state.auth.static_token),
        // Non-ASCII header bytes can never equal the token.
        Some(value) => match value.to_str() {
            Ok(value) => check_bearer(Some(value), &state.auth.static_token),
            Err(_) => Err(Error::Forbidden),
        },
    };

    if let Err(e) = outcome {
        warn!(path = %request.uri().path(), "Rejected request: {}", e);
        return Err(api_error(&e));
    }

    Ok(next.run(request).await)
}
