use axum::{
    extract::{Request, State},
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::headers::{Authorization, HeaderMapExt, authorization::Bearer};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::{application::http::server::app_state::AppState, args::GenerationAccess};

#[derive(Debug, Error, Deserialize, Serialize, PartialEq, Eq)]
pub enum AuthError {
    #[error("Token not found")]
    TokenNotFound,
    #[error("Invalid token")]
    InvalidToken,
    #[error("Access is not configured")]
    NotConfigured,
}

#[derive(Serialize, Deserialize)]
struct ErrorResponse {
    code: String,
    message: String,
    status: i64,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, code) = match self {
            AuthError::TokenNotFound | AuthError::InvalidToken => {
                (StatusCode::UNAUTHORIZED, "E_UNAUTHORIZED")
            }
            AuthError::NotConfigured => (StatusCode::FORBIDDEN, "E_FORBIDDEN"),
        };

        let error_response = ErrorResponse {
            code: code.to_string(),
            message: self.to_string(),
            status: status.as_u16() as i64,
        };

        (status, axum::Json(error_response)).into_response()
    }
}

fn verify_bearer(headers: &HeaderMap, expected: Option<&str>) -> Result<(), AuthError> {
    let expected = expected.ok_or(AuthError::NotConfigured)?;

    let Authorization(bearer) = headers
        .typed_get::<Authorization<Bearer>>()
        .ok_or(AuthError::TokenNotFound)?;

    if bearer.token() != expected {
        return Err(AuthError::InvalidToken);
    }

    Ok(())
}

/// Guards the settings surface with the admin token.
pub async fn require_admin(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    verify_bearer(req.headers(), state.args.access.admin_token.as_deref()).inspect_err(|e| {
        warn!(uri = %req.uri(), "Rejected settings request: {}", e);
    })?;

    Ok(next.run(req).await)
}

/// Applies the configured [`GenerationAccess`] to the generation endpoint.
pub async fn generation_access(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    if state.args.access.generation_access == GenerationAccess::Gated {
        verify_bearer(req.headers(), state.args.access.access_token.as_deref()).inspect_err(
            |e| {
                warn!("Rejected recipe generation request: {}", e);
            },
        )?;
    }

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use axum::http::{HeaderValue, header::AUTHORIZATION};

    use super::*;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_verify_bearer() {
        assert_eq!(verify_bearer(&headers_with("Bearer s3cret"), Some("s3cret")), Ok(()));
        assert_eq!(
            verify_bearer(&headers_with("Bearer wrong"), Some("s3cret")),
            Err(AuthError::InvalidToken)
        );
        assert_eq!(
            verify_bearer(&HeaderMap::new(), Some("s3cret")),
            Err(AuthError::TokenNotFound)
        );
        assert_eq!(
            verify_bearer(&headers_with("Bearer s3cret"), None),
            Err(AuthError::NotConfigured)
        );
    }
}
