use axum::{
    Form, Json,
    extract::{FromRequest, Request, rejection::FormRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use grocerykit_core::domain::common::entities::app_errors::CoreError;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    ValidationError(String),

    #[error("{0}")]
    InternalServerError(String),
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorResponse {
    pub code: String,
    pub message: String,
    pub status: i64,
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "E_BAD_REQUEST"),
            ApiError::ValidationError(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "E_VALIDATION")
            }
            ApiError::InternalServerError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "E_INTERNAL_SERVER_ERROR")
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let body = ApiErrorResponse {
            code: code.to_string(),
            message: self.to_string(),
            status: status.as_u16() as i64,
        };

        (status, Json(body)).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        tracing::error!("Unhandled core error: {}", error);
        ApiError::InternalServerError("Internal server error".to_string())
    }
}

/// Urlencoded form body, rejected unless it passes its `validator` rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateForm<T>(pub T);

impl<T, S> FromRequest<S> for ValidateForm<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    Form<T>: FromRequest<S, Rejection = FormRejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(value) = Form::<T>::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;

        value
            .validate()
            .map_err(|e| ApiError::ValidationError(e.to_string()))?;

        Ok(ValidateForm(value))
    }
}
