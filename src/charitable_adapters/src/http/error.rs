use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use charitable_core::{AuthError, AuthErrorCode, CodedError, VolunteerShiftError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// JSON body of every error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: Option<String>,
}

impl ErrorResponse {
    pub fn from_coded<E>(error: &E) -> Self
    where
        E: CodedError + ?Sized,
    {
        Self {
            error: error.error_message().to_string(),
            code: error.error_code().map(str::to_string),
        }
    }
}

impl CodedError for ErrorResponse {
    fn error_code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    fn error_message(&self) -> &str {
        &self.error
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    InvalidShift(#[from] VolunteerShiftError),
}

pub fn status_for(code: AuthErrorCode) -> StatusCode {
    match code {
        AuthErrorCode::InvalidCredentials => StatusCode::UNAUTHORIZED,
        AuthErrorCode::EmailTaken => StatusCode::CONFLICT,
        AuthErrorCode::WeakPassword | AuthErrorCode::InvalidEmail => StatusCode::BAD_REQUEST,
        AuthErrorCode::NetworkError => StatusCode::SERVICE_UNAVAILABLE,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status_code, body) = match &self {
            ApiError::Auth(error) => (status_for(error.code()), ErrorResponse::from_coded(error)),
            ApiError::InvalidShift(error) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorResponse {
                    error: error.to_string(),
                    code: None,
                },
            ),
        };

        (status_code, Json(body)).into_response()
    }
}
