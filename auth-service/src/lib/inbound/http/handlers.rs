use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::domain::user::models::PublicUser;
use crate::user::errors::AuthError;

pub mod login;
pub mod me;
pub mod register;

/// Transport-level error taxonomy.
///
/// Every [`AuthError`] maps onto exactly one of these before a response is
/// built; unexpected failures are logged in full and leave only a generic
/// message in the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    UnprocessableEntity(String),
    Conflict(String),
    Unauthorized,
    InternalServerError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            ApiError::UnprocessableEntity(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "Validation failed".to_string(),
                msg,
            ),
            ApiError::Conflict(msg) => (
                StatusCode::CONFLICT,
                "Email already registered".to_string(),
                msg,
            ),
            // Identical body for every unauthorized cause; no hint whether
            // the email exists
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "Invalid credentials".to_string(),
                "Invalid credentials".to_string(),
            ),
            ApiError::InternalServerError(detail) => {
                tracing::error!(error = %detail, "Request failed unexpectedly");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    "Unexpected error".to_string(),
                )
            }
        };

        (status, Json(ApiErrorBody { error, message })).into_response()
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidEmail(_) | AuthError::WeakPassword(_) => {
                ApiError::UnprocessableEntity(err.to_string())
            }
            AuthError::EmailAlreadyExists(_) => ApiError::Conflict(err.to_string()),
            AuthError::InvalidCredentials => ApiError::Unauthorized,
            AuthError::Directory(_) | AuthError::Unknown(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

/// Error body shape shared by all non-success responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorBody {
    pub error: String,
    pub message: String,
}

/// Public user view on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl From<&PublicUser> for UserData {
    fn from(user: &PublicUser) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
        }
    }
}
