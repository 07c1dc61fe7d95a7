use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;

use super::ApiError;
use super::UserData;
use crate::domain::user::models::EmailAddress;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::user::ports::AuthServicePort;

/// Return the profile of the caller identified by the bearer token.
pub async fn me(
    State(state): State<AppState>,
    Extension(authenticated): Extension<AuthenticatedUser>,
) -> Result<(StatusCode, Json<UserData>), ApiError> {
    let email =
        EmailAddress::new(authenticated.email).map_err(|_| ApiError::Unauthorized)?;

    state
        .auth_service
        .find_user(&email)
        .await
        .map_err(ApiError::from)
        .map(|ref user| (StatusCode::OK, Json(user.into())))
}
