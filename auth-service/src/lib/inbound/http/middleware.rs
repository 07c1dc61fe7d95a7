use auth_core::TokenVerification;
use axum::extract::Request;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;

use crate::domain::user::models::UserId;
use crate::inbound::http::router::AppState;
use crate::user::ports::AuthServicePort;

/// Extension type carrying the authenticated identity into handlers
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub email: String,
}

/// Middleware that verifies bearer tokens on protected routes.
///
/// Expired and invalid tokens both produce 401; the body distinguishes them
/// so clients know a re-login (rather than a retry) is needed.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_token_from_header(&req)?;

    let claims = match state.auth_service.verify_token(token) {
        TokenVerification::Valid(claims) => claims,
        TokenVerification::Expired => {
            tracing::debug!("Rejected expired token");
            return Err(unauthorized(
                "Token expired",
                "Session has expired, log in again",
            ));
        }
        TokenVerification::Invalid => {
            tracing::warn!("Rejected malformed or badly signed token");
            return Err(unauthorized("Invalid token", "Token could not be verified"));
        }
    };

    let user_id = UserId::from_string(&claims.sub).map_err(|e| {
        tracing::error!("Failed to parse user ID from token: {}", e);
        unauthorized("Invalid token", "Token could not be verified")
    })?;

    req.extensions_mut().insert(AuthenticatedUser {
        user_id,
        email: claims.email,
    });

    Ok(next.run(req).await)
}

fn unauthorized(error: &str, message: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({
            "error": error,
            "message": message,
        })),
    )
        .into_response()
}

fn extract_token_from_header(req: &Request) -> Result<&str, Response> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| {
            unauthorized("Missing Authorization header", "Authentication required")
        })?;

    let auth_str = auth_header.to_str().map_err(|_| {
        unauthorized("Invalid Authorization header", "Authentication required")
    })?;

    if !auth_str.starts_with("Bearer ") {
        return Err(unauthorized(
            "Invalid Authorization header format. Expected: Bearer <token>",
            "Authentication required",
        ));
    }

    Ok(auth_str.trim_start_matches("Bearer "))
}
