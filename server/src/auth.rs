//! Login, registration, and logout.
//!
//! Login and registration validate the request shape, forward the
//! credentials to the backend, and on success store the issued token in
//! the session cookie while replying with the user object only. Logout
//! never consults the backend: it clears the cookie and reports success
//! whatever the prior state.

use std::sync::Arc;

use api::models::{AuthReply, LoginRequest};
use api::session::{clear_session_cookie, session_cookie};
use api::{AuthResponse, Role, SessionToken};
use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::response::{AppendHeaders, IntoResponse};
use axum::Json;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::state::AppState;

pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(credentials): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    if credentials.email.trim().is_empty() {
        return Err(AppError::MissingField("email"));
    }
    if credentials.password.is_empty() {
        return Err(AppError::MissingField("password"));
    }

    let auth = state.api.login(&credentials.email, &credentials.password).await?;
    tracing::info!(email = %credentials.email, "signed in");
    Ok(signed_in(&state, auth, "Signed in"))
}

pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    for field in ["email", "username", "password", "role"] {
        let present = body
            .get(field)
            .and_then(Value::as_str)
            .is_some_and(|value| !value.trim().is_empty());
        if !present {
            return Err(AppError::MissingField(field));
        }
    }
    // Reject unknown role tags before the backend sees them.
    let tag = body["role"].as_str().unwrap_or_default();
    tag.parse::<Role>()
        .map_err(|_| AppError::UnknownRole(tag.to_string()))?;

    let auth = state.api.register(&body).await?;
    Ok(signed_in(&state, auth, "Account created"))
}

pub async fn logout() -> impl IntoResponse {
    (
        AppendHeaders([(SET_COOKIE, clear_session_cookie())]),
        Json(json!({ "message": "Signed out" })),
    )
}

/// Store the issued token in the cookie; the reply carries the user only.
fn signed_in(state: &AppState, auth: AuthResponse, fallback: &str) -> impl IntoResponse {
    let AuthResponse { token, user, message } = auth;
    let cookie = session_cookie(&SessionToken::new(token), state.secure_cookies);
    (
        AppendHeaders([(SET_COOKIE, cookie)]),
        Json(AuthReply {
            message: message.unwrap_or_else(|| fallback.to_string()),
            user,
        }),
    )
}
