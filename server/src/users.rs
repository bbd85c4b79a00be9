//! Profile and user management, proxied to the backend.
//!
//! Every handler reads the session cookie, hands the token to the
//! forwarder, and passes the backend's reply through. A missing cookie
//! is a 401 before any network call; backend failures keep their status
//! and message.

use std::sync::Arc;

use api::User;
use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;
use serde_json::Value;

use crate::error::AppError;
use crate::extract::session_token;
use crate::state::AppState;

pub async fn profile(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<User>, AppError> {
    let token = session_token(&headers);
    let user = state.api.profile(token.as_ref()).await?;
    Ok(Json(user))
}

pub async fn update_profile(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<Json<Value>, AppError> {
    let token = session_token(&headers);
    let updated = state.api.update_profile(token.as_ref(), &body).await?;
    Ok(Json(updated))
}

pub async fn list_users(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Value>, AppError> {
    let token = session_token(&headers);
    let users = state.api.users(token.as_ref()).await?;
    Ok(Json(users))
}

pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> Result<Json<Value>, AppError> {
    let token = session_token(&headers);
    let user = state.api.user(id, token.as_ref()).await?;
    Ok(Json(user))
}

pub async fn update_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<Json<Value>, AppError> {
    let token = session_token(&headers);
    let updated = state.api.update_user(id, token.as_ref(), &body).await?;
    Ok(Json(updated))
}

pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> Result<Json<Value>, AppError> {
    let token = session_token(&headers);
    let reply = state.api.delete_user(id, token.as_ref()).await?;
    Ok(Json(reply))
}
