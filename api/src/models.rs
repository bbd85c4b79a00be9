//! # Wire models
//!
//! The shapes this app exchanges with the backend and with browsers.
//! [`User`] is the backend's user record; the app never stores it and
//! re-fetches it on every request that needs one. [`AuthResponse`] is
//! what the backend returns from login/registration; [`AuthReply`] is
//! what this app hands back to the browser — same thing minus the token,
//! which only ever travels in the session cookie.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::roles::Role;

/// A user record as the backend reports it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    pub role: Role,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Backend reply to login, registration, and token refresh.
#[derive(Clone, Debug, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
    #[serde(default)]
    pub message: Option<String>,
}

/// This app's reply to the browser: the user, never the token.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuthReply {
    pub message: String,
    pub user: User,
}

/// Login credentials accepted by `POST /api/auth/login`.
///
/// Fields default to empty so a missing field surfaces as this app's own
/// 400 instead of a deserialization failure.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Registration payload forwarded to the backend.
///
/// The optional fields feed the role-specific profile the backend builds
/// alongside the account.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub username: String,
    pub password: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialization: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualifications: Option<String>,
}

/// Error envelope this app sends to browsers.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
