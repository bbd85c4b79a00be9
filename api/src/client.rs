//! # Backend HTTP client
//!
//! [`ApiClient`] wraps a [`reqwest::Client`] pointed at the versioned API
//! root (`{base_url}/api/{version}`). An instance is built once at
//! startup and handed to whoever needs it; there is no process-wide
//! singleton to reach for.
//!
//! Two layers:
//!
//! - [`ApiClient::send`] — the authenticated forwarder. Takes the session
//!   token as an explicit parameter, attaches it as `Authorization:
//!   Bearer`, and refuses to touch the network when the token is absent.
//!   One attempt, no retry; a non-success reply becomes
//!   [`ApiError::Upstream`] with the backend's status and its
//!   `error`/`message` envelope field.
//! - Typed calls (`login`, `register`, `refresh`, `profile`, ...) — one
//!   per catalog entry the app actually uses, decoding into the
//!   [`crate::models`] types.

use reqwest::{header, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::models::{AuthResponse, User};
use crate::session::SessionToken;

/// Client for the marketplace backend.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Point a new client at `{base_url}/api/{version}`.
    pub fn new(base_url: &str, version: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: format!("{}/api/{}", base_url.trim_end_matches('/'), version),
        }
    }

    /// The versioned API root this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Forward an authenticated request and hand back the backend's JSON.
    ///
    /// Fails with [`ApiError::MissingToken`] before any network I/O when
    /// no token is supplied.
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        token: Option<&SessionToken>,
        body: Option<&Value>,
    ) -> Result<Value, ApiError> {
        let token = token.ok_or(ApiError::MissingToken)?;
        self.request(method, path, Some(token), body).await
    }

    /// `POST /auth/login` with a credential pair.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let body = json!({ "email": email, "password": password });
        self.request(Method::POST, "/auth/login", None, Some(&body)).await
    }

    /// `POST /auth/register` with the registration payload.
    pub async fn register<B: Serialize + ?Sized>(&self, body: &B) -> Result<AuthResponse, ApiError> {
        self.request(Method::POST, "/auth/register", None, Some(body)).await
    }

    /// `POST /auth/refresh` — exchange a still-valid token for a fresh
    /// one. Nothing calls this automatically; it is offered to callers
    /// that want to extend a session before the old token lapses.
    pub async fn refresh(&self, token: &SessionToken) -> Result<AuthResponse, ApiError> {
        self.request(Method::POST, "/auth/refresh", Some(token), None::<&Value>).await
    }

    /// `GET /profile` for the token's user.
    pub async fn profile(&self, token: Option<&SessionToken>) -> Result<User, ApiError> {
        let token = token.ok_or(ApiError::MissingToken)?;
        self.request(Method::GET, "/profile", Some(token), None::<&Value>).await
    }

    /// `PUT /profile` with a partial update, forwarded as-is.
    pub async fn update_profile(
        &self,
        token: Option<&SessionToken>,
        body: &Value,
    ) -> Result<Value, ApiError> {
        self.send(Method::PUT, "/profile", token, Some(body)).await
    }

    /// `GET /users` (admin only upstream); body passes through verbatim.
    pub async fn users(&self, token: Option<&SessionToken>) -> Result<Value, ApiError> {
        self.send(Method::GET, "/users", token, None).await
    }

    /// `GET /users/{id}`.
    pub async fn user(&self, id: i64, token: Option<&SessionToken>) -> Result<Value, ApiError> {
        self.send(Method::GET, &format!("/users/{id}"), token, None).await
    }

    /// `PUT /users/{id}` with a partial update, forwarded as-is.
    pub async fn update_user(
        &self,
        id: i64,
        token: Option<&SessionToken>,
        body: &Value,
    ) -> Result<Value, ApiError> {
        self.send(Method::PUT, &format!("/users/{id}"), token, Some(body)).await
    }

    /// `DELETE /users/{id}`.
    pub async fn delete_user(&self, id: i64, token: Option<&SessionToken>) -> Result<Value, ApiError> {
        self.send(Method::DELETE, &format!("/users/{id}"), token, None).await
    }

    async fn request<T, B>(
        &self,
        method: Method,
        path: &str,
        token: Option<&SessionToken>,
        body: Option<&B>,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%method, path, "calling backend");

        let mut request = self
            .http
            .request(method, &url)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            request = request.header(header::AUTHORIZATION, format!("Bearer {}", token.expose()));
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let data: Value = response.json().await.unwrap_or(Value::Null);
            let message = upstream_message(status.as_u16(), &data);
            tracing::warn!(status = status.as_u16(), path, error = %message, "backend reported an error");
            return Err(ApiError::Upstream { status: status.as_u16(), message });
        }

        Ok(response.json().await?)
    }
}

/// Best message for an upstream failure: the envelope's `error`, then its
/// `message`, then a generic fallback.
fn upstream_message(status: u16, data: &Value) -> String {
    data.get("error")
        .and_then(Value::as_str)
        .or_else(|| data.get("message").and_then(Value::as_str))
        .map(str::to_string)
        .unwrap_or_else(|| format!("HTTP error {status}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_join() {
        let client = ApiClient::new("http://localhost:8080/", "v1");
        assert_eq!(client.base_url(), "http://localhost:8080/api/v1");
    }

    #[test]
    fn test_upstream_message_prefers_error_field() {
        let data = json!({ "error": "bad credentials", "message": "ignored" });
        assert_eq!(upstream_message(401, &data), "bad credentials");

        let data = json!({ "message": "not found" });
        assert_eq!(upstream_message(404, &data), "not found");

        assert_eq!(upstream_message(502, &Value::Null), "HTTP error 502");
    }

    #[tokio::test]
    async fn test_send_without_token_never_reaches_the_network() {
        // The base URL is unroutable; reaching it would error differently.
        let client = ApiClient::new("http://192.0.2.1:1", "v1");
        let err = client.send(Method::GET, "/users", None, None).await.unwrap_err();
        assert!(matches!(err, ApiError::MissingToken));

        let err = client.profile(None).await.unwrap_err();
        assert!(matches!(err, ApiError::MissingToken));
    }
}
