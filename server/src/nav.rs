//! Navigation for the dashboard shell.

use std::sync::Arc;

use api::nav::{filter_routes, NavRoute};
use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;

use crate::extract::session_token;
use crate::state::AppState;

/// The sidebar tree the current session may see.
///
/// The role comes from a fresh profile fetch. No cookie, a token the
/// backend rejects, or a role tag we do not recognize all resolve to the
/// guest view; this endpoint never errors.
pub async fn navigation(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Json<Vec<NavRoute>> {
    let token = session_token(&headers);
    let role = match state.api.profile(token.as_ref()).await {
        Ok(user) => Some(user.role),
        Err(err) => {
            tracing::debug!(error = %err, "navigation falling back to guest view");
            None
        }
    };

    Json(filter_routes(&state.nav, role))
}
