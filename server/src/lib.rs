//! Web server for the marketplace frontend.
//!
//! A thin, stateless layer between browsers and the backend API: it owns
//! the `auth-token` session cookie, validates request shape, forwards
//! everything else upstream with the bearer token, and serves the
//! role-filtered navigation tree for the dashboard shell.

pub mod application;
pub mod auth;
pub mod error;
pub mod extract;
pub mod nav;
pub mod settings;
pub mod state;
pub mod users;

pub use application::{router, serve};
pub use settings::Settings;
pub use state::AppState;
