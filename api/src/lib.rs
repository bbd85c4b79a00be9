//! # API crate — backend client and shared types
//!
//! Everything the web server needs to talk to the marketplace backend:
//! the HTTP client with its bearer-token forwarder, the wire models, the
//! closed role enumeration, the backend endpoint catalog, the navigation
//! tree with its role filter, and the session-cookie helpers.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | Explicitly constructed [`ApiClient`]; forwards requests upstream with `Authorization: Bearer` |
//! | [`endpoints`] | Static catalog of backend routes and their minimum required role |
//! | [`error`] | [`ApiError`] — missing token, upstream passthrough, transport failure |
//! | [`models`] | `User` and the auth request/response shapes |
//! | [`nav`] | Dashboard navigation tree and the recursive role filter |
//! | [`roles`] | Closed [`Role`] enumeration over the backend's role tags |
//! | [`session`] | `auth-token` cookie constants, builders, and parsing |
//!
//! This crate performs no cookie reads of its own: the session token is
//! always an explicit parameter, and only the server layer touches the
//! request's cookie store.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod nav;
pub mod roles;
pub mod session;

pub use client::ApiClient;
pub use error::ApiError;
pub use models::{AuthReply, AuthResponse, User};
pub use roles::Role;
pub use session::SessionToken;
