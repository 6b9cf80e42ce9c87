//! Request extractors.
//!
//! - [`auth::AuthSession`] -- resolves the bearer token to a catalog session.

pub mod auth;
