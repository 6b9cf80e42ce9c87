//! Inventory tracker HTTP server library.
//!
//! Exposes config, state, error handling, the session store and routes so
//! integration tests and the binary entrypoint share one router.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod router;
pub mod routes;
pub mod session;
pub mod state;
