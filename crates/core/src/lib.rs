//! Domain core for the inventory catalog.
//!
//! Pure logic only: entity enums, the error taxonomy, session and access
//! rules, input validation, filter criteria and the report aggregation
//! engine. Nothing in here touches storage, so the repository layer, the
//! HTTP front end and any future CLI can share it.

pub mod access;
pub mod error;
pub mod filter;
pub mod report;
pub mod roles;
pub mod secret;
pub mod status;
pub mod types;
pub mod uid;
pub mod validation;
