//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls,
//! the cache, validation, and business rules. Services consume repository traits
//! and provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::status_service::StatusService`] - Status use cases with cache-aside reads
//! - [`services::auth_service::AuthService`] - API token authentication

pub mod services;
