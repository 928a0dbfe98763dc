//! Business logic services for the application layer.

pub mod auth_service;
pub mod status_service;

pub use auth_service::{AuthService, hash_token};
pub use status_service::{DEFAULT_CACHE_TTL_SECONDS, StatusService, cache_key};
