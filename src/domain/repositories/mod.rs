//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access and are implemented by concrete
//! repositories in `crate::infrastructure::persistence`. Mock implementations
//! are generated via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`StatusRepository`] - Status CRUD, listing and search
//! - [`TokenRepository`] - API token authentication
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod status_repository;
pub mod token_repository;

pub use status_repository::StatusRepository;
pub use token_repository::{ApiToken, TokenRepository};

#[cfg(test)]
pub use status_repository::MockStatusRepository;
#[cfg(test)]
pub use token_repository::MockTokenRepository;
