//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with
//! bound parameters for every value.
//!
//! # Repositories
//!
//! - [`PgStatusRepository`] - Status storage, listing and search
//! - [`PgTokenRepository`] - API token storage and validation

pub mod pg_status_repository;
pub mod pg_token_repository;

pub use pg_status_repository::PgStatusRepository;
pub use pg_token_repository::PgTokenRepository;
