//! Data Transfer Objects for API requests and responses.
//!
//! Request DTOs use Serde for deserialization; input validation happens on
//! the domain types they convert into.

pub mod health;
pub mod status;
