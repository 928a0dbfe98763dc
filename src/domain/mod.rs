//! Domain layer containing business entities and repository contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`pagination`] - Paging input and derived metadata
//! - [`repositories`] - Data access trait definitions
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure
//! - Repository traits define contracts implemented by the infrastructure layer
//! - Orchestration lives in [`crate::application::services`]

pub mod entities;
pub mod pagination;
pub mod repositories;
