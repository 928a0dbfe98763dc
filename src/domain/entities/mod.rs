//! Core domain entities.
//!
//! Entities are plain data structures without persistence logic.
//!
//! # Entity Types
//!
//! - [`Status`] - The status resource
//! - [`Caller`] - The authenticated identity performing an operation
//!
//! # Design Pattern
//!
//! Separate input structs are used for writes:
//! - `NewStatus` - For creating new records
//! - `UpdateStatus` - For replacing mutable content
//! - `StatusFilter` - For list predicates

pub mod caller;
pub mod status;

pub use caller::Caller;
pub use status::{NewStatus, Status, StatusFilter, StatusList, UpdateStatus};
