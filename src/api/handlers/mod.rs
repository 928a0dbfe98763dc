//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod status;

pub use health::health_handler;
pub use status::{
    create_status_handler, delete_status_handler, get_status_handler, list_status_handler,
    search_status_handler, update_status_handler,
};
