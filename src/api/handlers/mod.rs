//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod shorten;

pub use health::health_handler;
pub use shorten::{
    delete_mapping_handler, get_mapping_handler, shorten_handler, update_mapping_handler,
};
