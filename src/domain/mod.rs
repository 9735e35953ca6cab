//! Domain layer containing business entities and logic.
//!
//! This module defines the persisted entities, the repository interfaces the
//! application layer depends on, and the error vocabulary shared by every
//! store implementation.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`store_error`] - Classification of store failures
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - Business logic is encapsulated in services (see [`crate::application::services`])

pub mod entities;
pub mod repositories;
pub mod store_error;

pub use store_error::{StoreError, UniqueField};
