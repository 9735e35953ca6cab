//! Core domain entities representing the business data model.
//!
//! # Entity Types
//!
//! - [`UrlMapping`] - A persisted association between a short code and a URL
//!
//! # Design Pattern
//!
//! Entities follow the "New Type" pattern with a separate struct for creation:
//! [`NewMapping`] carries everything the store needs to insert a record.

pub mod mapping;

pub use mapping::{NewMapping, UrlMapping};
