//! Utility functions for code derivation and store error handling.
//!
//! - [`code_generator`] - Short code derivation from URL digests
//! - [`db_error`] - `sqlx` error classification

pub mod code_generator;
pub mod db_error;
