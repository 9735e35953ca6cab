//! Repository trait definitions for the domain layer.
//!
//! These traits abstract the two collections the service persists: the URL
//! mappings themselves and the singleton sequence counter that hands out ids.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`MappingRepository`] - Short code / URL mapping CRUD operations
//! - [`SequenceRepository`] - Monotonic id allocation
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod mapping_repository;
pub mod sequence_repository;

pub use mapping_repository::MappingRepository;
pub use sequence_repository::SequenceRepository;

#[cfg(test)]
pub use mapping_repository::MockMappingRepository;
#[cfg(test)]
pub use sequence_repository::MockSequenceRepository;
