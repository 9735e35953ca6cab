//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx. Queries
//! are checked at runtime so the crate builds without a live database.
//!
//! # Repositories
//!
//! - [`PgMappingRepository`] - Mapping storage and retrieval (`urls` table)
//! - [`PgSequenceRepository`] - Singleton id counter (`counter` table)

pub mod pg_mapping_repository;
pub mod pg_sequence_repository;

pub use pg_mapping_repository::PgMappingRepository;
pub use pg_sequence_repository::PgSequenceRepository;
