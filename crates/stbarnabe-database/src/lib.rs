//! # stbarnabe-database
//!
//! PostgreSQL connection management, migrations, and the concrete
//! repositories for every St-Barnabe entity, plus a process-local store
//! implementing the same contract.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
pub use memory::{ForeignKey, InMemoryRepository, KeyLookup, ReferenceHolder};
