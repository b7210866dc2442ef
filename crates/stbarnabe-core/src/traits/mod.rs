//! Core traits defined in `stbarnabe-core` and implemented by other crates.

pub mod persistable;
pub mod repository;

pub use persistable::Persistable;
pub use repository::Repository;
