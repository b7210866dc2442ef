//! # stbarnabe-core
//!
//! Core crate for the St-Barnabe backend. Contains the unified error
//! system, configuration schemas, pagination and sorting types, and the
//! generic repository contract implemented by `stbarnabe-database`.
//!
//! This crate has **no** internal dependencies on other St-Barnabe crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
