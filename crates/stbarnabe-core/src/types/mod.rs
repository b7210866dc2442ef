//! Core type definitions used across the St-Barnabe workspace.

pub mod pagination;
pub mod sorting;

pub use pagination::{Page, PageRequest};
pub use sorting::{SortDirection, SortField};
