//! Custom Axum extractors.

pub mod json;
pub mod pagination;
pub mod path;
pub mod validation;

pub use json::AppJson;
pub use path::AppPath;
pub use pagination::{Pageable, PaginationParams};
pub use validation::validate_body;
