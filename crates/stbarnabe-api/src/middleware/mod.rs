//! Axum middleware stack.

pub mod alert;
pub mod cors;
pub mod logging;
