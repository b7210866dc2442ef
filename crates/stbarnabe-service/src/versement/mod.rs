//! Versement service.

pub mod service;

pub use service::VersementService;
