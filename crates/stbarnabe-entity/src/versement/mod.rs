//! Versement (payment) domain entity.

pub mod model;

pub use model::Versement;
