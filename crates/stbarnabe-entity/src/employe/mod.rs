//! Employe domain entity.

pub mod model;

pub use model::Employe;
