//! # stbarnabe-entity
//!
//! Domain entity models for St-Barnabe. Every struct in this crate is a
//! database table row that also travels as the JSON body of its REST
//! resource. Entities derive `Serialize`/`Deserialize` (camelCase on the
//! wire), `sqlx::FromRow`, and `validator::Validate`.

pub mod employe;
pub mod versement;

pub use employe::Employe;
pub use versement::Versement;
