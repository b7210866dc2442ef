//! # stbarnabe-service
//!
//! One service per entity. Services hold their repository behind the
//! generic [`Repository`](stbarnabe_core::traits::Repository) trait so the
//! same code runs against PostgreSQL or the in-memory store.

pub mod employe;
pub mod versement;

pub use employe::EmployeService;
pub use versement::VersementService;
