//! Employe service.

pub mod service;

pub use service::EmployeService;
