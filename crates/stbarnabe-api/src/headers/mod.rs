//! Response header conventions shared by every resource.

pub mod alert;
pub mod pagination;

pub use alert::{
    entity_creation_alert, entity_deletion_alert, entity_update_alert, failure_alert,
};
pub use pagination::{X_TOTAL_COUNT, pagination_headers};
