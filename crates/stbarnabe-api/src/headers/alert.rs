//! Entity alert headers.
//!
//! A successful write carries `X-{app}-alert: {app}.{entity}.{action}` and
//! `X-{app}-params: {id}`. A rejected write carries
//! `X-{app}-error: error.{key}` and `X-{app}-params: {entity}`.

use axum::http::{HeaderMap, HeaderName, HeaderValue};
use tracing::warn;

/// Build `X-{app}-alert` and `X-{app}-params` headers.
pub fn alert(app_name: &str, message: &str, param: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    insert(&mut headers, &format!("X-{app_name}-alert"), message);
    insert(&mut headers, &format!("X-{app_name}-params"), param);
    headers
}

/// Alert for a freshly created entity.
pub fn entity_creation_alert(app_name: &str, entity_name: &str, param: &str) -> HeaderMap {
    alert(app_name, &format!("{app_name}.{entity_name}.created"), param)
}

/// Alert for an updated entity.
pub fn entity_update_alert(app_name: &str, entity_name: &str, param: &str) -> HeaderMap {
    alert(app_name, &format!("{app_name}.{entity_name}.updated"), param)
}

/// Alert for a deleted entity.
pub fn entity_deletion_alert(app_name: &str, entity_name: &str, param: &str) -> HeaderMap {
    alert(app_name, &format!("{app_name}.{entity_name}.deleted"), param)
}

/// Headers describing a rejected request on `entity_name`.
pub fn failure_alert(app_name: &str, entity_name: &str, error_key: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    insert(
        &mut headers,
        &format!("X-{app_name}-error"),
        &format!("error.{error_key}"),
    );
    insert(&mut headers, &format!("X-{app_name}-params"), entity_name);
    headers
}

fn insert(headers: &mut HeaderMap, name: &str, value: &str) {
    match (
        HeaderName::try_from(name),
        HeaderValue::try_from(value),
    ) {
        (Ok(name), Ok(value)) => {
            headers.insert(name, value);
        }
        _ => warn!(header = name, "Skipping alert header with invalid characters"),
    }
}
