//! REST resource for managing employes, mounted at `/api/employes`.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::header::LOCATION;
use axum::response::{IntoResponse, Response};
use tracing::debug;

use stbarnabe_core::error::AppError;
use stbarnabe_core::traits::Persistable;
use stbarnabe_entity::Employe;

use crate::error::ApiError;
use crate::extractors::{AppJson, AppPath, Pageable, validate_body};
use crate::handlers::wrap_or_not_found;
use crate::headers::{
    entity_creation_alert, entity_deletion_alert, entity_update_alert, pagination_headers,
};
use crate::state::AppState;

const ENTITY_NAME: &str = <Employe as Persistable<i64>>::ENTITY_NAME;
const BASE_URL: &str = "/api/employes";

/// POST /api/employes
pub async fn create_employe(
    State(state): State<AppState>,
    AppJson(employe): AppJson<Employe>,
) -> Result<Response, ApiError> {
    debug!(?employe, "REST request to save Employe");
    if employe.id.is_some() {
        return Err(AppError::bad_request_alert(
            "A new employe cannot already have an ID",
            ENTITY_NAME,
            "idexists",
        ).into());
    }
    validate_body(&employe, ENTITY_NAME)?;

    let result = state.employe_service.save(&employe).await?;
    let id = result
        .id
        .ok_or_else(|| AppError::internal("Store returned an employe without an id"))?;

    Ok((
        StatusCode::CREATED,
        [(LOCATION, format!("{BASE_URL}/{id}"))],
        entity_creation_alert(state.app_name(), ENTITY_NAME, &id.to_string()),
        Json(result),
    )
        .into_response())
}

/// PUT /api/employes
pub async fn update_employe(
    State(state): State<AppState>,
    AppJson(employe): AppJson<Employe>,
) -> Result<Response, ApiError> {
    debug!(?employe, "REST request to update Employe");
    let Some(id) = employe.id else {
        return Err(AppError::bad_request_alert("Invalid id", ENTITY_NAME, "idnull").into());
    };
    validate_body(&employe, ENTITY_NAME)?;

    let result = state.employe_service.save(&employe).await?;

    Ok((
        StatusCode::OK,
        entity_update_alert(state.app_name(), ENTITY_NAME, &id.to_string()),
        Json(result),
    )
        .into_response())
}

/// GET /api/employes?page=&size=&sort=
pub async fn get_all_employes(
    State(state): State<AppState>,
    Pageable(page_request): Pageable,
) -> Result<Response, ApiError> {
    debug!("REST request to get a page of Employes");
    let page = state.employe_service.find_all(&page_request).await?;
    let headers = pagination_headers(&page, BASE_URL);

    Ok((StatusCode::OK, headers, Json(page.content)).into_response())
}

/// GET /api/employes/{id}
pub async fn get_employe(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<Response, ApiError> {
    debug!(id, "REST request to get Employe");
    Ok(wrap_or_not_found(state.employe_service.find_one(id).await?))
}

/// DELETE /api/employes/{id}
pub async fn delete_employe(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<Response, ApiError> {
    debug!(id, "REST request to delete Employe");
    state.employe_service.delete(id).await?;

    Ok((
        StatusCode::OK,
        entity_deletion_alert(state.app_name(), ENTITY_NAME, &id.to_string()),
    )
        .into_response())
}
