//! REST resource for managing versements, mounted at `/api/versements`.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::header::LOCATION;
use axum::response::{IntoResponse, Response};
use tracing::debug;

use stbarnabe_core::error::AppError;
use stbarnabe_core::traits::Persistable;
use stbarnabe_entity::Versement;

use crate::error::ApiError;
use crate::extractors::{AppJson, AppPath, Pageable, validate_body};
use crate::handlers::wrap_or_not_found;
use crate::headers::{
    entity_creation_alert, entity_deletion_alert, entity_update_alert, pagination_headers,
};
use crate::state::AppState;

const ENTITY_NAME: &str = <Versement as Persistable<i64>>::ENTITY_NAME;
const BASE_URL: &str = "/api/versements";

/// POST /api/versements
///
/// 201 with the stored versement and its `Location`, or 400 `idexists`
/// when the body already carries an id.
pub async fn create_versement(
    State(state): State<AppState>,
    AppJson(versement): AppJson<Versement>,
) -> Result<Response, ApiError> {
    debug!(?versement, "REST request to save Versement");
    if versement.id.is_some() {
        return Err(AppError::bad_request_alert(
            "A new versement cannot already have an ID",
            ENTITY_NAME,
            "idexists",
        ).into());
    }
    validate_body(&versement, ENTITY_NAME)?;

    let result = state.versement_service.save(&versement).await?;
    let id = result
        .id
        .ok_or_else(|| AppError::internal("Store returned a versement without an id"))?;

    Ok((
        StatusCode::CREATED,
        [(LOCATION, format!("{BASE_URL}/{id}"))],
        entity_creation_alert(state.app_name(), ENTITY_NAME, &id.to_string()),
        Json(result),
    )
        .into_response())
}

/// PUT /api/versements
///
/// 200 with the stored versement, or 400 `idnull` when the body has no id.
pub async fn update_versement(
    State(state): State<AppState>,
    AppJson(versement): AppJson<Versement>,
) -> Result<Response, ApiError> {
    debug!(?versement, "REST request to update Versement");
    let Some(id) = versement.id else {
        return Err(AppError::bad_request_alert(
            "Invalid id",
            ENTITY_NAME,
            "idnull",
        ).into());
    };
    validate_body(&versement, ENTITY_NAME)?;

    let result = state.versement_service.save(&versement).await?;

    Ok((
        StatusCode::OK,
        entity_update_alert(state.app_name(), ENTITY_NAME, &id.to_string()),
        Json(result),
    )
        .into_response())
}

/// GET /api/versements?page=&size=&sort=
pub async fn get_all_versements(
    State(state): State<AppState>,
    Pageable(page_request): Pageable,
) -> Result<Response, ApiError> {
    debug!("REST request to get a page of Versements");
    let page = state.versement_service.find_all(&page_request).await?;
    let headers = pagination_headers(&page, BASE_URL);

    Ok((StatusCode::OK, headers, Json(page.content)).into_response())
}

/// GET /api/versements/{id}
pub async fn get_versement(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<Response, ApiError> {
    debug!(id, "REST request to get Versement");
    let versement = state.versement_service.find_one(id).await?;
    Ok(wrap_or_not_found(versement))
}

/// DELETE /api/versements/{id}
///
/// Always 200: deleting an absent versement is not reported.
pub async fn delete_versement(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<Response, ApiError> {
    debug!(id, "REST request to delete Versement");
    state.versement_service.delete(id).await?;

    Ok((
        StatusCode::OK,
        entity_deletion_alert(state.app_name(), ENTITY_NAME, &id.to_string()),
    )
        .into_response())
}
