//! JSON body extractor whose rejections become problem responses.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use stbarnabe_core::error::AppError;

use crate::error::ApiError;

/// Like [`axum::Json`], but a malformed body yields a problem response.
#[derive(Debug, Clone)]
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(rejection_to_error(rejection).into()),
        }
    }
}

fn rejection_to_error(rejection: JsonRejection) -> AppError {
    AppError::validation(format!("Malformed request body: {}", rejection.body_text()))
}
