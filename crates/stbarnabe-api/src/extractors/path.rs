//! Path parameter extractor whose rejections become problem responses.

use axum::extract::rejection::PathRejection;
use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use stbarnabe_core::error::AppError;

use crate::error::ApiError;

/// Like [`axum::extract::Path`], but an unparsable segment yields a 400
/// problem body instead of a plain-text rejection.
#[derive(Debug, Clone)]
pub struct AppPath<T>(pub T);

impl<T, S> FromRequestParts<S> for AppPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(Self(value)),
            Err(rejection) => Err(rejection_to_error(rejection).into()),
        }
    }
}

fn rejection_to_error(rejection: PathRejection) -> AppError {
    match rejection {
        PathRejection::FailedToDeserializePathParams(_) => {
            AppError::validation(format!("Invalid path parameter: {}", rejection.body_text()))
        }
        other => AppError::internal(format!("Path extraction failed: {}", other.body_text())),
    }
}
