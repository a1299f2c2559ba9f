//! Request extractors
//!
//! Same as `axum::extract::{Query, Path}`, but a malformed query string or
//! path segment is rejected with the standard error body instead of axum's
//! plain-text rejection.

use axum::extract::{FromRequestParts, Path, Query};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use crate::utils::AppError;

pub struct ReportQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ReportQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?;
        Ok(Self(value))
    }
}

/// Path parameters; undecodable segments (e.g. `%FF`) become a 400 error body
pub struct ReportPath<T>(pub T);

impl<T, S> FromRequestParts<S> for ReportPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?;
        Ok(Self(value))
    }
}
