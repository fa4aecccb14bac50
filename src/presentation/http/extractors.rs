//! Custom Extractors
//!
//! Axum extractors for request parsing.

use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;

use crate::shared::error::AppError;

/// JSON extractor that reports malformed bodies as HTTP 400.
///
/// Axum's stock `Json` rejection answers 422 for type errors; the API
/// contract treats every malformed body (missing field, wrong flag
/// type) as a client error.
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        Ok(AppJson(value))
    }
}
