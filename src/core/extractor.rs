use axum::{
    body::Body,
    extract::{rejection::JsonRejection, FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;

use crate::core::error::AppError;

/// Error an endpoint reports when its JSON body cannot be read.
///
/// Each request DTO names its own so a rejected body answers with the same
/// static message as any other invalid input for that endpoint.
pub trait RejectedBody {
    fn rejected_body() -> AppError;
}

/// JSON extractor whose rejection is the body type's [`RejectedBody`] error.
/// The parse failure itself is only logged.
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned + RejectedBody,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(value) => Ok(Self(value.0)),
            Err(rejection) => {
                tracing::debug!("Rejected JSON body: {}", rejection.body_text());
                Err(T::rejected_body())
            }
        }
    }
}

/// The `{id}` path segment of a delete route.
///
/// Ids are integers; anything else is kept as `None`, which no row can match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordId(pub Option<i32>);

impl RecordId {
    pub fn parse(raw: &str) -> Self {
        Self(raw.trim().parse::<i32>().ok())
    }
}

impl<S> FromRequestParts<S> for RecordId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;
        Ok(Self::parse(&raw))
    }
}
