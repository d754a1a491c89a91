use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use service_core::error::AppError;

/// JSON body extractor whose rejections use the service's `{"detail": ...}` shape.
///
/// The body is parsed as JSON whatever the `content-type` header says. Bad
/// syntax or missing and mistyped fields are rejected with 422.
pub struct JsonBody<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::UnprocessableEntity(rejection.body_text()))?;

        let value = serde_json::from_slice(&bytes).map_err(|e| {
            AppError::UnprocessableEntity(format!("Failed to parse the request body as JSON: {}", e))
        })?;

        Ok(JsonBody(value))
    }
}
