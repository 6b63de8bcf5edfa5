use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use super::error_responses::AppError;

/// JSON request body that never answers with a plain-text rejection. The
/// content type is not checked, an empty body reads as `{}`, and anything
/// that does not parse is handed to [`AppError`].
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::Body(rejection.body_text()))?;

        let bytes: &[u8] = if bytes.iter().all(u8::is_ascii_whitespace) {
            b"{}"
        } else {
            &bytes
        };

        let value =
            serde_json::from_slice(bytes).map_err(|err| AppError::Body(err.to_string()))?;

        Ok(JsonBody(value))
    }
}
