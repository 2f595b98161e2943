//! Custom axum extractors for Askforge

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::Error;

/// JSON body extractor that routes deserialization failures through the
/// centralized error channel.
///
/// Axum's default `Json` rejection writes its own response shape; this
/// wrapper converts malformed or undeserializable bodies into
/// `Error::Validation` so clients always see the uniform envelope with a
/// 400.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> std::result::Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e: JsonRejection| Error::Validation(e.body_text()))?;

        Ok(JsonBody(value))
    }
}
