use axum::{
    body::Bytes,
    extract::{FromRequest, Request, rejection::BytesRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

/// JSON body extractor that ignores `Content-Type` and answers every
/// undecodable payload with `400 Bad Request`.
///
/// Only the first JSON value is decoded; anything after it is ignored.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

#[derive(Debug, thiserror::Error)]
pub enum JsonBodyRejection {
    #[error("failed to read request body: {0}")]
    Read(#[from] BytesRejection),

    #[error("request body is empty")]
    Empty,

    #[error("failed to decode request body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl IntoResponse for JsonBodyRejection {
    fn into_response(self) -> Response {
        tracing::warn!("{self}");
        match self {
            Self::Read(rejection) => rejection.into_response(),
            Self::Empty | Self::Decode(_) => {
                (StatusCode::BAD_REQUEST, "Failed to decode request body").into_response()
            }
        }
    }
}

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = JsonBodyRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await?;

        let value = serde_json::Deserializer::from_slice(&bytes)
            .into_iter::<T>()
            .next()
            .ok_or(JsonBodyRejection::Empty)??;

        Ok(Self(value))
    }
}
