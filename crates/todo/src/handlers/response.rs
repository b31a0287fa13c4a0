//! JSON envelopes shared by every handler.
//!
//! [`JsonResponse`] encodes a body with `application/json; charset=utf-8`
//! and [`LenientJson`] decodes request bodies, rejecting only a body that
//! could not be read.

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, FromRequest, Request},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{de::DeserializeOwned, Serialize};

use todo_core::{serde::decode_lenient, todo::ErrorEnvelope};

/// Content type sent with every response.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// A JSON body with an explicit status code.
///
/// If the body cannot be encoded the failure is logged and the client gets
/// a 500 with an empty body.
#[derive(Debug, Clone)]
pub struct JsonResponse<T> {
    status: StatusCode,
    body: T,
}

impl<T> JsonResponse<T> {
    pub fn ok(body: T) -> Self {
        Self::with_status(StatusCode::OK, body)
    }

    pub fn with_status(status: StatusCode, body: T) -> Self {
        Self { status, body }
    }
}

impl<T: Serialize> IntoResponse for JsonResponse<T> {
    fn into_response(self) -> Response {
        let content_type = [(
            header::CONTENT_TYPE,
            HeaderValue::from_static(JSON_CONTENT_TYPE),
        )];

        match serde_json::to_vec(&self.body) {
            Ok(bytes) => (self.status, content_type, bytes).into_response(),
            Err(err) => {
                tracing::error!(error = %err, "Failed to serialize response body");
                (StatusCode::INTERNAL_SERVER_ERROR, content_type).into_response()
            }
        }
    }
}

/// Request body extractor that never rejects a body it managed to read.
///
/// Malformed JSON, a missing body, or fields of the wrong type all decode to
/// zero values (see [`decode_lenient`]). Failing to read the body at all,
/// e.g. past the body size limit, is rejected with [`BodyReadRejection`].
#[derive(Debug, Clone, Default)]
pub struct LenientJson<T>(pub T);

impl<T, S> FromRequest<S> for LenientJson<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = BodyReadRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(BodyReadRejection)?;
        Ok(Self(decode_lenient(&bytes)))
    }
}

/// The request body could not be buffered.
///
/// Keeps axum's status (413 past the size limit, 400 otherwise) and renders
/// the message as an error envelope.
#[derive(Debug)]
pub struct BodyReadRejection(pub BytesRejection);

impl IntoResponse for BodyReadRejection {
    fn into_response(self) -> Response {
        let status = self.0.status();
        let message = self.0.body_text();
        tracing::warn!(status = %status, error = %message, "Failed to read request body");

        JsonResponse::with_status(status, ErrorEnvelope::new(message)).into_response()
    }
}
