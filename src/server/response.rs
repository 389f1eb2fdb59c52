// HTTP rendering of ingestion results, failures and stored content

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::types::RenderContentResponse;
use crate::errors::{ErrorKind, IngestError};
use crate::ingest::Ingested;
use crate::retrieval::StoredContent;

pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::MissingParameter | ErrorKind::InvalidFormat => StatusCode::BAD_REQUEST,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
        ErrorKind::IoFailure => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Page-shaped endpoints report failures as plain text.
impl IntoResponse for IngestError {
    fn into_response(self) -> Response {
        (status_for(self.kind()), self.to_string()).into_response()
    }
}

/// JSON-shaped ingestion result.
pub struct IngestOutcome(pub Result<Ingested, IngestError>);

impl IntoResponse for IngestOutcome {
    fn into_response(self) -> Response {
        match self.0 {
            Ok(ingested) => Json(RenderContentResponse::from(&ingested)).into_response(),
            Err(err) => (
                status_for(err.kind()),
                Json(RenderContentResponse::from(&err)),
            )
                .into_response(),
        }
    }
}

/// Stored markup goes out untouched.
impl IntoResponse for StoredContent {
    fn into_response(self) -> Response {
        (
            [(header::CONTENT_TYPE, self.content_type())],
            self.body.to_string(),
        )
            .into_response()
    }
}
