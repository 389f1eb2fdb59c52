// Route handlers and router construction

use axum::extract::multipart::MultipartError;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Json, Router};

use super::response::IngestOutcome;
use super::types::{HealthResponse, SamplesResponse};
use super::AppState;
use crate::errors::IngestError;
use crate::ingest::{IngestSource, RenderRequest, UploadedFile};
use crate::pages;
use crate::retrieval::{self, StoredContent};

/// Build the router with every route and no middleware layers.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handle_index))
        .route("/welcome", get(handle_welcome))
        .route("/control", get(handle_control))
        .route("/render", post(handle_render))
        .route("/render-content", post(handle_render_content))
        .route("/upload", post(handle_upload))
        .route("/upload-content", post(handle_upload_content))
        .route("/samples", get(handle_list_samples))
        .route("/samples/:file_name", get(handle_sample))
        .route("/samples-content/:file_name", get(handle_sample_content))
        .route("/content/:id", get(handle_content))
        .route("/health", get(health_check))
        .with_state(state)
}

pub async fn handle_index() -> Html<String> {
    Html(pages::default_document())
}

pub async fn handle_welcome() -> Html<&'static str> {
    Html(pages::WELCOME_PAGE)
}

pub async fn handle_control() -> Html<&'static str> {
    Html(pages::CONTROL_PANEL)
}

pub async fn handle_render(
    State(state): State<AppState>,
    body: Result<Json<RenderRequest>, JsonRejection>,
) -> Result<Html<String>, IngestError> {
    let request = request_body(body)?;
    let ingested = state.ingestion.ingest_request(request).await?;
    Ok(Html(pages::viewer_page(&ingested)))
}

pub async fn handle_render_content(
    State(state): State<AppState>,
    body: Result<Json<RenderRequest>, JsonRejection>,
) -> IngestOutcome {
    let result = match request_body(body) {
        Ok(request) => state.ingestion.ingest_request(request).await,
        Err(e) => Err(e),
    };
    IngestOutcome(result)
}

pub async fn handle_upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Html<String>, IngestError> {
    let file = read_upload(multipart).await?;
    let ingested = state.ingestion.ingest(IngestSource::Upload { file }).await?;
    Ok(Html(pages::viewer_page(&ingested)))
}

pub async fn handle_upload_content(
    State(state): State<AppState>,
    multipart: Multipart,
) -> IngestOutcome {
    let result = match read_upload(multipart).await {
        Ok(file) => state.ingestion.ingest(IngestSource::Upload { file }).await,
        Err(e) => Err(e),
    };
    IngestOutcome(result)
}

pub async fn handle_list_samples(State(state): State<AppState>) -> Json<SamplesResponse> {
    let files = state.ingestion.samples().list();
    tracing::debug!(count = files.len(), "Listed samples");
    Json(SamplesResponse { files })
}

pub async fn handle_sample(
    State(state): State<AppState>,
    Path(file_name): Path<String>,
) -> Result<Html<String>, IngestError> {
    let ingested = state
        .ingestion
        .ingest(IngestSource::Sample { name: file_name })
        .await?;
    Ok(Html(pages::viewer_page(&ingested)))
}

pub async fn handle_sample_content(
    State(state): State<AppState>,
    Path(file_name): Path<String>,
) -> IngestOutcome {
    IngestOutcome(
        state
            .ingestion
            .ingest(IngestSource::Sample { name: file_name })
            .await,
    )
}

pub async fn handle_content(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StoredContent, IngestError> {
    retrieval::retrieve(&state.store, &id).inspect_err(|_| {
        tracing::debug!(id = %id, "Content not found");
    })
}

pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        entries: state.store.len(),
    })
}

/// Unparseable bodies and wrong content types are reported like any other
/// malformed request instead of with axum's own rejection text.
fn request_body(
    body: Result<Json<RenderRequest>, JsonRejection>,
) -> Result<RenderRequest, IngestError> {
    body.map(|Json(request)| request).map_err(|rejection| {
        tracing::warn!(
            status = %rejection.status(),
            "Rejected render request: {}",
            rejection.body_text()
        );
        IngestError::InvalidFormat(rejection.body_text())
    })
}

/// Pull the `file` field out of a multipart form, reading it fully.
///
/// Returns `Ok(None)` when the form has no such field; validation of the
/// file itself belongs to the ingestion router.
async fn read_upload(mut multipart: Multipart) -> Result<Option<UploadedFile>, IngestError> {
    while let Some(field) = multipart.next_field().await.map_err(upload_io_error)? {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field.file_name().unwrap_or_default().to_string();
        let bytes = field.bytes().await.map_err(upload_io_error)?;
        return Ok(Some(UploadedFile {
            file_name,
            bytes: bytes.to_vec(),
        }));
    }
    Ok(None)
}

fn upload_io_error(err: MultipartError) -> IngestError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        tracing::warn!("Upload exceeds the body limit: {}", err.body_text());
        return IngestError::PayloadTooLarge(err.body_text());
    }
    tracing::error!("Failed to read multipart upload: {}", err.body_text());
    IngestError::io(
        "Error processing uploaded file",
        std::io::Error::new(std::io::ErrorKind::InvalidData, err.body_text()),
    )
}
