// Ingestion router
//
// Resolves an IngestSource to text and registers it in the content store.
// All I/O finishes before `put`, so the store's critical section never waits
// on the filesystem or the network.

use super::samples::SampleLibrary;
use super::source::{IngestSource, RenderRequest, SourceKind, UploadedFile};
use super::text::{decode_text, has_html_extension, read_text_file};
use crate::errors::IngestError;
use crate::pages;
use crate::store::{ContentId, ContentStore};

/// Outcome of a successful ingestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingested {
    pub id: ContentId,
    pub kind: SourceKind,
    /// Uploaded or sample file name, when there is one
    pub file_name: Option<String>,
}

struct Resolved {
    body: String,
    file_name: Option<String>,
}

#[derive(Clone)]
pub struct IngestionRouter {
    store: ContentStore,
    samples: SampleLibrary,
}

impl IngestionRouter {
    pub fn new(store: ContentStore, samples: SampleLibrary) -> Self {
        Self { store, samples }
    }

    pub fn store(&self) -> &ContentStore {
        &self.store
    }

    pub fn samples(&self) -> &SampleLibrary {
        &self.samples
    }

    /// Validate a wire request and ingest it.
    pub async fn ingest_request(&self, request: RenderRequest) -> Result<Ingested, IngestError> {
        let source = IngestSource::try_from(request).inspect_err(|e| log_failure(None, e))?;
        self.ingest(source).await
    }

    /// Resolve `source` and store the result. Nothing is stored on failure.
    pub async fn ingest(&self, source: IngestSource) -> Result<Ingested, IngestError> {
        let kind = source.kind();
        let resolved = self
            .resolve(source)
            .await
            .inspect_err(|e| log_failure(Some(kind), e))?;

        let bytes = resolved.body.len();
        let id = self.store.put(resolved.body);
        tracing::info!(
            id = %id,
            source = %kind,
            bytes,
            file_name = resolved.file_name.as_deref().unwrap_or("-"),
            "Stored content"
        );

        Ok(Ingested {
            id,
            kind,
            file_name: resolved.file_name,
        })
    }

    async fn resolve(&self, source: IngestSource) -> Result<Resolved, IngestError> {
        match source {
            IngestSource::Inline { content } => Ok(Resolved {
                body: content.unwrap_or_else(pages::default_document),
                file_name: None,
            }),
            IngestSource::File { path } => {
                if path.as_os_str().is_empty() {
                    return Err(IngestError::missing(
                        "FilePath is required when source is 'file'",
                    ));
                }
                Ok(Resolved {
                    body: read_text_file(&path).await?,
                    file_name: None,
                })
            }
            IngestSource::Upload { file } => resolve_upload(file),
            IngestSource::Sample { name } => {
                let path = self.samples.resolve(&name).await?;
                Ok(Resolved {
                    body: read_text_file(&path).await?,
                    file_name: Some(name),
                })
            }
        }
    }
}

fn resolve_upload(file: Option<UploadedFile>) -> Result<Resolved, IngestError> {
    let file = match file {
        Some(file) if !file.bytes.is_empty() => file,
        _ => return Err(IngestError::missing("No file uploaded")),
    };

    if !has_html_extension(&file.file_name) {
        return Err(IngestError::InvalidFormat(
            "Only HTML files are allowed".to_string(),
        ));
    }

    Ok(Resolved {
        body: decode_text(&file.bytes),
        file_name: Some(file.file_name),
    })
}

fn log_failure(kind: Option<SourceKind>, err: &IngestError) {
    let source = kind.map(|k| k.as_str()).unwrap_or("request");
    if err.kind().is_client_error() {
        tracing::warn!(source, kind = err.kind().as_str(), "Ingestion rejected: {}", err);
    } else {
        tracing::error!(source, "Ingestion failed: {}", err);
    }
}
