// Ingestion - turn inline text, files, uploads and samples into stored content

mod router;
mod samples;
mod source;
mod text;

pub use router::{Ingested, IngestionRouter};
pub use samples::SampleLibrary;
pub use source::{IngestSource, RenderRequest, SourceKind, UploadedFile};
pub use text::{decode_text, has_html_extension};
