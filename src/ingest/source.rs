// Ingestion sources
//
// One request shape on the wire (RenderRequest), one sum type inside
// (IngestSource). Conversion between them is where per-variant required
// fields are checked.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

use crate::errors::IngestError;

/// JSON body accepted by `/render` and `/render-content`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderRequest {
    /// "file", "sample" or "upload", case-insensitive; anything else is inline
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub file_path: Option<String>,
    #[serde(default)]
    pub sample_name: Option<String>,
}

impl RenderRequest {
    pub fn inline(content: impl Into<String>) -> Self {
        Self {
            source: Some("string".to_string()),
            content: Some(content.into()),
            ..Default::default()
        }
    }

    pub fn file(path: impl Into<String>) -> Self {
        Self {
            source: Some("file".to_string()),
            file_path: Some(path.into()),
            ..Default::default()
        }
    }

    pub fn sample(name: impl Into<String>) -> Self {
        Self {
            source: Some("sample".to_string()),
            sample_name: Some(name.into()),
            ..Default::default()
        }
    }
}

/// Discriminant of an ingestion, kept on the result for logging and labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    String,
    File,
    Upload,
    Sample,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::String => "string",
            SourceKind::File => "file",
            SourceKind::Upload => "upload",
            SourceKind::Sample => "sample",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A file received through a multipart upload.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Where the markup for a new entry comes from.
#[derive(Debug, Clone)]
pub enum IngestSource {
    /// Text as given; `None` means the built-in default document.
    Inline { content: Option<String> },
    /// A file on the local filesystem.
    File { path: PathBuf },
    /// An uploaded file; `None` when the form carried no file at all.
    Upload { file: Option<UploadedFile> },
    /// A file name inside the samples directory.
    Sample { name: String },
}

impl IngestSource {
    pub fn kind(&self) -> SourceKind {
        match self {
            IngestSource::Inline { .. } => SourceKind::String,
            IngestSource::File { .. } => SourceKind::File,
            IngestSource::Upload { .. } => SourceKind::Upload,
            IngestSource::Sample { .. } => SourceKind::Sample,
        }
    }
}

impl TryFrom<RenderRequest> for IngestSource {
    type Error = IngestError;

    fn try_from(request: RenderRequest) -> Result<Self, Self::Error> {
        let source = request
            .source
            .as_deref()
            .map(|s| s.trim().to_ascii_lowercase())
            .unwrap_or_default();

        match source.as_str() {
            "file" => match non_blank(request.file_path) {
                Some(path) => Ok(IngestSource::File {
                    path: PathBuf::from(path),
                }),
                None => Err(IngestError::missing(
                    "FilePath is required when source is 'file'",
                )),
            },
            "sample" => match non_blank(request.sample_name) {
                Some(name) => Ok(IngestSource::Sample { name }),
                None => Err(IngestError::missing(
                    "SampleName is required when source is 'sample'",
                )),
            },
            // JSON cannot carry the file itself
            "upload" => Err(IngestError::missing(
                "An uploaded file is required when source is 'upload'; send it as multipart form data",
            )),
            // absent, "string" and unrecognised values all mean inline text
            _ => Ok(IngestSource::Inline {
                content: request.content,
            }),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    #[test]
    fn test_missing_source_defaults_to_inline() {
        let source = IngestSource::try_from(RenderRequest::default()).unwrap();
        assert!(matches!(source, IngestSource::Inline { content: None }));
    }

    #[test]
    fn test_source_is_case_insensitive() {
        let request = RenderRequest {
            source: Some("FILE".to_string()),
            file_path: Some("/tmp/a.html".to_string()),
            ..Default::default()
        };
        let source = IngestSource::try_from(request).unwrap();
        assert_eq!(source.kind(), SourceKind::File);
    }

    #[test]
    fn test_file_without_path_is_missing_parameter() {
        let request = RenderRequest {
            source: Some("file".to_string()),
            file_path: Some("   ".to_string()),
            ..Default::default()
        };
        let err = IngestSource::try_from(request).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingParameter);
        assert!(err.to_string().contains("FilePath"));
    }

    #[test]
    fn test_sample_without_name_is_missing_parameter() {
        let request = RenderRequest {
            source: Some("sample".to_string()),
            ..Default::default()
        };
        let err = IngestSource::try_from(request).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingParameter);
    }

    #[test]
    fn test_upload_over_json_is_missing_parameter() {
        let request = RenderRequest {
            source: Some("upload".to_string()),
            ..Default::default()
        };
        let err = IngestSource::try_from(request).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingParameter);
    }

    #[test]
    fn test_unknown_source_falls_back_to_inline() {
        let request = RenderRequest {
            source: Some("ftp".to_string()),
            content: Some("<p>x</p>".to_string()),
            file_path: Some("/etc/hosts".to_string()),
            ..Default::default()
        };
        let source = IngestSource::try_from(request).unwrap();
        assert!(matches!(
            source,
            IngestSource::Inline { content: Some(ref c) } if c == "<p>x</p>"
        ));
    }

    #[test]
    fn test_request_deserializes_camel_case() {
        let request: RenderRequest =
            serde_json::from_str(r#"{"source":"file","filePath":"/x.html"}"#).unwrap();
        assert_eq!(request.file_path.as_deref(), Some("/x.html"));

        let request: RenderRequest =
            serde_json::from_str(r#"{"source":"sample","sampleName":"demo.html"}"#).unwrap();
        assert_eq!(request.sample_name.as_deref(), Some("demo.html"));
    }
}
