// Response bodies for the JSON endpoints

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorKind, IngestError};
use crate::ingest::Ingested;

/// Result of `/render-content`, `/upload-content` and `/samples-content/:name`.
///
/// Field names follow the browser client: `contentId`, `fileName`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderContentResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<ErrorKind>,
}

impl From<&Ingested> for RenderContentResponse {
    fn from(ingested: &Ingested) -> Self {
        Self {
            success: true,
            content_id: Some(ingested.id.to_string()),
            file_name: ingested.file_name.clone(),
            error: None,
            kind: None,
        }
    }
}

impl From<&IngestError> for RenderContentResponse {
    fn from(err: &IngestError) -> Self {
        Self {
            success: false,
            content_id: None,
            file_name: None,
            error: Some(err.to_string()),
            kind: Some(err.kind()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SamplesResponse {
    pub files: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub entries: usize,
}
