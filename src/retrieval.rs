// Retrieval - serve stored markup back by id

use std::sync::Arc;

use crate::errors::IngestError;
use crate::store::{ContentId, ContentStore};

pub const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";

/// A stored body, ready to be sent as-is.
#[derive(Debug, Clone)]
pub struct StoredContent {
    pub id: ContentId,
    pub body: Arc<str>,
}

impl StoredContent {
    pub fn content_type(&self) -> &'static str {
        HTML_CONTENT_TYPE
    }
}

/// Look up `raw_id`. Strings that are not ids at all are reported exactly
/// like ids that were never issued.
pub fn retrieve(store: &ContentStore, raw_id: &str) -> Result<StoredContent, IngestError> {
    let not_found = || IngestError::NotFound("Content not found".to_string());

    let id: ContentId = raw_id.parse().map_err(|_| not_found())?;
    let body = store.get(&id).ok_or_else(not_found)?;
    Ok(StoredContent { id, body })
}
