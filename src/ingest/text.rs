// Byte → text decoding shared by the file, sample and upload pathways

use encoding_rs::Encoding;
use std::path::Path;

use crate::errors::IngestError;

/// Decode bytes as text. A leading UTF-8, UTF-16LE or UTF-16BE BOM picks the
/// encoding and is dropped; without one the bytes are read as UTF-8. Invalid
/// sequences become U+FFFD instead of failing the whole submission.
pub fn decode_text(bytes: &[u8]) -> String {
    match Encoding::for_bom(bytes) {
        Some((encoding, bom_len)) => {
            let (text, _had_errors) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
            text.into_owned()
        }
        None => String::from_utf8_lossy(bytes).into_owned(),
    }
}

/// True when `name` ends in `.html`, ignoring case.
pub fn has_html_extension(name: &str) -> bool {
    name.to_ascii_lowercase().ends_with(".html")
}

/// Read a whole file as text.
///
/// A path that does not name an existing regular file is `NotFound`; any
/// other failure is `IoFailure`.
pub async fn read_text_file(path: &Path) -> Result<String, IngestError> {
    match tokio::fs::metadata(path).await {
        Ok(meta) if meta.is_file() => {}
        Ok(_) => return Err(IngestError::file_not_found(path)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(IngestError::file_not_found(path))
        }
        Err(e) => {
            return Err(IngestError::io(
                format!("Failed to inspect {}", path.display()),
                e,
            ))
        }
    }

    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| IngestError::io(format!("Failed to read {}", path.display()), e))?;
    Ok(decode_text(&bytes))
}
