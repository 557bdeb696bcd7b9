use std::fs;
use std::io;
use std::path::Path;

use jobspark_core::{DocumentFile, PDF_CONTENT_TYPE};
use thiserror::Error;

const PDF_MAGIC: &[u8] = b"%PDF-";
const UNKNOWN_CONTENT_TYPE: &str = "application/octet-stream";

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("cannot read {path}: {source}")]
    Read { path: String, source: io::Error },
    #[error("{path} is empty")]
    Empty { path: String },
}

/// Reads a résumé from disk the way a browser file picker would hand it over:
/// name, declared content type and raw bytes.
pub fn load_document(path: &Path) -> Result<DocumentFile, DocumentError> {
    let display = path.display().to_string();
    let bytes = fs::read(path).map_err(|source| DocumentError::Read {
        path: display.clone(),
        source,
    })?;
    if bytes.is_empty() {
        return Err(DocumentError::Empty { path: display });
    }

    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or(display);
    let content_type = sniff_content_type(path, &bytes);
    Ok(DocumentFile::new(name, content_type, bytes))
}

/// `application/pdf` for a `%PDF-` header or a `.pdf` extension.
pub fn sniff_content_type(path: &Path, bytes: &[u8]) -> &'static str {
    let has_pdf_extension = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
    if bytes.starts_with(PDF_MAGIC) || has_pdf_extension {
        PDF_CONTENT_TYPE
    } else {
        UNKNOWN_CONTENT_TYPE
    }
}
