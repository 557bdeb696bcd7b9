use std::sync::Arc;

pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// A file handed over by the presentation layer's file picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentFile {
    pub name: String,
    /// Declared MIME type; only `application/pdf` is accepted.
    pub content_type: String,
    pub bytes: Arc<[u8]>,
}

impl DocumentFile {
    pub fn new(name: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            bytes: bytes.into(),
        }
    }

    pub fn is_pdf(&self) -> bool {
        let essence = self
            .content_type
            .split(';')
            .next()
            .unwrap_or(&self.content_type)
            .trim();
        essence.eq_ignore_ascii_case(PDF_CONTENT_TYPE)
    }
}

/// The résumé currently held by the scoring orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedDocument {
    pub name: String,
    pub bytes: Arc<[u8]>,
}

impl SelectedDocument {
    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringRequest {
    pub document: Arc<[u8]>,
    pub job_description: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoringResult {
    /// Compatibility score, conventionally in `0.0..=100.0`.
    pub score: f64,
    pub explanation: Option<String>,
}
