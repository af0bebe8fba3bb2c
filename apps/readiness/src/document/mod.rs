#![allow(dead_code)]

//! Resume document loading and plain-text extraction.

use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use thiserror::Error;
use tracing::{debug, warn};

const PDF_MAGIC: &[u8] = b"%PDF-";

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{name}' is not a PDF document")]
    NotPdf { name: String },

    #[error("failed to parse '{name}': {message}")]
    Parse { name: String, message: String },
}

/// An uploaded document held in memory.
#[derive(Debug, Clone)]
pub struct Document {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl Document {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    pub async fn from_path(path: &Path) -> Result<Self, ExtractionError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| ExtractionError::Read {
                path: path.display().to_string(),
                source,
            })?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self { name, bytes })
    }
}

/// Turns a document into per-page text. Implemented by `PdfExtractor` in
/// production and by fakes in tests.
pub trait DocumentExtractor: Send + Sync {
    fn extract_pages(&self, document: &Document) -> Result<Vec<String>, ExtractionError>;

    /// All pages concatenated in page order.
    fn extract_text(&self, document: &Document) -> Result<String, ExtractionError> {
        let pages = self.extract_pages(document)?;
        let empty = pages.iter().filter(|p| p.is_empty()).count();
        if empty > 0 {
            warn!(
                "{} of {} pages in '{}' yielded no text",
                empty,
                pages.len(),
                document.name
            );
        }
        Ok(concatenate_pages(pages))
    }
}

/// Joins page texts in order with no separator. Empty pages contribute nothing.
pub fn concatenate_pages<I, S>(pages: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    pages.into_iter().fold(String::new(), |mut acc, page| {
        acc.push_str(page.as_ref());
        acc
    })
}

/// PDF text extraction backed by `pdf-extract`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfExtractor;

impl DocumentExtractor for PdfExtractor {
    fn extract_pages(&self, document: &Document) -> Result<Vec<String>, ExtractionError> {
        if !document.bytes.starts_with(PDF_MAGIC) {
            return Err(ExtractionError::NotPdf {
                name: document.name.clone(),
            });
        }

        // pdf-extract panics on some malformed inputs instead of returning an error.
        // The panic is contained here, but the default panic hook still prints its
        // message to stderr before the `Parse` error is returned.
        let bytes = document.bytes.as_slice();
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            pdf_extract::extract_text_from_mem_by_pages(bytes)
        }));

        let pages = match outcome {
            Ok(Ok(pages)) => pages,
            Ok(Err(e)) => {
                return Err(ExtractionError::Parse {
                    name: document.name.clone(),
                    message: e.to_string(),
                })
            }
            Err(_) => {
                return Err(ExtractionError::Parse {
                    name: document.name.clone(),
                    message: "PDF parser aborted on malformed content".to_string(),
                })
            }
        };

        debug!("Extracted {} pages from '{}'", pages.len(), document.name);
        Ok(pages)
    }
}
