//! Document text provider — turns an uploaded PDF or DOCX into one flat string.
//!
//! A document that cannot be parsed is not an error: it yields an empty string so the
//! extraction pass still runs and reports every field as `Not Found`. Only a file type
//! we have no reader for is rejected.

use std::panic;

use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DocumentError {
    #[error("Unsupported file type: {0}")]
    UnsupportedFormat(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    /// Detects the reader from the file extension, ignoring case.
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let (_, ext) = file_name.rsplit_once('.')?;
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(DocumentKind::Pdf),
            "docx" => Some(DocumentKind::Docx),
            _ => None,
        }
    }
}

/// Source of plain text for the extraction core. Synchronous and CPU-bound.
pub trait TextProvider: Send + Sync {
    fn extract_text(&self, file_name: &str, bytes: &[u8]) -> Result<String, DocumentError>;
}

/// Reads PDFs with `pdf-extract` and DOCX files with `docx-rs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DocumentTextProvider;

impl TextProvider for DocumentTextProvider {
    fn extract_text(&self, file_name: &str, bytes: &[u8]) -> Result<String, DocumentError> {
        let kind = DocumentKind::from_file_name(file_name)
            .ok_or_else(|| DocumentError::UnsupportedFormat(file_name.to_string()))?;

        let text = match kind {
            DocumentKind::Pdf => read_pdf(file_name, bytes),
            DocumentKind::Docx => read_docx(file_name, bytes),
        };
        debug!(file_name, chars = text.chars().count(), "document text extracted");
        Ok(text)
    }
}

fn read_pdf(file_name: &str, bytes: &[u8]) -> String {
    // pdf-extract panics on some malformed inputs instead of returning an error.
    match panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes)) {
        Ok(Ok(text)) => text,
        Ok(Err(e)) => {
            warn!(file_name, "unreadable PDF, treating as empty: {e}");
            String::new()
        }
        Err(_) => {
            warn!(file_name, "PDF reader panicked, treating as empty");
            String::new()
        }
    }
}

fn read_docx(file_name: &str, bytes: &[u8]) -> String {
    let docx = match docx_rs::read_docx(bytes) {
        Ok(docx) => docx,
        Err(e) => {
            warn!(file_name, "unreadable DOCX, treating as empty: {e:?}");
            return String::new();
        }
    };

    docx.document
        .children
        .iter()
        .filter_map(|child| match child {
            docx_rs::DocumentChild::Paragraph(para) => Some(paragraph_text(para)),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Concatenates the text runs of one paragraph; runs split a sentence, not words.
fn paragraph_text(para: &docx_rs::Paragraph) -> String {
    let mut text = String::new();
    for child in &para.children {
        if let docx_rs::ParagraphChild::Run(run) = child {
            for run_child in &run.children {
                match run_child {
                    docx_rs::RunChild::Text(t) => text.push_str(&t.text),
                    docx_rs::RunChild::Tab(_) => text.push('\t'),
                    _ => {}
                }
            }
        }
    }
    text
}
