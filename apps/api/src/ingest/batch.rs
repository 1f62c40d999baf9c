//! Batch runner — one extraction pass per document, all documents in parallel.
//!
//! Each document runs on `tokio::task::spawn_blocking` since extraction is CPU-bound.
//! Outcomes are returned in input order.

use std::sync::Arc;

use bytes::Bytes;
use serde::Serialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::extraction::extract_record;
use crate::ingest::provider::TextProvider;
use crate::models::{ExtractionRecord, SourceDocument};

/// One unit of work: either an upload still to be read, or text a caller already holds.
#[derive(Debug, Clone)]
pub enum DocumentInput {
    Upload { file_name: String, bytes: Bytes },
    Text(SourceDocument),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedDocument {
    pub file_name: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentOutcome {
    Extracted(ExtractionRecord),
    Skipped(SkippedDocument),
}

/// Settings shared by every document in a batch.
#[derive(Clone)]
pub struct BatchContext {
    pub provider: Arc<dyn TextProvider>,
    /// Documents with more text than this are skipped to bound regex cost.
    pub max_text_chars: usize,
}

/// Processes a single document synchronously.
pub fn process_document(input: DocumentInput, ctx: &BatchContext) -> DocumentOutcome {
    let doc = match input {
        DocumentInput::Text(doc) => doc,
        DocumentInput::Upload { file_name, bytes } => {
            match ctx.provider.extract_text(&file_name, &bytes) {
                Ok(text) => SourceDocument::new(text, file_name),
                Err(e) => {
                    warn!(file_name = %file_name, "skipping document: {e}");
                    return DocumentOutcome::Skipped(SkippedDocument {
                        file_name,
                        reason: e.to_string(),
                    });
                }
            }
        }
    };

    let chars = doc.raw_text.chars().count();
    if chars > ctx.max_text_chars {
        warn!(file_name = %doc.file_name, chars, "skipping oversized document");
        return DocumentOutcome::Skipped(SkippedDocument {
            reason: format!(
                "Document text has {chars} characters, limit is {}",
                ctx.max_text_chars
            ),
            file_name: doc.file_name,
        });
    }

    DocumentOutcome::Extracted(extract_record(&doc))
}

/// Runs every document concurrently and returns outcomes in input order.
pub async fn run_batch(
    inputs: Vec<DocumentInput>,
    ctx: BatchContext,
) -> Result<Vec<DocumentOutcome>, AppError> {
    let total = inputs.len();
    let handles: Vec<_> = inputs
        .into_iter()
        .map(|input| {
            let ctx = ctx.clone();
            tokio::task::spawn_blocking(move || process_document(input, &ctx))
        })
        .collect();

    let mut outcomes = Vec::with_capacity(total);
    for handle in handles {
        let outcome = handle.await.map_err(|e| {
            AppError::Internal(anyhow::anyhow!("spawn_blocking failed in extraction: {e}"))
        })?;
        outcomes.push(outcome);
    }

    let skipped = outcomes
        .iter()
        .filter(|o| matches!(o, DocumentOutcome::Skipped(_)))
        .count();
    info!(total, skipped, "extraction batch complete");
    Ok(outcomes)
}
