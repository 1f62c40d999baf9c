use std::sync::Arc;

use crate::config::Config;
use crate::ingest::{BatchContext, TextProvider};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Reads uploaded documents into plain text. Default: PDF + DOCX.
    pub provider: Arc<dyn TextProvider>,
}

impl AppState {
    pub fn batch_context(&self) -> BatchContext {
        BatchContext {
            provider: Arc::clone(&self.provider),
            max_text_chars: self.config.max_text_chars,
        }
    }
}
