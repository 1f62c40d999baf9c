// Ingest: reads uploaded documents into text and fans them out to the extraction core.
// Extraction is CPU-bound and runs inside tokio::task::spawn_blocking.

pub mod batch;
pub mod handlers;
pub mod provider;

pub use batch::BatchContext;
pub use provider::{DocumentTextProvider, TextProvider};
