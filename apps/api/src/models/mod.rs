pub mod record;

pub use record::{
    Column, ExtractionRecord, FieldCandidate, RecordLayout, SourceDocument, NOT_FOUND,
};
