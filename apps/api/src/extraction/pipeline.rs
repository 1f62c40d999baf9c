use tracing::debug;

use crate::extraction::{
    extract_name_candidate, DesignationExtractor, EmailExtractor, FieldExtractor,
    NationalityExtractor, PhoneExtractor,
};
use crate::models::{ExtractionRecord, SourceDocument};
use crate::resolution::resolve;

/// Extractors for every column except the name, which needs the file name as well.
const FIELD_EXTRACTORS: &[&dyn FieldExtractor] = &[
    &EmailExtractor,
    &PhoneExtractor,
    &NationalityExtractor,
    &DesignationExtractor,
];

/// Runs one full extraction pass over a document.
///
/// Pure and synchronous: callers on an async runtime should wrap it in
/// `spawn_blocking`. Blank text yields a record of `Not Found` values.
pub fn extract_record(doc: &SourceDocument) -> ExtractionRecord {
    let text = doc.raw_text.as_str();
    let mut record = ExtractionRecord::not_found();

    let candidate = extract_name_candidate(text);
    let name = resolve(candidate.as_deref(), &doc.file_name);
    record.name = name.value;

    let mut found = 0usize;
    for extractor in FIELD_EXTRACTORS {
        let value = extractor.extract(text);
        if value.is_found() {
            found += 1;
        }
        *record.value_mut(extractor.column()) = value.into_value();
    }

    debug!(
        file_name = %doc.file_name,
        name_source = ?name.source,
        fields_found = found,
        "document extracted"
    );
    record
}
