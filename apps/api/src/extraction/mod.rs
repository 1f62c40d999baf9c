// Field extraction: one stateless extractor per output column.
// Regexes are compiled once into LazyLock statics and shared across threads.

pub mod designation;
pub mod email;
pub mod name;
pub mod nationality;
pub mod phone;
pub mod pipeline;
pub mod tables;

use crate::models::{Column, FieldCandidate};

pub use designation::DesignationExtractor;
pub use email::EmailExtractor;
pub use name::extract_name_candidate;
pub use nationality::NationalityExtractor;
pub use phone::PhoneExtractor;
pub use pipeline::extract_record;

/// Common shape of every single-field extractor.
///
/// Implementations hold no per-document state, so one instance can serve
/// any number of documents concurrently.
pub trait FieldExtractor: Send + Sync {
    /// Output column this extractor fills.
    fn column(&self) -> Column;

    /// Scans `text` and returns a value or [`FieldCandidate::NotFound`]. Never fails.
    fn extract(&self, text: &str) -> FieldCandidate;
}

/// First character upper-cased, the rest lower-cased.
pub(crate) fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Capitalizes every whitespace-separated word.
pub(crate) fn title_case(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}
