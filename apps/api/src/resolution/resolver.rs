use tracing::debug;

use crate::models::NOT_FOUND;
use crate::resolution::filename::{clean_file_label, strip_extension};
use crate::resolution::similarity::similarity_ratio;

/// Above this ratio the first line and the file name are taken to agree.
const SIMILARITY_THRESHOLD: f64 = 0.5;

/// Which signal produced the final name. Logged for traceability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameSource {
    Missing,
    FileLabel,
    ExtractedLine,
}

/// Final name decision for one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedName {
    pub value: String,
    pub source: NameSource,
}

impl ResolvedName {
    fn missing() -> Self {
        Self {
            value: NOT_FOUND.to_string(),
            source: NameSource::Missing,
        }
    }

    fn label(label: &str) -> Self {
        Self {
            value: label.to_string(),
            source: NameSource::FileLabel,
        }
    }

    fn extracted(name: &str) -> Self {
        Self {
            value: name.to_string(),
            source: NameSource::ExtractedLine,
        }
    }
}

/// Reconciles the document's first line with its file name.
///
/// Rules, first match wins:
/// 1. Blank document → `Not Found`.
/// 2. First line contains a digit → cleaned file label, if there is one.
/// 3. Lowercased similarity with the extension-less file name above 0.5 → first line.
/// 4. Either string contains the other (ignoring case) → first line.
/// 5. Cleaned label appears inside the lowercased first line → cleaned label.
/// 6. Otherwise → first line.
pub fn resolve(extracted_name: Option<&str>, file_name: &str) -> ResolvedName {
    let extracted = match extracted_name.map(str::trim) {
        Some(name) if !name.is_empty() => name,
        _ => return ResolvedName::missing(),
    };

    let label = clean_file_label(file_name);

    if extracted.chars().any(char::is_numeric) {
        return match label.as_deref() {
            Some(label) => ResolvedName::label(label),
            None => ResolvedName::extracted(extracted),
        };
    }

    let extracted_lower = extracted.to_lowercase();
    let base_lower = strip_extension(file_name).to_lowercase();

    let ratio = similarity_ratio(&extracted_lower, &base_lower);
    debug!(ratio, "name/file name similarity");
    if ratio > SIMILARITY_THRESHOLD {
        return ResolvedName::extracted(extracted);
    }

    if extracted_lower.contains(&base_lower) || base_lower.contains(&extracted_lower) {
        return ResolvedName::extracted(extracted);
    }

    if let Some(label) = label.as_deref() {
        if extracted_lower.contains(&label.to_lowercase()) {
            return ResolvedName::label(label);
        }
    }

    ResolvedName::extracted(extracted)
}
