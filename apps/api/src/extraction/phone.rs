use std::sync::LazyLock;

use regex::Regex;

use crate::extraction::FieldExtractor;
use crate::models::{Column, FieldCandidate};

/// Optional `+`, 1-3 digit country code, then digit groups split by space, dot or hyphen.
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\+?\d{1,3}[-.\s]?\d{1,4}[-.\s]?\d{2,4}[-.\s]?\d{2,4}[-.\s]?\d{2,4}")
        .expect("valid phone regex")
});

/// Longer digit runs are ID numbers, account numbers or concatenated dates.
const MAX_PHONE_DIGITS: usize = 14;

/// First phone-shaped match, returned with the document's own formatting.
pub struct PhoneExtractor;

impl FieldExtractor for PhoneExtractor {
    fn column(&self) -> Column {
        Column::Phone
    }

    fn extract(&self, text: &str) -> FieldCandidate {
        let Some(m) = PHONE_RE.find(text) else {
            return FieldCandidate::NotFound;
        };

        // `\d` is Unicode-aware, so count every numeric char, not only ASCII
        let digits = m.as_str().chars().filter(|c| c.is_numeric()).count();
        if digits > MAX_PHONE_DIGITS {
            tracing::debug!(digits, "phone candidate rejected as too long");
            return FieldCandidate::NotFound;
        }
        FieldCandidate::Found(m.as_str().to_string())
    }
}
