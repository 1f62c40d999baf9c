use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use crate::extraction::tables::NATIONALITY_TABLE;
use crate::extraction::{capitalize, FieldExtractor};
use crate::models::{Column, FieldCandidate};

/// An explicit declaration such as `Nationality: Indian` or `NATIONALITY - indian`.
static DECLARED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bnationality\b\s*[:\-]?\s*(\w+)").expect("valid nationality regex")
});

/// One whole-word, case-insensitive pattern per table alias, in table order.
static COUNTRY_PATTERNS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    NATIONALITY_TABLE
        .iter()
        .map(|&(country, nationality)| {
            let re = RegexBuilder::new(&format!(r"\b{}\b", regex::escape(country)))
                .case_insensitive(true)
                .build()
                .expect("valid country regex");
            (re, nationality)
        })
        .collect()
});

/// Declared nationality first, otherwise every nationality implied by a country mention.
pub struct NationalityExtractor;

impl FieldExtractor for NationalityExtractor {
    fn column(&self) -> Column {
        Column::Nationality
    }

    fn extract(&self, text: &str) -> FieldCandidate {
        if let Some(declared) = declared_nationality(text) {
            return FieldCandidate::Found(declared);
        }

        let mentioned = mentioned_nationalities(text);
        if mentioned.is_empty() {
            FieldCandidate::NotFound
        } else {
            FieldCandidate::Found(mentioned.join(", "))
        }
    }
}

fn declared_nationality(text: &str) -> Option<String> {
    DECLARED_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| capitalize(m.as_str()))
}

/// Distinct labels whose country or alias appears in `text`, in table order.
fn mentioned_nationalities(text: &str) -> Vec<&'static str> {
    let mut found: Vec<&'static str> = Vec::new();
    for (re, nationality) in COUNTRY_PATTERNS.iter() {
        if !found.contains(nationality) && re.is_match(text) {
            found.push(nationality);
        }
    }
    found
}
