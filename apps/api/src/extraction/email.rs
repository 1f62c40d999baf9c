use std::sync::LazyLock;

use regex::Regex;

use crate::extraction::FieldExtractor;
use crate::models::{Column, FieldCandidate};

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}").expect("valid email regex")
});

/// First `local@domain.tld` in document order. No ranking, no dedup.
pub struct EmailExtractor;

impl FieldExtractor for EmailExtractor {
    fn column(&self) -> Column {
        Column::Email
    }

    fn extract(&self, text: &str) -> FieldCandidate {
        EMAIL_RE
            .find_iter(text)
            .map(|m| m.as_str())
            .find(|candidate| has_dotted_domain(candidate))
            .map(str::to_string)
            .into()
    }
}

fn has_dotted_domain(candidate: &str) -> bool {
    candidate
        .split_once('@')
        .is_some_and(|(_, domain)| domain.contains('.'))
}
