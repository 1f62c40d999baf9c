use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use crate::extraction::tables::JOB_KEYWORDS;
use crate::extraction::{title_case, FieldExtractor};
use crate::models::{Column, FieldCandidate};

/// Single alternation over every keyword, longest first so that "Software Engineer"
/// is preferred over "Engineer" when both start at the same position.
static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    let mut keywords: Vec<&str> = JOB_KEYWORDS.to_vec();
    keywords.sort_by_key(|k| std::cmp::Reverse(k.chars().count()));
    let alternation = keywords
        .iter()
        .map(|k| regex::escape(k))
        .collect::<Vec<_>>()
        .join("|");
    RegexBuilder::new(&format!(r"\b(?:{alternation})\b"))
        .case_insensitive(true)
        .build()
        .expect("valid job title regex")
});

/// Every distinct job title in the text, title-cased, in order of first occurrence.
pub struct DesignationExtractor;

impl FieldExtractor for DesignationExtractor {
    fn column(&self) -> Column {
        Column::Designation
    }

    fn extract(&self, text: &str) -> FieldCandidate {
        let mut seen: Vec<String> = Vec::new();
        let mut titles: Vec<String> = Vec::new();

        for m in TITLE_RE.find_iter(text) {
            let key = m.as_str().to_lowercase();
            if !seen.contains(&key) {
                seen.push(key);
                titles.push(title_case(m.as_str()));
            }
        }

        if titles.is_empty() {
            FieldCandidate::NotFound
        } else {
            FieldCandidate::Found(titles.join(", "))
        }
    }
}
