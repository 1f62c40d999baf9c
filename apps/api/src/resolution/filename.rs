use std::sync::LazyLock;

use regex::Regex;

use crate::extraction::tables::is_noise_word;

/// Whitespace, non-word characters and underscores all separate tokens.
static TOKEN_SPLIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s\W_]+").expect("valid token split regex"));

/// Labels this short carry no identity signal.
const MIN_LABEL_CHARS: usize = 4;

/// Drops the final `.ext`. Leading dots (`.profile`) are not an extension.
pub fn strip_extension(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(idx) if file_name[..idx].chars().any(|c| c != '.') => &file_name[..idx],
        _ => file_name,
    }
}

/// Turns `John_Smith_Resume_2024.pdf` into `John Smith`.
///
/// Returns `None` when nothing meaningful survives (three characters or fewer).
pub fn clean_file_label(file_name: &str) -> Option<String> {
    let base = strip_extension(file_name);
    let label = TOKEN_SPLIT_RE
        .split(base)
        .filter(|token| !token.is_empty())
        .filter(|token| !token.chars().all(char::is_numeric))
        .filter(|token| !is_noise_word(token))
        .collect::<Vec<_>>()
        .join(" ");

    if label.chars().count() < MIN_LABEL_CHARS {
        None
    } else {
        Some(label)
    }
}
