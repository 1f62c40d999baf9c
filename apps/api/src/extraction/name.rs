/// Line boundaries recognised when splitting document text.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Returns the first line that is non-empty after trimming.
///
/// `None` means the document is blank, which the name resolver treats
/// differently from a line it disagrees with.
pub fn extract_name_candidate(text: &str) -> Option<String> {
    text.split(is_line_break)
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
}
