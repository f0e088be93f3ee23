//! String helpers shared by the detectors and renderers.

/// Keeps at most `max_chars` characters of `text`.
///
/// Counts `char`s, not bytes, so multi-byte text is never split mid-character.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => text[..byte_index].to_string(),
        None => text.to_string(),
    }
}

/// Replaces control characters (other than newline and tab) with spaces.
///
/// Used before echoing snippets from untrusted input to a terminal.
pub fn sanitize_for_display(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_control() && c != '\n' && c != '\t' {
                ' '
            } else {
                c
            }
        })
        .collect()
}
