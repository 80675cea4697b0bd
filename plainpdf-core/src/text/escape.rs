use std::borrow::Cow;

/// Escapes `text` for use inside a PDF literal string `( ... )`.
///
/// Backslash and both parentheses get a backslash prefix; every other
/// character is left alone. Line breaks are not escaped, so callers pass a
/// single line at a time.
pub fn escape_literal(text: &str) -> Cow<'_, str> {
    if !text.contains(|ch: char| matches!(ch, '\\' | '(' | ')')) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        if matches!(ch, '\\' | '(' | ')') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    Cow::Owned(escaped)
}
