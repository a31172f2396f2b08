/// Canonicalize free text for matching
///
/// Lower-cases the input, replaces every character that is neither a word
/// character nor whitespace with a space, collapses whitespace runs into a
/// single space and trims both ends. Never fails; empty input gives an
/// empty string.
pub fn normalize_text(text: &str) -> String {
    let replaced: String = text
        .to_lowercase()
        .chars()
        .map(|c| if is_word_char(c) || c.is_whitespace() { c } else { ' ' })
        .collect();

    replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Word characters are ASCII letters, ASCII digits and underscore.
///
/// Accented and other non-ASCII letters are not word characters and are
/// replaced like punctuation.
#[inline]
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
