use crate::core::normalize::normalize_text;

/// Tokens that never discriminate between catalog entries: greetings and
/// search-intent words
pub const STOP_WORDS: &[&str] = &[
    "hi", "hello", "hey", "find", "search", "looking", "want", "need", "near", "me", "bot",
];

/// Words that mark a message as a greeting
pub const GREETING_WORDS: &[&str] = &["hi", "hello", "hey", "start", "begin"];

/// Terms must be at least this many characters long
pub const MIN_TERM_LENGTH: usize = 3;

/// Longest message (in tokens) still treated as a greeting
const MAX_GREETING_TOKENS: usize = 3;

#[inline]
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}

/// Extract the search terms of a raw query
///
/// The query is normalized and split on single spaces. Tokens shorter than
/// `MIN_TERM_LENGTH` and stop words are dropped. Extraction order is kept.
/// An empty result means the query has nothing to search for.
pub fn extract_search_terms(query: &str) -> Vec<String> {
    normalize_text(query)
        .split(' ')
        .filter(|word| word.chars().count() >= MIN_TERM_LENGTH && !is_stop_word(word))
        .map(str::to_string)
        .collect()
}

/// Check if a message is a short greeting
///
/// True when the normalized message contains a greeting word and has at
/// most three tokens.
pub fn is_greeting(message: &str) -> bool {
    let normalized = normalize_text(message);
    let words: Vec<&str> = normalized.split(' ').collect();

    words.len() <= MAX_GREETING_TOKENS
        && GREETING_WORDS.iter().any(|greeting| words.contains(greeting))
}
