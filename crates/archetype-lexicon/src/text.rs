//! Term normalization shared by lexicon validation and the extractor.
//!
//! A lexicon term is only reachable if tokenizing it yields the term itself,
//! so both sides must agree on exactly one tokenizer.

/// Longest phrase, in words, a lexicon term may have.
pub const MAX_TERM_WORDS: usize = 4;

/// Lower-case `text` and split it into word tokens.
///
/// Any character that is not alphanumeric, `-` or `_` separates tokens.
/// Leading and trailing `-`/`_` are trimmed, so `"--fast"` becomes `"fast"`
/// while `"real-time"` stays whole.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '-' || c == '_'))
        .map(|t| t.trim_matches(|c| c == '-' || c == '_'))
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Canonical form of a term: its tokens joined by single spaces.
pub fn normalize_term(term: &str) -> String {
    tokenize(term).join(" ")
}

/// True when `term` is already in canonical form and short enough to be
/// matched as an n-gram.
pub fn is_normalized(term: &str) -> bool {
    let tokens = tokenize(term);
    !tokens.is_empty() && tokens.len() <= MAX_TERM_WORDS && tokens.join(" ") == term
}
