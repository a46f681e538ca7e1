//! Word tokenization and sentence splitting.

/// Lower-casing word tokenizer.
///
/// Splits on every run of characters that are neither alphanumeric nor `_`,
/// so `"Don't vote!"` becomes `["don", "t", "vote"]`. Stateless; one instance
/// can be shared across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer;

impl Tokenizer {
    pub fn new() -> Self {
        Self
    }

    /// Tokenize `text` into lower-cased words.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.to_lowercase()
            .split(|c: char| !(c.is_alphanumeric() || c == '_'))
            .filter(|word| !word.is_empty())
            .map(String::from)
            .collect()
    }

    /// Split `text` into trimmed sentences on runs of `.`, `!` and `?`.
    ///
    /// Empty and whitespace-only fragments are dropped. The returned slices
    /// keep the original casing.
    pub fn sentences<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.split(&['.', '!', '?'][..])
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }
}
