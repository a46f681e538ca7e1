//! Key-point extraction: the most keyword-salient sentences of a post.

use std::cmp::Ordering;

use super::tfidf::TfIdf;
use super::tokenizer::Tokenizer;
use super::vocabulary::salience_keywords;

/// Default number of key points returned.
pub const DEFAULT_MAX_KEY_POINTS: usize = 3;

/// Ranks sentences by summed TF-IDF of the salience vocabulary.
#[derive(Debug, Clone)]
pub struct KeyPointExtractor {
    tokenizer: Tokenizer,
    max_points: usize,
}

impl Default for KeyPointExtractor {
    fn default() -> Self {
        Self {
            tokenizer: Tokenizer::new(),
            max_points: DEFAULT_MAX_KEY_POINTS,
        }
    }
}

impl KeyPointExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_points(mut self, max_points: usize) -> Self {
        self.max_points = max_points;
        self
    }

    /// Return the top sentences verbatim, best first, ties in original order.
    pub fn extract(&self, content: &str) -> Vec<String> {
        let sentences = self.tokenizer.sentences(content);

        let mut index = TfIdf::new();
        for sentence in &sentences {
            index.add_document(self.tokenizer.tokenize(sentence));
        }

        let mut scored: Vec<(usize, f64)> = (0..sentences.len())
            .map(|doc| (doc, index.tfidf_sum(salience_keywords(), doc)))
            .collect();

        // stable: equal scores keep sentence order
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

        scored
            .into_iter()
            .take(self.max_points)
            .map(|(doc, _)| sentences[doc].to_string())
            .collect()
    }
}
