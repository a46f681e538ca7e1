//! Term frequency–inverse document frequency index.
//!
//! - `tf(t, d)` is the raw count of `t` in document `d`
//! - `idf(t) = 1 + ln(N / (1 + df(t)))` over `N` documents
//! - `tfidf(t, d) = tf(t, d) * idf(t)`
//!
//! With a single document, a present term weighs `count * (1 + ln 0.5)`,
//! so repeating a keyword grows the score far slower than adding new ones.

use std::collections::HashMap;

/// In-memory TF-IDF index over tokenized documents.
#[derive(Debug, Clone, Default)]
pub struct TfIdf {
    documents: Vec<HashMap<String, usize>>,
    /// Number of documents containing each term.
    document_frequency: HashMap<String, usize>,
}

impl TfIdf {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document and return its index.
    pub fn add_document<I, S>(&mut self, tokens: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut counts = HashMap::new();
        for token in tokens {
            *counts.entry(token.as_ref().to_string()).or_insert(0) += 1;
        }
        for term in counts.keys() {
            *self.document_frequency.entry(term.clone()).or_insert(0) += 1;
        }
        self.documents.push(counts);
        self.documents.len() - 1
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Raw count of `term` in document `doc` (0 for unknown documents).
    pub fn tf(&self, term: &str, doc: usize) -> f64 {
        self.documents
            .get(doc)
            .and_then(|counts| counts.get(term))
            .map_or(0.0, |&count| count as f64)
    }

    /// Inverse document frequency of `term`.
    pub fn idf(&self, term: &str) -> f64 {
        if self.documents.is_empty() {
            return 0.0;
        }
        let df = self.document_frequency(term);
        1.0 + (self.documents.len() as f64 / (1.0 + df as f64)).ln()
    }

    /// Number of documents containing `term`.
    pub fn document_frequency(&self, term: &str) -> usize {
        self.document_frequency.get(term).copied().unwrap_or(0)
    }

    pub fn tfidf(&self, term: &str, doc: usize) -> f64 {
        let tf = self.tf(term, doc);
        if tf == 0.0 {
            return 0.0;
        }
        tf * self.idf(term)
    }

    /// Sum of `tfidf` over `terms` for one document.
    pub fn tfidf_sum<'t, I>(&self, terms: I, doc: usize) -> f64
    where
        I: IntoIterator<Item = &'t str>,
    {
        terms.into_iter().map(|term| self.tfidf(term, doc)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_single_document_weights() {
        let mut index = TfIdf::new();
        index.add_document(["vote", "vote", "budget"]);

        let idf = 1.0 + 0.5f64.ln();
        assert!((index.idf("vote") - idf).abs() < EPS);
        assert!((index.tfidf("vote", 0) - 2.0 * idf).abs() < EPS);
        assert!((index.tfidf("budget", 0) - idf).abs() < EPS);
        assert_eq!(index.tfidf("grant", 0), 0.0);
    }

    #[test]
    fn test_multi_document_idf() {
        let mut index = TfIdf::new();
        index.add_document(["treasury", "grant"]);
        index.add_document(["treasury"]);
        index.add_document(["hello"]);

        // df(treasury) = 2, N = 3
        assert!((index.idf("treasury") - (1.0 + (3.0f64 / 3.0).ln())).abs() < EPS);
        // df(grant) = 1
        assert!((index.idf("grant") - (1.0 + (3.0f64 / 2.0).ln())).abs() < EPS);
        assert!(index.tfidf("grant", 0) > index.tfidf("treasury", 0));
    }

    #[test]
    fn test_unknown_document_and_empty_index() {
        let index = TfIdf::new();
        assert!(index.is_empty());
        assert_eq!(index.idf("vote"), 0.0);
        assert_eq!(index.tfidf("vote", 3), 0.0);
    }

    #[test]
    fn test_document_frequency_counts_each_document_once() {
        let mut index = TfIdf::new();
        index.add_document(["vote", "vote", "vote"]);
        index.add_document(["vote", "grant"]);
        index.add_document(Vec::<&str>::new());

        assert_eq!(index.document_frequency("vote"), 2);
        assert_eq!(index.document_frequency("grant"), 1);
        assert_eq!(index.document_frequency("budget"), 0);
        assert!((index.idf("vote") - 1.0).abs() < EPS);
    }

    #[test]
    fn test_tfidf_sum() {
        let mut index = TfIdf::new();
        let doc = index.add_document(["fund", "grant", "noise"]);
        let idf = 1.0 + 0.5f64.ln();
        assert!((index.tfidf_sum(["fund", "grant", "budget"], doc) - 2.0 * idf).abs() < EPS);
    }
}
