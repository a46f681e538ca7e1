//! Derived discussion signals: topics, perspectives, suggested solutions,
//! and stakeholders.
//!
//! All four are plain keyword/sentence heuristics over one post. Any of them
//! may be empty.

use super::sentiment::SentimentScorer;
use super::tokenizer::Tokenizer;
use super::vocabulary::{salience_keywords, STAKEHOLDER_TERMS, SUGGESTION_CUES};

/// Maximum sentences kept for perspectives and suggested solutions.
pub const MAX_SIGNAL_SENTENCES: usize = 5;

/// Distinct items of `candidates` in first-occurrence order of `tokens`.
fn first_occurrences<'a>(tokens: &'a [String], candidates: &[&str]) -> Vec<&'a str> {
    let mut seen: Vec<&str> = Vec::new();
    for token in tokens {
        let token = token.as_str();
        if candidates.contains(&token) && !seen.contains(&token) {
            seen.push(token);
        }
    }
    seen
}

/// Salience keywords present in the tokens, in first-occurrence order.
pub fn topics(tokens: &[String]) -> Vec<String> {
    let vocabulary: Vec<&str> = salience_keywords().collect();
    first_occurrences(tokens, &vocabulary)
        .into_iter()
        .map(String::from)
        .collect()
}

/// Sentences that carry an opinion, i.e. non-zero lexicon polarity.
pub fn perspectives(
    sentences: &[&str],
    tokenizer: &Tokenizer,
    sentiment: &SentimentScorer,
) -> Vec<String> {
    sentences
        .iter()
        .filter(|sentence| sentiment.polarity(&tokenizer.tokenize(sentence)) != 0.0)
        .take(MAX_SIGNAL_SENTENCES)
        .map(|sentence| sentence.to_string())
        .collect()
}

fn is_suggestion(tokens: &[String]) -> bool {
    tokens.iter().enumerate().any(|(i, token)| {
        SUGGESTION_CUES.contains(&token.as_str())
            || (matches!(token.as_str(), "need" | "needs")
                && tokens.get(i + 1).is_some_and(|next| next == "to"))
    })
}

/// Sentences that propose a course of action.
pub fn suggested_solutions(sentences: &[&str], tokenizer: &Tokenizer) -> Vec<String> {
    sentences
        .iter()
        .filter(|sentence| is_suggestion(&tokenizer.tokenize(sentence)))
        .take(MAX_SIGNAL_SENTENCES)
        .map(|sentence| sentence.to_string())
        .collect()
}

/// The author, then any stakeholder groups named in the tokens.
pub fn stakeholders(author: &str, tokens: &[String]) -> Vec<String> {
    let mut result = Vec::new();
    let author = author.trim();
    if !author.is_empty() {
        result.push(author.to_string());
    }
    for group in first_occurrences(tokens, STAKEHOLDER_TERMS) {
        if group != author {
            result.push(group.to_string());
        }
    }
    result
}
