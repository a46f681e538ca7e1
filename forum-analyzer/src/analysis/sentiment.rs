//! Lexicon-based sentiment scoring.
//!
//! Each token carries an AFINN-style integer weight in [-5, 5]. The raw
//! document score is the mean weight per token, so it never leaves the
//! lexicon bounds, and is then mapped affinely onto [-1, 1].

use std::collections::HashMap;

use forum_common::util::clamp_score;

use crate::types::{Sentiment, SentimentLabel};

/// Lower bound of a lexicon weight.
pub const LEXICON_MIN: f64 = -5.0;
/// Upper bound of a lexicon weight.
pub const LEXICON_MAX: f64 = 5.0;

/// Default polarity lexicon.
pub const DEFAULT_LEXICON: &[(&str, i8)] = &[
    ("abandon", -2), ("abuse", -3), ("accept", 1), ("accepted", 1), ("agree", 1),
    ("agreed", 1), ("agreement", 1), ("amazing", 4), ("anger", -3), ("angry", -3),
    ("annoying", -2), ("appreciate", 2), ("approve", 2), ("approved", 2), ("awesome", 4),
    ("bad", -3), ("ban", -2), ("benefit", 2), ("benefits", 2), ("best", 3),
    ("better", 2), ("blame", -2), ("block", -1), ("blocked", -2), ("boring", -3),
    ("broken", -1), ("care", 2), ("chaos", -2), ("clear", 1), ("collapse", -2),
    ("concern", -1), ("concerned", -2), ("concerns", -1), ("confident", 2), ("confused", -2),
    ("confusing", -2), ("confusion", -2), ("cool", 1), ("crisis", -3), ("critical", -2),
    ("damage", -3), ("danger", -2), ("dangerous", -2), ("delay", -1), ("delayed", -1),
    ("disagree", -2), ("disappointed", -2), ("disaster", -2), ("effective", 2), ("efficient", 2),
    ("encourage", 2), ("excellent", 3), ("excited", 3), ("exciting", 3), ("fail", -2),
    ("failed", -2), ("failure", -2), ("fair", 2), ("fantastic", 4), ("fear", -2),
    ("fix", 1), ("fixed", 1), ("fraud", -4), ("free", 1), ("fun", 4),
    ("good", 3), ("grateful", 3), ("great", 3), ("growth", 2), ("happy", 3),
    ("harm", -2), ("hate", -3), ("help", 2), ("helpful", 2), ("hope", 2),
    ("hopeful", 2), ("improve", 2), ("improved", 2), ("improvement", 2), ("innovative", 2),
    ("interesting", 2), ("issue", -1), ("issues", -1), ("kill", -3), ("like", 2),
    ("loss", -3), ("losses", -3), ("love", 3), ("mess", -2), ("mistake", -2),
    ("nice", 3), ("oppose", -2), ("opportunity", 2), ("outstanding", 5), ("pain", -2),
    ("panic", -3), ("perfect", 3), ("pleased", 3), ("positive", 2), ("problem", -2),
    ("problems", -2), ("progress", 2), ("promising", 2), ("protect", 1), ("reject", -1),
    ("rejected", -1), ("risk", -2), ("risks", -2), ("risky", -2), ("sad", -2),
    ("safe", 1), ("scam", -2), ("secure", 2), ("stable", 2), ("strong", 2),
    ("stuck", -2), ("success", 2), ("successful", 3), ("support", 2), ("supported", 2),
    ("terrible", -3), ("thank", 2), ("thanks", 2), ("threat", -2), ("trust", 1),
    ("unclear", -1), ("unfair", -2), ("urgent", -1), ("useful", 2), ("useless", -2),
    ("valuable", 2), ("waste", -1), ("wasted", -2), ("welcome", 2), ("win", 4),
    ("worried", -3), ("worry", -3), ("worse", -3), ("worst", -3), ("wrong", -2),
];

/// Tokens that flip the polarity of the next scored token.
pub const NEGATIONS: &[&str] = &[
    "not", "no", "never", "neither", "nor", "none", "nobody", "nothing", "cannot", "without",
    // the trailing half of "don't", "isn't", "won't" after tokenization
    "t",
];

/// Lexicon sentiment scorer.
#[derive(Debug, Clone)]
pub struct SentimentScorer {
    lexicon: HashMap<String, i8>,
}

impl Default for SentimentScorer {
    fn default() -> Self {
        Self::with_lexicon(DEFAULT_LEXICON.iter().copied())
    }
}

impl SentimentScorer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a scorer from a custom lexicon. Weights are clamped to [-5, 5].
    pub fn with_lexicon<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, i8)>,
    {
        let lexicon = entries
            .into_iter()
            .map(|(word, weight)| (word.to_lowercase(), weight.clamp(-5, 5)))
            .collect();
        Self { lexicon }
    }

    /// Sum of token weights, with negation applied to the next scored token.
    pub fn polarity(&self, tokens: &[String]) -> f64 {
        let mut total = 0.0;
        let mut negate = false;

        for token in tokens {
            if NEGATIONS.contains(&token.as_str()) {
                negate = true;
                continue;
            }
            if let Some(&weight) = self.lexicon.get(token) {
                let weight = f64::from(weight);
                total += if negate { -weight } else { weight };
                negate = false;
            }
        }

        total
    }

    /// Mean weight per token, within [-5, 5]. Zero for no tokens.
    pub fn raw_score(&self, tokens: &[String]) -> f64 {
        if tokens.is_empty() {
            return 0.0;
        }
        self.polarity(tokens) / tokens.len() as f64
    }

    /// Normalized sentiment with its label.
    pub fn score(&self, tokens: &[String]) -> Sentiment {
        let score = normalize(self.raw_score(tokens), LEXICON_MIN, LEXICON_MAX);
        Sentiment {
            score,
            label: SentimentLabel::from_score(score),
        }
    }
}

/// Map `value` from `[min, max]` onto `[-1, 1]`.
fn normalize(value: f64, min: f64, max: f64) -> f64 {
    if max <= min {
        return 0.0;
    }
    let mid = (min + max) / 2.0;
    let half_range = (max - min) / 2.0;
    clamp_score((value - mid) / half_range, -1.0, 1.0)
}
