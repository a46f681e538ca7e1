//! Proposal-type classification by keyword-bucket voting.

use super::vocabulary::TYPE_BUCKETS;
use crate::types::ProposalType;

/// Classifies a token stream into a [`ProposalType`].
///
/// Each bucket counts exact token matches. The strictly highest count wins;
/// ties go to the bucket declared first; all-zero is [`ProposalType::Other`].
#[derive(Debug, Clone)]
pub struct ProposalClassifier {
    buckets: &'static [(ProposalType, &'static [&'static str])],
}

impl Default for ProposalClassifier {
    fn default() -> Self {
        Self {
            buckets: TYPE_BUCKETS,
        }
    }
}

impl ProposalClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count of matching tokens per bucket, in declaration order.
    pub fn bucket_counts(&self, tokens: &[String]) -> Vec<(ProposalType, usize)> {
        self.buckets
            .iter()
            .map(|(kind, keywords)| {
                let count = tokens
                    .iter()
                    .filter(|token| keywords.contains(&token.as_str()))
                    .count();
                (*kind, count)
            })
            .collect()
    }

    pub fn classify(&self, tokens: &[String]) -> ProposalType {
        let mut best = (ProposalType::Other, 0);
        for (kind, count) in self.bucket_counts(tokens) {
            if count > best.1 {
                best = (kind, count);
            }
        }
        best.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Tokenizer;

    fn classify(text: &str) -> ProposalType {
        ProposalClassifier::new().classify(&Tokenizer::new().tokenize(text))
    }

    #[test]
    fn test_single_bucket_wins() {
        assert_eq!(classify("the protocol code needs a technical review"), ProposalType::Technical);
        assert_eq!(classify("our community culture matters"), ProposalType::Social);
        assert_eq!(classify("treasury budget for a grant"), ProposalType::Treasury);
    }

    #[test]
    fn test_tie_resolves_in_declaration_order() {
        assert_eq!(classify("vote on the treasury"), ProposalType::Governance);
        assert_eq!(classify("grant for community"), ProposalType::Treasury);
        assert_eq!(classify("code culture"), ProposalType::Technical);
    }

    #[test]
    fn test_strictly_highest_wins() {
        assert_eq!(classify("vote treasury budget"), ProposalType::Treasury);
    }

    #[test]
    fn test_no_hits_is_other() {
        assert_eq!(classify("nice weather today"), ProposalType::Other);
        assert_eq!(classify(""), ProposalType::Other);
    }

    #[test]
    fn test_plain_word_matching_only() {
        // "funding" and "votes" are not bucket keywords
        assert_eq!(classify("funding votes"), ProposalType::Other);
    }
}
