//! Proposal-potential and engagement scoring.

use forum_common::util::clamp_score;

use super::tfidf::TfIdf;
use super::vocabulary::PROPOSAL_KEYWORDS;
use crate::types::{Engagement, Post};

// ============================================================================
// Proposal Potential
// ============================================================================

/// TF-IDF weighted match against the governance vocabulary.
#[derive(Debug, Clone)]
pub struct ProposalScorer {
    vocabulary: &'static [&'static str],
}

impl Default for ProposalScorer {
    fn default() -> Self {
        Self::with_vocabulary(PROPOSAL_KEYWORDS)
    }
}

impl ProposalScorer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_vocabulary(vocabulary: &'static [&'static str]) -> Self {
        Self { vocabulary }
    }

    /// Score in [0, 1]: summed keyword TF-IDF over `2 × |vocabulary|`.
    pub fn score(&self, tokens: &[String]) -> f64 {
        if self.vocabulary.is_empty() {
            return 0.0;
        }

        let mut index = TfIdf::new();
        let doc = index.add_document(tokens);
        let total = index.tfidf_sum(self.vocabulary.iter().copied(), doc);

        clamp_score(total / (self.vocabulary.len() as f64 * 2.0), 0.0, 1.0)
    }
}

// ============================================================================
// Participants
// ============================================================================

/// Source of the unique-participant count for a post.
///
/// Posts arrive without per-participant data, so the default implementation
/// is a lower bound. A collaborator with reply/reaction authorship can
/// provide a richer counter.
pub trait ParticipantCounter: Send + Sync {
    fn unique_participants(&self, post: &Post) -> u64;
}

/// Counts only the post author.
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthorOnlyParticipants;

impl ParticipantCounter for AuthorOnlyParticipants {
    fn unique_participants(&self, _post: &Post) -> u64 {
        1
    }
}

// ============================================================================
// Engagement
// ============================================================================

/// Weight of one reply.
const REPLY_WEIGHT: f64 = 2.0;
/// Views per engagement point.
const VIEWS_PER_POINT: f64 = 100.0;
/// Weight of one reaction.
const REACTION_WEIGHT: f64 = 1.5;
/// Raw engagement that saturates the score at 1.0.
const ENGAGEMENT_SCALE: f64 = 1000.0;

/// Weighted reply/view/reaction engagement.
#[derive(Debug, Clone, Copy, Default)]
pub struct EngagementScorer;

impl EngagementScorer {
    pub fn new() -> Self {
        Self
    }

    /// Engagement score in [0, 1].
    pub fn score(&self, post: &Post) -> f64 {
        let raw = post.reply_count() as f64 * REPLY_WEIGHT
            + post.view_count() as f64 / VIEWS_PER_POINT
            + post.reaction_total() as f64 * REACTION_WEIGHT;

        clamp_score(raw / ENGAGEMENT_SCALE, 0.0, 1.0)
    }

    /// The post itself, every reply, and every reaction.
    pub fn total_interactions(&self, post: &Post) -> u64 {
        1u64.saturating_add(post.reply_count())
            .saturating_add(post.reaction_total())
    }

    /// Full engagement figures for a post.
    pub fn measure(&self, post: &Post, participants: &dyn ParticipantCounter) -> Engagement {
        let unique_participants = participants.unique_participants(post);
        let total_interactions = self.total_interactions(post);
        let participation_rate = if total_interactions > 0 {
            unique_participants as f64 / total_interactions as f64
        } else {
            0.0
        };

        Engagement {
            score: self.score(post),
            participation_rate,
            unique_participants,
            total_interactions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Tokenizer;
    use crate::types::{Platform, Reaction};
    use chrono::Utc;

    fn post(replies: Option<u64>, views: Option<u64>, reactions: Option<Vec<Reaction>>) -> Post {
        Post {
            id: "p".into(),
            title: None,
            content: "content".into(),
            author: "alice".into(),
            timestamp: Utc::now(),
            url: "https://forum.example/p".into(),
            platform: Platform::Commonwealth,
            replies,
            views,
            reactions,
        }
    }

    #[test]
    fn test_proposal_score_counts_distinct_keywords() {
        let scorer = ProposalScorer::new();
        let tokens = Tokenizer::new().tokenize("treasury grant budget");
        let idf = 1.0 + 0.5f64.ln();
        let expected = 3.0 * idf / (PROPOSAL_KEYWORDS.len() as f64 * 2.0);
        assert!((scorer.score(&tokens) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_proposal_score_no_keywords() {
        let tokens = Tokenizer::new().tokenize("hello there friends");
        assert_eq!(ProposalScorer::new().score(&tokens), 0.0);
        assert_eq!(ProposalScorer::new().score(&[]), 0.0);
    }

    #[test]
    fn test_proposal_score_is_clamped() {
        let text = "vote ".repeat(5000);
        let tokens = Tokenizer::new().tokenize(&text);
        assert_eq!(ProposalScorer::new().score(&tokens), 1.0);
    }

    #[test]
    fn test_engagement_zero_post() {
        let p = post(None, None, None);
        let engagement = EngagementScorer::new().measure(&p, &AuthorOnlyParticipants);
        assert_eq!(engagement.score, 0.0);
        assert_eq!(engagement.total_interactions, 1);
        assert_eq!(engagement.unique_participants, 1);
        assert_eq!(engagement.participation_rate, 1.0);
    }

    #[test]
    fn test_engagement_weights() {
        let p = post(
            Some(10),
            Some(5000),
            Some(vec![Reaction { kind: "heart".into(), count: 20 }]),
        );
        // 10*2 + 5000/100 + 20*1.5 = 100 -> 0.1
        let scorer = EngagementScorer::new();
        assert!((scorer.score(&p) - 0.1).abs() < 1e-12);
        assert_eq!(scorer.total_interactions(&p), 31);

        let engagement = scorer.measure(&p, &AuthorOnlyParticipants);
        assert!((engagement.participation_rate - 1.0 / 31.0).abs() < 1e-12);
    }

    #[test]
    fn test_engagement_saturates() {
        let p = post(Some(1000), None, None);
        assert_eq!(EngagementScorer::new().score(&p), 1.0);
    }

    #[test]
    fn test_custom_participant_counter() {
        struct Fixed(u64);
        impl ParticipantCounter for Fixed {
            fn unique_participants(&self, _post: &Post) -> u64 {
                self.0
            }
        }

        let p = post(Some(3), None, None);
        let engagement = EngagementScorer::new().measure(&p, &Fixed(2));
        assert_eq!(engagement.unique_participants, 2);
        assert!((engagement.participation_rate - 0.5).abs() < 1e-12);
    }
}
