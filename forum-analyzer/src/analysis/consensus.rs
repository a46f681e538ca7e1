//! Consensus estimation.

use crate::types::{Consensus, Post};

/// Neutral consensus level reported when nothing better is known.
pub const NEUTRAL_CONSENSUS_LEVEL: f64 = 0.5;

/// Estimates agreement among the participants of a discussion.
///
/// Implementations must return a level in [0, 1]; the two text fields are
/// optional summaries of the majority and dissenting views.
pub trait ConsensusEstimator: Send + Sync {
    fn estimate(&self, post: &Post) -> Consensus;
}

/// Placeholder estimator: always neutral, no majority or dissenting text.
///
/// Posts carry no reply graph, so there is nothing to measure agreement on.
/// Swap in a real estimator through
/// [`DiscussionAnalyzer::with_consensus_estimator`](super::DiscussionAnalyzer::with_consensus_estimator).
#[derive(Debug, Clone, Copy, Default)]
pub struct NeutralConsensus;

impl ConsensusEstimator for NeutralConsensus {
    fn estimate(&self, _post: &Post) -> Consensus {
        Consensus {
            level: NEUTRAL_CONSENSUS_LEVEL,
            majority_opinion: None,
            dissenting: None,
        }
    }
}
