//! Discussion Analysis.
//!
//! Turns one canonical [`Post`] into a [`DiscussionAnalysis`].
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  Post                                                           │
//! │    ↓ Tokenizer (lower-cased words, sentences)                   │
//! │    ├─ ProposalScorer     TF-IDF over governance vocabulary      │
//! │    ├─ SentimentScorer    lexicon polarity → [-1, 1] + label     │
//! │    ├─ EngagementScorer   replies / views / reactions → [0, 1]   │
//! │    ├─ ProposalClassifier keyword-bucket voting                  │
//! │    ├─ KeyPointExtractor  top-3 salient sentences                │
//! │    └─ ConsensusEstimator neutral placeholder                    │
//! │    ↓                                                            │
//! │  DiscussionAnalysis                                             │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every scorer is an explicitly constructed, immutable value owned by the
//! [`DiscussionAnalyzer`]; a single analyzer can be shared across threads.

pub mod classifier;
pub mod consensus;
pub mod key_points;
pub mod scoring;
pub mod sentiment;
pub mod signals;
pub mod tfidf;
pub mod tokenizer;
pub mod vocabulary;

pub use classifier::ProposalClassifier;
pub use consensus::{ConsensusEstimator, NeutralConsensus};
pub use key_points::KeyPointExtractor;
pub use scoring::{AuthorOnlyParticipants, EngagementScorer, ParticipantCounter, ProposalScorer};
pub use sentiment::SentimentScorer;
pub use tfidf::TfIdf;
pub use tokenizer::Tokenizer;

use forum_common::{AnalysisOptions, ResultExt};
use tracing::debug;

use crate::types::{DiscussionAnalysis, Post, ProposalPotential};

/// Composes the per-post scorers into a [`DiscussionAnalysis`].
pub struct DiscussionAnalyzer {
    tokenizer: Tokenizer,
    proposal_scorer: ProposalScorer,
    sentiment_scorer: SentimentScorer,
    engagement_scorer: EngagementScorer,
    classifier: ProposalClassifier,
    key_points: KeyPointExtractor,
    consensus: Box<dyn ConsensusEstimator>,
    participants: Box<dyn ParticipantCounter>,
}

impl Default for DiscussionAnalyzer {
    fn default() -> Self {
        Self {
            tokenizer: Tokenizer::new(),
            proposal_scorer: ProposalScorer::new(),
            sentiment_scorer: SentimentScorer::new(),
            engagement_scorer: EngagementScorer::new(),
            classifier: ProposalClassifier::new(),
            key_points: KeyPointExtractor::new(),
            consensus: Box::new(NeutralConsensus),
            participants: Box::new(AuthorOnlyParticipants),
        }
    }
}

impl DiscussionAnalyzer {
    /// Create an analyzer with the default vocabularies and placeholder estimators.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the sentiment lexicon.
    pub fn with_sentiment_scorer(mut self, scorer: SentimentScorer) -> Self {
        self.sentiment_scorer = scorer;
        self
    }

    /// Replace the placeholder consensus estimator.
    pub fn with_consensus_estimator(mut self, estimator: impl ConsensusEstimator + 'static) -> Self {
        self.consensus = Box::new(estimator);
        self
    }

    /// Replace the author-only participant counter.
    pub fn with_participant_counter(mut self, counter: impl ParticipantCounter + 'static) -> Self {
        self.participants = Box::new(counter);
        self
    }

    /// Analyze a single post.
    ///
    /// Fails with [`forum_common::Error::InvalidInput`] when the post is
    /// malformed; the caller can drop that post and keep going. The options
    /// never change what is computed.
    pub fn analyze(
        &self,
        post: &Post,
        options: &AnalysisOptions,
    ) -> forum_common::Result<DiscussionAnalysis> {
        post.validate().context(format!("analyzing post {}", post.id))?;

        let tokens = self.tokenizer.tokenize(&post.content);
        let sentences = self.tokenizer.sentences(&post.content);

        let proposal_score = self.proposal_scorer.score(&tokens);
        let sentiment = self.sentiment_scorer.score(&tokens);
        let engagement = self
            .engagement_scorer
            .measure(post, self.participants.as_ref());
        let proposal_type = self.classifier.classify(&tokens);
        let key_points = self.key_points.extract(&post.content);
        let consensus = self.consensus.estimate(post);

        let confidence = (proposal_score + engagement.score) / 2.0;

        debug!(
            post_id = %post.id,
            platform = %post.platform,
            tokens = tokens.len(),
            proposal_score,
            sentiment = sentiment.score,
            engagement = engagement.score,
            proposal_type = %proposal_type,
            below_engagement_threshold = engagement.score < options.min_engagement_threshold,
            "Post analyzed"
        );

        Ok(DiscussionAnalysis {
            sentiment,
            engagement,
            proposal_potential: ProposalPotential {
                score: proposal_score,
                confidence,
                proposal_type,
                key_points,
            },
            consensus,
            topics: signals::topics(&tokens),
            perspectives: signals::perspectives(&sentences, &self.tokenizer, &self.sentiment_scorer),
            suggested_solutions: signals::suggested_solutions(&sentences, &self.tokenizer),
            stakeholders: signals::stakeholders(&post.author, &tokens),
            post: post.clone(),
        })
    }
}
