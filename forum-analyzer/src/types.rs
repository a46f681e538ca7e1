//! Core data types: canonical posts and per-post discussion analyses.

use chrono::{DateTime, Utc};
use forum_common::{Error, Result};
use serde::{Deserialize, Serialize};

// ============================================================================
// Platform
// ============================================================================

/// Source platform of a post.
///
/// Fetch clients map their platform-specific shapes onto [`Post`]; unknown
/// platforms survive as [`Platform::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Platform {
    Discourse,
    Discord,
    Commonwealth,
    TwitterSpaces,
    Other(String),
}

impl Platform {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Discourse => "discourse",
            Self::Discord => "discord",
            Self::Commonwealth => "commonwealth",
            Self::TwitterSpaces => "twitter-spaces",
            Self::Other(name) => name,
        }
    }
}

impl From<String> for Platform {
    fn from(value: String) -> Self {
        match value.to_lowercase().as_str() {
            "discourse" => Self::Discourse,
            "discord" => Self::Discord,
            "commonwealth" => Self::Commonwealth,
            "twitter-spaces" | "twitter_spaces" => Self::TwitterSpaces,
            _ => Self::Other(value),
        }
    }
}

impl From<Platform> for String {
    fn from(value: Platform) -> Self {
        match value {
            Platform::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Post
// ============================================================================

/// A single reaction bucket on a post (e.g. 12 × "heart").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reaction {
    #[serde(default)]
    pub kind: String,
    pub count: u64,
}

/// A community discussion post in canonical shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    /// Plain-text body
    pub content: String,
    pub author: String,
    pub timestamp: DateTime<Utc>,
    pub url: String,
    pub platform: Platform,
    #[serde(default)]
    pub replies: Option<u64>,
    #[serde(default)]
    pub views: Option<u64>,
    #[serde(default)]
    pub reactions: Option<Vec<Reaction>>,
}

impl Post {
    /// Reply count, zero when absent.
    pub fn reply_count(&self) -> u64 {
        self.replies.unwrap_or(0)
    }

    /// View count, zero when absent.
    pub fn view_count(&self) -> u64 {
        self.views.unwrap_or(0)
    }

    /// Sum of all reaction counts, zero when absent.
    pub fn reaction_total(&self) -> u64 {
        self.reactions
            .as_deref()
            .map(|r| r.iter().fold(0u64, |acc, reaction| acc.saturating_add(reaction.count)))
            .unwrap_or(0)
    }

    /// Check the fields every downstream component relies on.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::InvalidInput("post id is empty".into()));
        }
        if self.content.trim().is_empty() {
            return Err(Error::InvalidInput(format!("post {} has empty content", self.id)));
        }
        if self.author.trim().is_empty() {
            return Err(Error::InvalidInput(format!("post {} has no author", self.id)));
        }
        if self.url.trim().is_empty() {
            return Err(Error::InvalidInput(format!("post {} has no source url", self.id)));
        }
        Ok(())
    }
}

// ============================================================================
// Analysis Result
// ============================================================================

/// Sentiment polarity label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Label a normalized score: above 0.1 is positive, below -0.1 negative.
    pub fn from_score(score: f64) -> Self {
        if score > 0.1 {
            Self::Positive
        } else if score < -0.1 {
            Self::Negative
        } else {
            Self::Neutral
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Positive => write!(f, "positive"),
            Self::Negative => write!(f, "negative"),
            Self::Neutral => write!(f, "neutral"),
        }
    }
}

/// Classified kind of governance proposal a discussion points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProposalType {
    Governance,
    Treasury,
    Technical,
    Social,
    Other,
}

impl std::fmt::Display for ProposalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Governance => write!(f, "governance"),
            Self::Treasury => write!(f, "treasury"),
            Self::Technical => write!(f, "technical"),
            Self::Social => write!(f, "social"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// Sentiment of a post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    /// Normalized score in [-1, 1]
    pub score: f64,
    pub label: SentimentLabel,
}

/// Engagement figures of a post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Engagement {
    /// Weighted engagement score in [0, 1]
    pub score: f64,
    /// unique_participants / total_interactions
    pub participation_rate: f64,
    pub unique_participants: u64,
    pub total_interactions: u64,
}

/// How likely a discussion is to warrant a formal proposal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProposalPotential {
    /// Score in [0, 1]
    pub score: f64,
    /// Mean of the proposal score and the engagement score
    pub confidence: f64,
    #[serde(rename = "type")]
    pub proposal_type: ProposalType,
    /// At most three sentences, verbatim
    pub key_points: Vec<String>,
}

/// Agreement among discussion participants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Consensus {
    /// Level in [0, 1]
    pub level: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub majority_opinion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dissenting: Option<String>,
}

/// Complete analysis of one post. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscussionAnalysis {
    pub post: Post,
    pub sentiment: Sentiment,
    pub engagement: Engagement,
    pub proposal_potential: ProposalPotential,
    pub consensus: Consensus,
    pub topics: Vec<String>,
    pub perspectives: Vec<String>,
    pub suggested_solutions: Vec<String>,
    pub stakeholders: Vec<String>,
}

impl DiscussionAnalysis {
    pub fn key_points(&self) -> &[String] {
        &self.proposal_potential.key_points
    }

    pub fn proposal_type(&self) -> ProposalType {
        self.proposal_potential.proposal_type
    }

    /// Whether the caller should request a proposal draft for this discussion.
    pub fn is_proposal_candidate(&self, options: &forum_common::AnalysisOptions) -> bool {
        self.proposal_potential.score > options.proposal_threshold
            && self.engagement.score >= options.min_engagement_threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn post() -> Post {
        Post {
            id: "1".into(),
            title: None,
            content: "Hello".into(),
            author: "alice".into(),
            timestamp: Utc::now(),
            url: "https://forum.example/t/1".into(),
            platform: Platform::Discourse,
            replies: None,
            views: None,
            reactions: None,
        }
    }

    #[test_case(0.1, SentimentLabel::Neutral ; "upper boundary is neutral")]
    #[test_case(-0.1, SentimentLabel::Neutral ; "lower boundary is neutral")]
    #[test_case(0.1000001, SentimentLabel::Positive ; "just above upper")]
    #[test_case(-0.1000001, SentimentLabel::Negative ; "just below lower")]
    #[test_case(0.0, SentimentLabel::Neutral ; "zero")]
    #[test_case(1.0, SentimentLabel::Positive ; "max")]
    #[test_case(-1.0, SentimentLabel::Negative ; "min")]
    fn test_sentiment_label_boundaries(score: f64, expected: SentimentLabel) {
        assert_eq!(SentimentLabel::from_score(score), expected);
    }

    #[test]
    fn test_platform_parsing() {
        assert_eq!(Platform::from("discourse".to_string()), Platform::Discourse);
        assert_eq!(Platform::from("Discord".to_string()), Platform::Discord);
        assert_eq!(Platform::from("twitter_spaces".to_string()), Platform::TwitterSpaces);
        assert_eq!(Platform::from("twitter-spaces".to_string()), Platform::TwitterSpaces);
        assert_eq!(
            Platform::from("snapshot".to_string()),
            Platform::Other("snapshot".into())
        );
    }

    #[test]
    fn test_platform_serde() {
        let json = serde_json::to_string(&Platform::TwitterSpaces).unwrap();
        assert_eq!(json, "\"twitter-spaces\"");
        let parsed: Platform = serde_json::from_str("\"matrix\"").unwrap();
        assert_eq!(parsed, Platform::Other("matrix".into()));
        assert_eq!(parsed.to_string(), "matrix");
    }

    #[test]
    fn test_numeric_fields_default_to_zero() {
        let p = post();
        assert_eq!(p.reply_count(), 0);
        assert_eq!(p.view_count(), 0);
        assert_eq!(p.reaction_total(), 0);
    }

    #[test]
    fn test_reaction_total() {
        let mut p = post();
        p.reactions = Some(vec![
            Reaction { kind: "heart".into(), count: 3 },
            Reaction { kind: "+1".into(), count: 4 },
        ]);
        assert_eq!(p.reaction_total(), 7);
    }

    #[test]
    fn test_post_deserializes_with_missing_optionals() {
        let json = r#"{
            "id": "9",
            "content": "We should vote",
            "author": "bob",
            "timestamp": "2024-03-01T12:00:00Z",
            "url": "https://discord.example/9",
            "platform": "discord"
        }"#;
        let p: Post = serde_json::from_str(json).unwrap();
        assert_eq!(p.platform, Platform::Discord);
        assert!(p.title.is_none());
        assert_eq!(p.reply_count(), 0);
    }

    #[test]
    fn test_validate_rejects_malformed_posts() {
        let mut p = post();
        assert!(p.validate().is_ok());

        p.content = "   \n".into();
        assert!(matches!(p.validate(), Err(Error::InvalidInput(_))));

        let mut p = post();
        p.author = String::new();
        assert!(matches!(p.validate(), Err(Error::InvalidInput(_))));

        let mut p = post();
        p.id = String::new();
        assert!(p.validate().is_err());
    }
}
