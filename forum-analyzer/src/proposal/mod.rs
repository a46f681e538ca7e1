//! Proposal Drafting.
//!
//! Builds a templated governance [`ProposalDraft`] from one
//! [`DiscussionAnalysis`](crate::types::DiscussionAnalysis), optionally with a
//! temperature-check poll attached.

pub mod generator;
mod templates;

pub use generator::ProposalGenerator;

use chrono::{DateTime, Utc};
use forum_common::util::as_percent;
use serde::{Deserialize, Serialize};

use crate::types::Platform;

/// Answer set of every temperature-check poll.
pub const POLL_OPTIONS: [&str; 4] = [
    "Strongly Support",
    "Support with Minor Changes",
    "Need More Discussion",
    "Do Not Support",
];

/// Poll duration used when the configured value is zero.
pub const DEFAULT_POLL_DURATION_DAYS: u32 = 3;

/// Participation threshold used when the configured value is zero.
pub const DEFAULT_PARTICIPATION_THRESHOLD: f64 = 0.1;

// ============================================================================
// Sections
// ============================================================================

/// Fixed section template. Declaration order is rendering order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionKind {
    Abstract,
    Motivation,
    Specification,
    Conclusion,
}

impl SectionKind {
    pub const ALL: [SectionKind; 4] = [
        Self::Abstract,
        Self::Motivation,
        Self::Specification,
        Self::Conclusion,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Abstract => "Abstract",
            Self::Motivation => "Motivation",
            Self::Specification => "Specification",
            Self::Conclusion => "Conclusion",
        }
    }
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// One generated section of a draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProposalSection {
    #[serde(rename = "title")]
    pub kind: SectionKind,
    pub content: String,
}

// ============================================================================
// Draft
// ============================================================================

/// Lifecycle status of a draft.
///
/// Drafting only ever produces `Draft` or `TemperatureCheck`; later
/// transitions belong to the governance workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProposalStatus {
    Draft,
    TemperatureCheck,
    Proposal,
}

impl std::fmt::Display for ProposalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Draft => write!(f, "draft"),
            Self::TemperatureCheck => write!(f, "temperature_check"),
            Self::Proposal => write!(f, "proposal"),
        }
    }
}

/// Informal pre-vote poll.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureCheckPoll {
    pub title: String,
    pub description: String,
    pub options: Vec<String>,
    pub duration_days: u32,
    /// Minimum participation ratio
    pub threshold: f64,
}

/// Estimated impact per dimension, each in [0, 1] and independent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpactEstimate {
    pub technical: f64,
    pub social: f64,
    pub economic: f64,
}

/// Engagement figures copied from the source analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngagementSnapshot {
    pub participation_rate: f64,
    pub unique_participants: u64,
    pub total_interactions: u64,
}

/// Provenance of a draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftMetadata {
    pub source: String,
    pub platform: Platform,
    pub timestamp: DateTime<Utc>,
    pub author: String,
    pub tags: Vec<String>,
    pub engagement: EngagementSnapshot,
    /// Treasury draft generated with budget estimates required
    pub budget_estimate_required: bool,
}

/// A templated governance proposal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProposalDraft {
    pub title: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub status: ProposalStatus,
    /// Always the four [`SectionKind`]s, in order
    pub sections: Vec<ProposalSection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poll: Option<TemperatureCheckPoll>,
    pub source_discussions: Vec<String>,
    pub tags: Vec<String>,
    pub estimated_impact: ImpactEstimate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<DraftMetadata>,
}

impl ProposalDraft {
    pub fn section(&self, kind: SectionKind) -> Option<&ProposalSection> {
        self.sections.iter().find(|s| s.kind == kind)
    }

    /// Render the draft for a human reader.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        md.push_str(&format!("## {}\n\n", self.title));
        md.push_str(&format!(
            "**Author**: {} | **Status**: {} | **Created**: {}\n\n",
            self.author,
            self.status,
            self.created_at.format("%Y-%m-%d %H:%M")
        ));

        for section in &self.sections {
            md.push_str(&format!("### {}\n{}\n\n", section.kind, section.content));
        }

        if let Some(ref poll) = self.poll {
            md.push_str("### Temperature Check Poll\n");
            md.push_str(&format!("{}\n\n", poll.description));
            md.push_str("Options:\n");
            for option in &poll.options {
                md.push_str(&format!("- {}\n", option));
            }
            md.push_str(&format!(
                "\nDuration: {} days, minimum participation {}%\n\n",
                poll.duration_days,
                as_percent(poll.threshold)
            ));
        }

        md.push_str("Impact Assessment:\n");
        md.push_str(&format!(
            "- Technical Impact: {}%\n",
            as_percent(self.estimated_impact.technical)
        ));
        md.push_str(&format!(
            "- Social Impact: {}%\n",
            as_percent(self.estimated_impact.social)
        ));
        md.push_str(&format!(
            "- Economic Impact: {}%\n\n",
            as_percent(self.estimated_impact.economic)
        ));

        if !self.tags.is_empty() {
            md.push_str(&format!("Tags: {}\n", self.tags.join(", ")));
        }
        md.push_str(&format!(
            "Source Discussions: {}\n",
            self.source_discussions.join(", ")
        ));

        md
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_snake_case() {
        let json = serde_json::to_string(&ProposalStatus::TemperatureCheck).unwrap();
        assert_eq!(json, "\"temperature_check\"");
        assert_eq!(ProposalStatus::Draft.to_string(), "draft");
    }

    #[test]
    fn test_section_serializes_title() {
        let section = ProposalSection {
            kind: SectionKind::Motivation,
            content: "Background".into(),
        };
        let json = serde_json::to_value(&section).unwrap();
        assert_eq!(json["title"], "Motivation");
        assert_eq!(json["content"], "Background");
    }

    #[test]
    fn test_section_kind_order() {
        let titles: Vec<&str> = SectionKind::ALL.iter().map(|k| k.title()).collect();
        assert_eq!(titles, vec!["Abstract", "Motivation", "Specification", "Conclusion"]);
    }
}
