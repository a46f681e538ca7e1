//! Batch report: everything one pipeline run produced, plus a readable summary.

use chrono::{DateTime, Utc};
use forum_common::util::{as_percent, truncate_with_ellipsis};
use forum_common::{AnalysisOptions, Error};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::grouping::{TopicGroups, TopicSummary};
use crate::proposal::ProposalDraft;
use crate::types::{DiscussionAnalysis, Post};

/// Number of topics listed in the insights section.
pub const TOP_TOPICS: usize = 5;

const OVERVIEW_TITLE_CHARS: usize = 60;

/// Pipeline stage at which an item failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureStage {
    Analysis,
    Drafting,
}

impl std::fmt::Display for FailureStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Analysis => write!(f, "analysis"),
            Self::Drafting => write!(f, "drafting"),
        }
    }
}

/// A post excluded from the batch outputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemFailure {
    pub post_id: String,
    pub stage: FailureStage,
    /// Machine-readable error kind, e.g. `invalid_input`
    pub kind: String,
    pub message: String,
}

impl ItemFailure {
    pub fn new(post_id: &str, stage: FailureStage, error: &Error) -> Self {
        Self {
            post_id: post_id.to_string(),
            stage,
            kind: error.kind().to_string(),
            message: error.to_string(),
        }
    }
}

/// Result of one batch run.
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub trace_id: String,
    pub generated_at: DateTime<Utc>,
    /// One analysis per successfully analyzed post, in input order
    pub analyses: Vec<DiscussionAnalysis>,
    pub proposals: Vec<ProposalDraft>,
    pub failures: Vec<ItemFailure>,
    /// Input posts per platform, in first-seen order
    pub platform_counts: IndexMap<String, usize>,
    pub top_topics: Vec<TopicSummary>,
}

impl BatchReport {
    pub fn new(
        trace_id: String,
        posts: &[Post],
        analyses: Vec<DiscussionAnalysis>,
        proposals: Vec<ProposalDraft>,
        failures: Vec<ItemFailure>,
    ) -> Self {
        let mut platform_counts: IndexMap<String, usize> = IndexMap::new();
        for post in posts {
            *platform_counts.entry(post.platform.to_string()).or_insert(0) += 1;
        }

        let top_topics = TopicGroups::from_analyses(&analyses).top(TOP_TOPICS);

        Self {
            trace_id,
            generated_at: Utc::now(),
            analyses,
            proposals,
            failures,
            platform_counts,
            top_topics,
        }
    }

    /// Number of input posts.
    pub fn total_posts(&self) -> usize {
        self.platform_counts.values().sum()
    }

    /// Generate markdown summary.
    ///
    /// Sentiment and consensus figures appear only when the options include them.
    pub fn to_markdown(&self, options: &AnalysisOptions) -> String {
        let mut md = String::new();

        md.push_str("# Discussion Analysis Report\n\n");
        md.push_str(&format!(
            "**Generated**: {} | **Trace**: {}\n\n",
            self.generated_at.format("%Y-%m-%d %H:%M"),
            self.trace_id
        ));
        md.push_str(&format!(
            "Analyzed {} community discussions and identified {} potential proposals.\n\n",
            self.total_posts(),
            self.proposals.len()
        ));

        // Sources
        md.push_str("Sources:\n");
        for (platform, count) in &self.platform_counts {
            md.push_str(&format!("- {}: {} discussions\n", platform, count));
        }
        md.push('\n');

        if !self.failures.is_empty() {
            md.push_str(&format!("Excluded {} items:\n", self.failures.len()));
            for failure in &self.failures {
                md.push_str(&format!(
                    "- {} ({}): {}\n",
                    failure.post_id, failure.stage, failure.message
                ));
            }
            md.push('\n');
        }

        // Overview
        if !self.analyses.is_empty() {
            md.push_str("## Discussion Overview\n\n");
            for analysis in &self.analyses {
                md.push_str(&overview_line(analysis, options));
            }
            md.push('\n');
        }

        // Proposals
        if self.proposals.is_empty() {
            md.push_str(
                "No discussions met the threshold for proposal generation. \
                 Consider lowering the threshold or analyzing more recent discussions.\n\n",
            );
        } else {
            md.push_str("Here are the generated proposals:\n\n");
            for proposal in &self.proposals {
                md.push_str(&proposal.to_markdown());
                md.push_str("---\n\n");
            }
        }

        // Insights
        md.push_str("Key Discussion Insights:\n");
        for topic in &self.top_topics {
            md.push_str(&format!(
                "\n## {} ({} discussions)\n",
                topic.topic, topic.discussion_count
            ));
            for point in &topic.key_points {
                md.push_str(&format!("- {}\n", point));
            }
        }

        md
    }
}

fn overview_line(analysis: &DiscussionAnalysis, options: &AnalysisOptions) -> String {
    let post = &analysis.post;
    let name = post
        .title
        .as_deref()
        .map(|t| truncate_with_ellipsis(t, OVERVIEW_TITLE_CHARS))
        .unwrap_or_else(|| post.id.clone());

    let mut line = format!(
        "- {} ({}): {} proposal, potential {}%, engagement {}%",
        name,
        post.platform,
        analysis.proposal_type(),
        as_percent(analysis.proposal_potential.score),
        as_percent(analysis.engagement.score)
    );
    if options.include_sentiment {
        line.push_str(&format!(", {} sentiment", analysis.sentiment.label));
    }
    if options.include_consensus {
        line.push_str(&format!(", consensus {}%", as_percent(analysis.consensus.level)));
    }
    line.push('\n');
    line
}
