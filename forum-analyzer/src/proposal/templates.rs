//! Section and poll text templates.

use forum_common::util::as_percent;

use super::{ProposalSection, SectionKind};
use crate::types::{DiscussionAnalysis, ProposalType};

const MAX_ABSTRACT_TOPICS: usize = 3;
const MAX_ABSTRACT_STAKEHOLDERS: usize = 5;

const IMPLEMENTATION_STEPS: [&str; 5] = [
    "Initial review and feedback collection",
    "Technical specification development",
    "Community review period",
    "Implementation and testing",
    "Deployment and monitoring",
];

const NEXT_STEPS: [&str; 4] = [
    "Community feedback and discussion period (1 week)",
    "Temperature check poll (3 days)",
    "Final proposal refinement based on feedback",
    "Formal governance proposal submission",
];

const SUCCESS_METRICS: [&str; 4] = [
    "Increased participation in governance",
    "Improved community sentiment",
    "Technical metrics (if applicable)",
    "Economic impact metrics (if applicable)",
];

const BUDGET_ESTIMATE: &str = "Budget Estimate:\n\
                               - Implementation: TBD\n\
                               - Ongoing maintenance: TBD\n\
                               - Contingency: 10%";

fn bullets<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(|item| format!("- {}\n", item.as_ref()))
        .collect()
}

fn numbered<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {}\n", i + 1, item.as_ref()))
        .collect()
}

fn joined_or(items: &[String], limit: usize, fallback: &str) -> String {
    if items.is_empty() {
        fallback.to_string()
    } else {
        items.iter().take(limit).cloned().collect::<Vec<_>>().join(", ")
    }
}

fn section(kind: SectionKind, content: String) -> ProposalSection {
    ProposalSection {
        kind,
        content: content.trim_end().to_string(),
    }
}

pub(super) fn abstract_section(analysis: &DiscussionAnalysis) -> ProposalSection {
    let mut text = String::new();
    text.push_str(&format!(
        "This proposal addresses {} based on community discussions.\n\n",
        joined_or(&analysis.topics, MAX_ABSTRACT_TOPICS, "community concerns")
    ));
    text.push_str("Key Points:\n");
    text.push_str(&bullets(analysis.key_points()));
    text.push_str(&format!(
        "\nPrimary stakeholders: {}",
        joined_or(&analysis.stakeholders, MAX_ABSTRACT_STAKEHOLDERS, "the community")
    ));
    section(SectionKind::Abstract, text)
}

pub(super) fn motivation_section(analysis: &DiscussionAnalysis) -> ProposalSection {
    let consensus = &analysis.consensus;

    let mut text = String::new();
    text.push_str("Background:\n");
    text.push_str(&format!(
        "The community has expressed {} sentiment regarding these topics,\n\
         with a consensus level of {}%.\n\n",
        analysis.sentiment.label,
        as_percent(consensus.level)
    ));
    text.push_str("Community Perspectives:\n");
    text.push_str(&bullets(&analysis.perspectives));

    if let Some(ref majority) = consensus.majority_opinion {
        text.push_str(&format!("\nMajority Opinion: {}\n", majority));
    }
    if let Some(ref dissenting) = consensus.dissenting {
        text.push_str(&format!("\nDissenting Views: {}\n", dissenting));
    }
    section(SectionKind::Motivation, text)
}

fn required_changes(kind: ProposalType) -> &'static [&'static str] {
    match kind {
        ProposalType::Technical => &["Smart contract updates", "Technical documentation updates"],
        ProposalType::Governance => &["Governance parameter updates", "Process documentation updates"],
        ProposalType::Treasury | ProposalType::Social | ProposalType::Other => &[],
    }
}

pub(super) fn specification_section(analysis: &DiscussionAnalysis) -> ProposalSection {
    let kind = analysis.proposal_type();

    let mut text = String::new();
    text.push_str("Proposed Changes:\n");
    text.push_str(&numbered(&analysis.suggested_solutions));

    text.push_str("\nImplementation Approach:\n");
    text.push_str(&numbered(&IMPLEMENTATION_STEPS));

    text.push_str("\nTechnical Considerations:\n");
    let impact = if kind == ProposalType::Technical { "High" } else { "Medium" };
    text.push_str(&format!("- Impact Level: {}\n", impact));

    let changes = required_changes(kind);
    if !changes.is_empty() {
        text.push_str("- Required Changes:\n");
        for change in changes {
            text.push_str(&format!("  - {}\n", change));
        }
    }

    if kind == ProposalType::Treasury {
        text.push_str(&format!("\n{}\n", BUDGET_ESTIMATE));
    }
    section(SectionKind::Specification, text)
}

pub(super) fn conclusion_section(analysis: &DiscussionAnalysis) -> ProposalSection {
    let engagement = &analysis.engagement;

    let mut text = String::new();
    text.push_str(&format!(
        "This proposal aims to address community needs with a confidence score of {}%.\n\n",
        as_percent(analysis.proposal_potential.confidence)
    ));
    text.push_str("Community Engagement:\n");
    text.push_str(&format!("- {} unique participants\n", engagement.unique_participants));
    text.push_str(&format!(
        "- {}% participation rate\n",
        as_percent(engagement.participation_rate)
    ));
    text.push_str(&format!("- {} total interactions\n", engagement.total_interactions));

    text.push_str("\nNext Steps:\n");
    text.push_str(&numbered(&NEXT_STEPS));

    text.push_str("\nSuccess Metrics:\n");
    text.push_str(&bullets(&SUCCESS_METRICS));
    section(SectionKind::Conclusion, text)
}

pub(super) fn poll_title(analysis: &DiscussionAnalysis) -> String {
    let title = analysis
        .post
        .title
        .as_deref()
        .filter(|t| !t.trim().is_empty())
        .unwrap_or("Community Discussion");
    format!("Temperature Check: {}", title)
}

pub(super) fn poll_description(analysis: &DiscussionAnalysis) -> String {
    format!(
        "This temperature check aims to gauge community sentiment on the proposed changes \
         regarding {}. Please vote to indicate your support level.",
        joined_or(&analysis.topics, usize::MAX, "the discussed topics")
    )
}
