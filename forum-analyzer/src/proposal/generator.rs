//! Proposal draft generator.

use chrono::{DateTime, Utc};
use forum_common::{Error, ProposalOptions, Result};
use tracing::debug;

use super::templates;
use super::{
    DraftMetadata, EngagementSnapshot, ImpactEstimate, ProposalDraft, ProposalStatus,
    TemperatureCheckPoll, DEFAULT_PARTICIPATION_THRESHOLD, DEFAULT_POLL_DURATION_DAYS,
    POLL_OPTIONS,
};
use crate::types::{DiscussionAnalysis, ProposalType};

/// Title used when the source post has none.
const FALLBACK_TITLE: &str = "Community-Driven Proposal";
/// Number of topics carried as tags.
const MAX_TAGS: usize = 5;
/// Impact of the dimension matching the proposal type.
const PRIMARY_IMPACT: f64 = 0.8;
/// Impact of every other dimension.
const SECONDARY_IMPACT: f64 = 0.3;

/// Assembles a [`ProposalDraft`] from one analysis.
///
/// The generator is unconditional: deciding which analyses deserve a draft
/// is the caller's job (see
/// [`DiscussionAnalysis::is_proposal_candidate`]).
#[derive(Debug, Clone, Copy, Default)]
pub struct ProposalGenerator;

impl ProposalGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generate a draft stamped with the current time.
    pub fn generate(
        &self,
        analysis: &DiscussionAnalysis,
        options: &ProposalOptions,
    ) -> Result<ProposalDraft> {
        self.generate_at(analysis, options, Utc::now())
    }

    /// Generate a draft with an explicit creation time.
    ///
    /// Fails with [`Error::MalformedAnalysis`] before building anything when
    /// the analysis cannot be templated.
    pub fn generate_at(
        &self,
        analysis: &DiscussionAnalysis,
        options: &ProposalOptions,
        created_at: DateTime<Utc>,
    ) -> Result<ProposalDraft> {
        check_analysis(analysis)?;

        let post = &analysis.post;
        let kind = analysis.proposal_type();

        let sections = vec![
            templates::abstract_section(analysis),
            templates::motivation_section(analysis),
            templates::specification_section(analysis),
            templates::conclusion_section(analysis),
        ];

        let poll = options
            .include_temperature_check
            .then(|| temperature_check(analysis, options));
        let status = if poll.is_some() {
            ProposalStatus::TemperatureCheck
        } else {
            ProposalStatus::Draft
        };

        let tags: Vec<String> = analysis.topics.iter().take(MAX_TAGS).cloned().collect();

        let metadata = DraftMetadata {
            source: post.url.clone(),
            platform: post.platform.clone(),
            timestamp: post.timestamp,
            author: post.author.clone(),
            tags: tags.clone(),
            engagement: EngagementSnapshot {
                participation_rate: analysis.engagement.participation_rate,
                unique_participants: analysis.engagement.unique_participants,
                total_interactions: analysis.engagement.total_interactions,
            },
            budget_estimate_required: options.require_budget_estimate
                && kind == ProposalType::Treasury,
        };

        let title = post
            .title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(FALLBACK_TITLE)
            .to_string();

        debug!(
            post_id = %post.id,
            proposal_type = %kind,
            status = %status,
            "Proposal draft generated"
        );

        Ok(ProposalDraft {
            title,
            author: post.author.clone(),
            created_at,
            status,
            sections,
            poll,
            source_discussions: vec![post.url.clone()],
            tags,
            estimated_impact: impact_estimate(kind),
            metadata: Some(metadata),
        })
    }
}

fn check_analysis(analysis: &DiscussionAnalysis) -> Result<()> {
    let post = &analysis.post;
    if post.author.trim().is_empty() {
        return Err(Error::MalformedAnalysis(format!(
            "analysis of post {} has no author",
            post.id
        )));
    }
    if post.url.trim().is_empty() {
        return Err(Error::MalformedAnalysis(format!(
            "analysis of post {} has no source url",
            post.id
        )));
    }

    let scores = [
        ("proposal score", analysis.proposal_potential.score),
        ("confidence", analysis.proposal_potential.confidence),
        ("sentiment", analysis.sentiment.score),
        ("consensus", analysis.consensus.level),
        ("participation rate", analysis.engagement.participation_rate),
    ];
    for (name, value) in scores {
        if !value.is_finite() {
            return Err(Error::MalformedAnalysis(format!(
                "analysis of post {} has a non-finite {}",
                post.id, name
            )));
        }
    }
    Ok(())
}

fn temperature_check(analysis: &DiscussionAnalysis, options: &ProposalOptions) -> TemperatureCheckPoll {
    let duration_days = match options.poll_duration_days {
        0 => DEFAULT_POLL_DURATION_DAYS,
        days => days,
    };
    let threshold = if options.minimum_participation_threshold > 0.0 {
        options.minimum_participation_threshold
    } else {
        DEFAULT_PARTICIPATION_THRESHOLD
    };

    TemperatureCheckPoll {
        title: templates::poll_title(analysis),
        description: templates::poll_description(analysis),
        options: POLL_OPTIONS.iter().map(|o| o.to_string()).collect(),
        duration_days,
        threshold,
    }
}

fn impact_estimate(kind: ProposalType) -> ImpactEstimate {
    let level = |dimension: ProposalType| {
        if kind == dimension {
            PRIMARY_IMPACT
        } else {
            SECONDARY_IMPACT
        }
    };
    ImpactEstimate {
        technical: level(ProposalType::Technical),
        social: level(ProposalType::Social),
        economic: level(ProposalType::Treasury),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proposal::SectionKind;
    use crate::types::{
        Consensus, Engagement, Platform, Post, ProposalPotential, Sentiment, SentimentLabel,
    };
    use chrono::TimeZone;

    fn analysis(kind: ProposalType) -> DiscussionAnalysis {
        DiscussionAnalysis {
            post: Post {
                id: "7".into(),
                title: Some("Fund the docs team".into()),
                content: "We should fund the docs team.".into(),
                author: "carol".into(),
                timestamp: Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap(),
                url: "https://forum.example/t/7".into(),
                platform: Platform::Commonwealth,
                replies: Some(4),
                views: Some(100),
                reactions: None,
            },
            sentiment: Sentiment { score: 0.3, label: SentimentLabel::Positive },
            engagement: Engagement {
                score: 0.009,
                participation_rate: 0.2,
                unique_participants: 1,
                total_interactions: 5,
            },
            proposal_potential: ProposalPotential {
                score: 0.7,
                confidence: 0.3545,
                proposal_type: kind,
                key_points: vec!["We should fund the docs team".into()],
            },
            consensus: Consensus { level: 0.5, majority_opinion: None, dissenting: None },
            topics: vec!["fund".into()],
            perspectives: vec![],
            suggested_solutions: vec!["We should fund the docs team".into()],
            stakeholders: vec!["carol".into(), "team".into()],
        }
    }

    fn created() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 2, 2, 12, 0, 0).unwrap()
    }

    fn generate(analysis: &DiscussionAnalysis, options: &ProposalOptions) -> ProposalDraft {
        ProposalGenerator::new()
            .generate_at(analysis, options, created())
            .unwrap()
    }

    #[test]
    fn test_sections_fixed_order() {
        let draft = generate(&analysis(ProposalType::Other), &ProposalOptions::default());
        let kinds: Vec<SectionKind> = draft.sections.iter().map(|s| s.kind).collect();
        assert_eq!(kinds, SectionKind::ALL.to_vec());
        assert_eq!(draft.created_at, created());
    }

    #[test]
    fn test_treasury_draft() {
        let draft = generate(&analysis(ProposalType::Treasury), &ProposalOptions::default());
        let spec = draft.section(SectionKind::Specification).unwrap();
        assert!(spec.content.contains("Budget Estimate:"));
        assert!(spec.content.contains("- Contingency: 10%"));
        assert!(!spec.content.contains("Required Changes"));
        assert_eq!(draft.estimated_impact.economic, 0.8);
        assert_eq!(draft.estimated_impact.technical, 0.3);
        assert_eq!(draft.estimated_impact.social, 0.3);
        assert!(draft.metadata.as_ref().unwrap().budget_estimate_required);
    }

    #[test]
    fn test_budget_only_for_treasury() {
        for kind in [
            ProposalType::Governance,
            ProposalType::Technical,
            ProposalType::Social,
            ProposalType::Other,
        ] {
            let draft = generate(&analysis(kind), &ProposalOptions::default());
            let spec = draft.section(SectionKind::Specification).unwrap();
            assert!(!spec.content.contains("Budget Estimate"), "{kind} draft has a budget");
            assert!(!draft.metadata.as_ref().unwrap().budget_estimate_required);
        }
    }

    #[test]
    fn test_technical_draft() {
        let draft = generate(&analysis(ProposalType::Technical), &ProposalOptions::default());
        let spec = &draft.section(SectionKind::Specification).unwrap().content;
        assert!(spec.contains("- Impact Level: High"));
        assert!(spec.contains("Smart contract updates"));
        assert_eq!(draft.estimated_impact.technical, 0.8);
        assert_eq!(draft.estimated_impact.economic, 0.3);
    }

    #[test]
    fn test_governance_required_changes() {
        let draft = generate(&analysis(ProposalType::Governance), &ProposalOptions::default());
        let spec = &draft.section(SectionKind::Specification).unwrap().content;
        assert!(spec.contains("- Impact Level: Medium"));
        assert!(spec.contains("Governance parameter updates"));
        assert!(spec.contains("1. We should fund the docs team"));
        assert!(spec.contains("5. Deployment and monitoring"));
    }

    #[test]
    fn test_poll_and_status() {
        let draft = generate(&analysis(ProposalType::Treasury), &ProposalOptions::default());
        assert_eq!(draft.status, ProposalStatus::TemperatureCheck);
        let poll = draft.poll.as_ref().unwrap();
        assert_eq!(poll.title, "Temperature Check: Fund the docs team");
        assert_eq!(poll.options, POLL_OPTIONS.to_vec());
        assert_eq!(poll.duration_days, 3);
        assert_eq!(poll.threshold, 0.1);
        assert!(poll.description.contains("regarding fund."));

        let options = ProposalOptions {
            include_temperature_check: false,
            ..ProposalOptions::default()
        };
        let draft = generate(&analysis(ProposalType::Treasury), &options);
        assert_eq!(draft.status, ProposalStatus::Draft);
        assert!(draft.poll.is_none());
    }

    #[test]
    fn test_poll_zero_values_fall_back_to_defaults() {
        let options = ProposalOptions {
            poll_duration_days: 0,
            minimum_participation_threshold: 0.0,
            ..ProposalOptions::default()
        };
        let draft = generate(&analysis(ProposalType::Social), &options);
        let poll = draft.poll.unwrap();
        assert_eq!(poll.duration_days, DEFAULT_POLL_DURATION_DAYS);
        assert_eq!(poll.threshold, DEFAULT_PARTICIPATION_THRESHOLD);

        let options = ProposalOptions {
            poll_duration_days: 7,
            minimum_participation_threshold: 0.25,
            ..ProposalOptions::default()
        };
        let poll = generate(&analysis(ProposalType::Social), &options).poll.unwrap();
        assert_eq!(poll.duration_days, 7);
        assert_eq!(poll.threshold, 0.25);
    }

    #[test]
    fn test_untitled_post() {
        let mut a = analysis(ProposalType::Other);
        a.post.title = None;
        let draft = generate(&a, &ProposalOptions::default());
        assert_eq!(draft.title, "Community-Driven Proposal");
        assert_eq!(draft.poll.unwrap().title, "Temperature Check: Community Discussion");
    }

    #[test]
    fn test_provenance() {
        let mut a = analysis(ProposalType::Other);
        a.topics = ["a", "b", "c", "d", "e", "f"].iter().map(|s| s.to_string()).collect();
        let draft = generate(&a, &ProposalOptions::default());

        assert_eq!(draft.source_discussions, vec!["https://forum.example/t/7"]);
        assert_eq!(draft.tags.len(), 5);
        let metadata = draft.metadata.unwrap();
        assert_eq!(metadata.platform, Platform::Commonwealth);
        assert_eq!(metadata.author, "carol");
        assert_eq!(metadata.tags, draft.tags);
        assert_eq!(metadata.engagement.total_interactions, 5);
    }

    #[test]
    fn test_section_text() {
        let mut a = analysis(ProposalType::Other);
        a.consensus.majority_opinion = Some("Fund it".into());
        a.perspectives = vec!["This is great".into()];
        let draft = generate(&a, &ProposalOptions::default());

        let abstract_text = &draft.section(SectionKind::Abstract).unwrap().content;
        assert!(abstract_text.starts_with("This proposal addresses fund based on community discussions."));
        assert!(abstract_text.contains("- We should fund the docs team"));
        assert!(abstract_text.ends_with("Primary stakeholders: carol, team"));

        let motivation = &draft.section(SectionKind::Motivation).unwrap().content;
        assert!(motivation.contains("expressed positive sentiment"));
        assert!(motivation.contains("consensus level of 50%"));
        assert!(motivation.contains("- This is great"));
        assert!(motivation.contains("Majority Opinion: Fund it"));
        assert!(!motivation.contains("Dissenting Views"));

        let conclusion = &draft.section(SectionKind::Conclusion).unwrap().content;
        assert!(conclusion.contains("confidence score of 35%"));
        assert!(conclusion.contains("- 1 unique participants"));
        assert!(conclusion.contains("- 20% participation rate"));
        assert!(conclusion.contains("- 5 total interactions"));
        assert!(conclusion.contains("4. Formal governance proposal submission"));
    }

    #[test]
    fn test_malformed_analysis_is_rejected() {
        let mut a = analysis(ProposalType::Treasury);
        a.post.author = "  ".into();
        let err = ProposalGenerator::new()
            .generate(&a, &ProposalOptions::default())
            .unwrap_err();
        assert!(matches!(err, Error::MalformedAnalysis(_)));

        let mut a = analysis(ProposalType::Treasury);
        a.proposal_potential.confidence = f64::NAN;
        assert!(ProposalGenerator::new()
            .generate(&a, &ProposalOptions::default())
            .is_err());
    }

    #[test]
    fn test_markdown_rendering() {
        let draft = generate(&analysis(ProposalType::Treasury), &ProposalOptions::default());
        let md = draft.to_markdown();
        assert!(md.starts_with("## Fund the docs team\n\n"));
        assert!(md.contains("### Abstract\n"));
        assert!(md.contains("### Conclusion\n"));
        assert!(md.contains("### Temperature Check Poll\n"));
        assert!(md.contains("- Need More Discussion\n"));
        assert!(md.contains("- Economic Impact: 80%\n"));
        assert!(md.contains("Source Discussions: https://forum.example/t/7\n"));
    }
}
