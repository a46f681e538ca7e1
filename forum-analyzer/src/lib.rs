//! Forum Analyzer Library
//!
//! Turns community discussion posts into quantitative analyses and, for
//! discussions with enough proposal potential, templated governance
//! proposal drafts with a temperature-check poll.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         forum-analyzer                              │
//! ├─────────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────┐      │
//! │  │  Discussion     │  │  Topic          │  │  Proposal       │      │
//! │  │  Analyzer       │→ │  Grouping       │  │  Generator      │      │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────┘      │
//! │           ↑                    ↓                    ↓               │
//! │  ┌──────────────────────────────────────────────────────────────┐   │
//! │  │  DiscussionPipeline (rayon)  →  BatchReport                  │   │
//! │  └──────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Key Concepts
//!
//! ## Proposal potential
//! - TF-IDF match against a fixed governance vocabulary, bounded to [0, 1]
//! - A discussion becomes a proposal candidate above the configured threshold
//!
//! ## Temperature check
//! - An informal four-option poll attached to a draft before a binding vote
//!
//! Fetching posts from forums and chat platforms is out of scope: callers
//! map their data onto [`Post`] first.

#![warn(clippy::all)]
#![allow(clippy::pedantic)]

pub mod analysis;
pub mod grouping;
pub mod pipeline;
pub mod proposal;
pub mod report;
pub mod types;

pub use analysis::DiscussionAnalyzer;
pub use grouping::{TopicGroups, TopicSummary};
pub use pipeline::DiscussionPipeline;
pub use proposal::{
    ImpactEstimate, ProposalDraft, ProposalGenerator, ProposalSection, ProposalStatus,
    SectionKind, TemperatureCheckPoll,
};
pub use report::{BatchReport, FailureStage, ItemFailure};
pub use types::{
    Consensus, DiscussionAnalysis, Engagement, Platform, Post, ProposalPotential, ProposalType,
    Reaction, Sentiment, SentimentLabel,
};
