//! Batch pipeline: analyze many posts, group topics, draft proposals.
//!
//! Per-post analysis and per-analysis drafting are pure and run in parallel
//! on rayon; topic grouping is the single sequential merge step. Output order
//! always follows input order.

use forum_common::logging::generate_trace_id;
use forum_common::{AnalysisOptions, Config, Error, ProposalOptions, Result};
use rayon::prelude::*;
use tracing::{error, info, warn};

use crate::analysis::DiscussionAnalyzer;
use crate::proposal::{ProposalDraft, ProposalGenerator};
use crate::report::{BatchReport, FailureStage, ItemFailure};
use crate::types::{DiscussionAnalysis, Post};

/// Analyzer, generator, and options for a batch run.
pub struct DiscussionPipeline {
    analyzer: DiscussionAnalyzer,
    generator: ProposalGenerator,
    analysis_options: AnalysisOptions,
    proposal_options: ProposalOptions,
    pool: Option<rayon::ThreadPool>,
}

impl Default for DiscussionPipeline {
    fn default() -> Self {
        Self::new(AnalysisOptions::default(), ProposalOptions::default())
    }
}

impl DiscussionPipeline {
    /// Pipeline on rayon's global pool.
    pub fn new(analysis_options: AnalysisOptions, proposal_options: ProposalOptions) -> Self {
        Self {
            analyzer: DiscussionAnalyzer::new(),
            generator: ProposalGenerator::new(),
            analysis_options,
            proposal_options,
            pool: None,
        }
    }

    /// Pipeline with a dedicated pool when `workers` is configured.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut pipeline = Self::new(config.analysis.clone(), config.proposal.clone());

        if let Some(workers) = config.workers {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(workers)
                .thread_name(|i| format!("forum-analyzer-{}", i))
                .build()
                .map_err(|e| Error::Config(format!("failed to build worker pool: {}", e)))?;
            pipeline.pool = Some(pool);
        }

        Ok(pipeline)
    }

    pub fn with_analyzer(mut self, analyzer: DiscussionAnalyzer) -> Self {
        self.analyzer = analyzer;
        self
    }

    pub fn analysis_options(&self) -> &AnalysisOptions {
        &self.analysis_options
    }

    pub fn proposal_options(&self) -> &ProposalOptions {
        &self.proposal_options
    }

    fn in_pool<R, F>(&self, op: F) -> R
    where
        R: Send,
        F: FnOnce() -> R + Send,
    {
        match self.pool {
            Some(ref pool) => pool.install(op),
            None => op(),
        }
    }

    /// One result per post, in input order.
    pub fn analyze_all(&self, posts: &[Post]) -> Vec<Result<DiscussionAnalysis>> {
        self.in_pool(|| {
            posts
                .par_iter()
                .map(|post| self.analyzer.analyze(post, &self.analysis_options))
                .collect()
        })
    }

    /// One draft result per analysis, in input order. Drafts unconditionally;
    /// see [`DiscussionAnalysis::is_proposal_candidate`] for the usual filter.
    pub fn draft_all(&self, analyses: &[&DiscussionAnalysis]) -> Vec<Result<ProposalDraft>> {
        self.in_pool(|| {
            analyses
                .par_iter()
                .map(|analysis| self.generator.generate(analysis, &self.proposal_options))
                .collect()
        })
    }

    /// Run the whole batch.
    ///
    /// Malformed posts and failed drafts are logged, excluded from the
    /// derived outputs, and listed in [`BatchReport::failures`].
    pub fn run(&self, posts: &[Post]) -> BatchReport {
        let trace_id = generate_trace_id();
        let span = forum_common::batch_span!(trace_id.as_str(), posts = posts.len());
        let _enter = span.enter();

        info!("Starting analysis batch");

        let mut analyses = Vec::with_capacity(posts.len());
        let mut failures = Vec::new();
        for (post, result) in posts.iter().zip(self.analyze_all(posts)) {
            match result {
                Ok(analysis) => analyses.push(analysis),
                Err(e) => {
                    warn!(post_id = %post.id, error = %e, "Excluding post from batch");
                    failures.push(ItemFailure::new(&post.id, FailureStage::Analysis, &e));
                }
            }
        }

        let candidates: Vec<&DiscussionAnalysis> = analyses
            .iter()
            .filter(|analysis| analysis.is_proposal_candidate(&self.analysis_options))
            .collect();

        let mut proposals = Vec::with_capacity(candidates.len());
        for (analysis, result) in candidates.iter().zip(self.draft_all(&candidates)) {
            match result {
                Ok(draft) => proposals.push(draft),
                Err(e) => {
                    error!(post_id = %analysis.post.id, error = %e, "Proposal generation failed");
                    failures.push(ItemFailure::new(&analysis.post.id, FailureStage::Drafting, &e));
                }
            }
        }

        info!(
            analyzed = analyses.len(),
            failed = failures.len(),
            proposals = proposals.len(),
            "Analysis batch complete"
        );

        BatchReport::new(trace_id, posts, analyses, proposals, failures)
    }
}
