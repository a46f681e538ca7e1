//! Topic grouping across a batch of analyses.

use indexmap::IndexMap;
use serde::Serialize;

use crate::types::DiscussionAnalysis;

/// Analyses bucketed by topic, buckets kept in first-seen order.
///
/// An analysis appears in one bucket per distinct topic it names; analyses
/// without topics are not grouped.
#[derive(Debug, Default)]
pub struct TopicGroups<'a> {
    groups: IndexMap<String, Vec<&'a DiscussionAnalysis>>,
}

/// One ranked topic with its discussions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopicSummary {
    pub topic: String,
    pub discussion_count: usize,
    pub post_ids: Vec<String>,
    /// Key points of every member discussion, duplicates removed, first occurrence kept
    pub key_points: Vec<String>,
}

impl<'a> TopicGroups<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_analyses(analyses: impl IntoIterator<Item = &'a DiscussionAnalysis>) -> Self {
        let mut groups = Self::new();
        for analysis in analyses {
            groups.insert(analysis);
        }
        groups
    }

    pub fn insert(&mut self, analysis: &'a DiscussionAnalysis) {
        let mut seen: Vec<&str> = Vec::new();
        for topic in &analysis.topics {
            if seen.contains(&topic.as_str()) {
                continue;
            }
            seen.push(topic);
            self.groups.entry(topic.clone()).or_default().push(analysis);
        }
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn get(&self, topic: &str) -> Option<&[&'a DiscussionAnalysis]> {
        self.groups.get(topic).map(Vec::as_slice)
    }

    /// Topics by discussion count, descending. Equal counts keep first-seen order.
    pub fn ranked(&self) -> Vec<(&str, &[&'a DiscussionAnalysis])> {
        let mut ranked: Vec<(&str, &[&'a DiscussionAnalysis])> = self
            .groups
            .iter()
            .map(|(topic, members)| (topic.as_str(), members.as_slice()))
            .collect();
        ranked.sort_by(|a, b| b.1.len().cmp(&a.1.len()));
        ranked
    }

    /// The `n` most discussed topics.
    pub fn top(&self, n: usize) -> Vec<TopicSummary> {
        self.ranked()
            .into_iter()
            .take(n)
            .map(|(topic, members)| {
                let mut key_points: Vec<String> = Vec::new();
                for analysis in members {
                    for point in analysis.key_points() {
                        if !key_points.contains(point) {
                            key_points.push(point.clone());
                        }
                    }
                }
                TopicSummary {
                    topic: topic.to_string(),
                    discussion_count: members.len(),
                    post_ids: members.iter().map(|a| a.post.id.clone()).collect(),
                    key_points,
                }
            })
            .collect()
    }
}
