//! Novel views: published listings, filters, tag aggregation, reading time.

use super::{ContentError, ContentStore};
use crate::render;
use crate::types::Novel;
use serde::Serialize;
use std::collections::BTreeMap;

/// One entry of the ranked tag listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
}

impl ContentStore {
    /// Published novels: drafts excluded, newest start date first. The sort
    /// is stable, so equal dates keep their load order.
    pub fn published_novels(&self) -> Vec<&Novel> {
        let mut novels: Vec<&Novel> = self.novels.iter().filter(|n| !n.data.draft).collect();
        novels.sort_by(|a, b| b.data.start_date.cmp(&a.data.start_date));
        novels
    }

    /// Look up a published novel by id. `None` is a normal outcome.
    pub fn novel_by_id(&self, novel_id: &str) -> Option<&Novel> {
        self.published_novels()
            .into_iter()
            .find(|n| n.id == novel_id)
    }

    /// Lookup for call sites that have already established the novel exists;
    /// absence here is a logic bug, not a missing page.
    pub(crate) fn require_novel(&self, novel_id: &str) -> Result<&Novel, ContentError> {
        self.novel_by_id(novel_id).ok_or_else(|| ContentError::NotFound {
            kind: "novel",
            id: novel_id.to_string(),
        })
    }

    /// Published novels by a given author id, newest first.
    pub fn novels_by_author(&self, author_id: &str) -> Vec<&Novel> {
        self.published_novels()
            .into_iter()
            .filter(|n| n.data.author == author_id)
            .collect()
    }

    /// Published novels carrying a given tag, newest first.
    pub fn novels_by_tag(&self, tag: &str) -> Vec<&Novel> {
        self.published_novels()
            .into_iter()
            .filter(|n| n.data.tags.iter().any(|t| t == tag))
            .collect()
    }

    /// The `count` most recently started published novels.
    pub fn recent_novels(&self, count: usize) -> Vec<&Novel> {
        let mut novels = self.published_novels();
        novels.truncate(count);
        novels
    }

    /// Tag occurrence counts across all published novels. A novel may
    /// contribute zero or many tags.
    pub fn tag_frequency(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for novel in self.published_novels() {
            for tag in &novel.data.tags {
                *counts.entry(tag.clone()).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Tags ordered by count descending, ties broken by tag ascending —
    /// deterministic for equal counts.
    pub fn ranked_tags(&self) -> Vec<TagCount> {
        let mut tags: Vec<TagCount> = self
            .tag_frequency()
            .into_iter()
            .map(|(tag, count)| TagCount { tag, count })
            .collect();
        tags.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.tag.cmp(&b.tag)));
        tags
    }

    /// Total reading time across a novel's published chapters. An unknown
    /// novel has no chapters and reads as the one-minute floor.
    pub fn novel_reading_time(&self, novel_id: &str) -> String {
        let total: usize = self
            .chapters_by_novel(novel_id)
            .iter()
            .map(|chapter| render::word_count_from_html(&render::render_markdown(&chapter.body).html))
            .sum();
        render::reading_time(total)
    }
}
