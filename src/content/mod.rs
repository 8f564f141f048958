//! Content relationship resolution.
//!
//! A [`ContentStore`] is an immutable snapshot of the three collections
//! (novels, chapters, authors) supplied by the scan stage or any other
//! loader. Construction runs the content-integrity check once per
//! collection; every view after that is a pure function of the snapshot —
//! nothing here mutates the collections or caches across calls.
//!
//! ## Failure semantics
//!
//! Read operations never fail toward page-generation callers: unknown ids
//! yield `None`, empty sequences, or synthesized fallback records, always
//! with a logged diagnostic. The build must prefer fewer pages over a
//! broken site, so one malformed entry costs exactly that entry.
//! [`ContentError::NotFound`] exists for the internal call sites where an
//! id came from a prior successful lookup and absence would be a logic bug.

pub mod authors;
pub mod chapters;
pub mod novels;

use crate::types::{Author, Chapter, Novel};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    /// Absence at a call site that already established existence. A normal
    /// miss on a read path is `None`, never this error.
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },
}

/// Immutable snapshot of the loaded content collections.
pub struct ContentStore {
    novels: Vec<Novel>,
    chapters: Vec<Chapter>,
    authors: Vec<Author>,
}

impl ContentStore {
    /// Build a store from freshly loaded collections, dropping entries that
    /// fail the per-kind integrity check (with a logged warning). Dropped
    /// entries are excluded from every downstream view.
    pub fn new(novels: Vec<Novel>, chapters: Vec<Chapter>, authors: Vec<Author>) -> Self {
        Self {
            novels: integrity_filter(novels, "novel", |n| &n.id, novel_is_valid),
            chapters: integrity_filter(chapters, "chapter", |c| &c.id, chapter_is_valid),
            authors: integrity_filter(authors, "author", |a| &a.id, author_is_valid),
        }
    }

    /// All retained novels, drafts included, in load order.
    pub fn novels(&self) -> &[Novel] {
        &self.novels
    }

    /// All retained chapters, drafts included, in load order.
    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    /// All retained author profiles, in load order.
    pub fn authors(&self) -> &[Author] {
        &self.authors
    }
}

/// Required-fields predicate for a novel: identity, title, author reference
/// and start date must all be present.
fn novel_is_valid(novel: &Novel) -> bool {
    !novel.id.is_empty()
        && !novel.data.title.is_empty()
        && !novel.data.author.is_empty()
        && novel.data.start_date.is_some()
}

/// Required-fields predicate for a chapter: identity, title, parent novel
/// and the full ordering key.
fn chapter_is_valid(chapter: &Chapter) -> bool {
    !chapter.id.is_empty()
        && !chapter.data.title.is_empty()
        && !chapter.data.novel.is_empty()
        && chapter.data.volume.is_some()
        && chapter.data.chapter.is_some()
        && chapter.data.publish_date.is_some()
}

/// Required-fields predicate for an author: identity plus a usable display
/// name (real name or pen name).
fn author_is_valid(author: &Author) -> bool {
    let has_name = !author.data.name.is_empty()
        || author
            .data
            .pen_name
            .as_deref()
            .is_some_and(|p| !p.is_empty());
    !author.id.is_empty() && has_name
}

fn integrity_filter<T>(
    entries: Vec<T>,
    kind: &'static str,
    id_of: impl Fn(&T) -> &str,
    valid: impl Fn(&T) -> bool,
) -> Vec<T> {
    let total = entries.len();
    let (kept, dropped): (Vec<T>, Vec<T>) = entries.into_iter().partition(&valid);
    if !dropped.is_empty() {
        for entry in &dropped {
            log::warn!(
                "dropping invalid {kind} entry {:?}: required fields missing",
                id_of(entry)
            );
        }
        log::warn!(
            "{} of {} {kind} entries failed the integrity check",
            dropped.len(),
            total
        );
    }
    kept
}
