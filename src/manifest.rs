//! Site manifest assembly.
//!
//! The build's output contract: one JSON document containing the resolved
//! configuration and every derived content view a page generator needs —
//! published novels with resolved authors and reading times, chapter
//! listings in reading order with navigation neighbors, rendered bodies
//! with word counts and tables of contents, and the ranked tag listing.
//!
//! Assembly only walks ids obtained from prior store lookups, so the
//! internal `require_*` lookups failing would be a logic bug; that error is
//! surfaced rather than papered over.

use crate::content::authors::AuthorSummary;
use crate::content::chapters::AdjacentChapters;
use crate::content::novels::TagCount;
use crate::content::{ContentError, ContentStore};
use crate::env::Configuration;
use crate::render;
use chrono::NaiveDate;
use serde::Serialize;

/// The complete derived site manifest.
#[derive(Debug, Serialize)]
pub struct SiteManifest {
    pub config: Configuration,
    /// Published novels, newest start date first.
    pub novels: Vec<NovelEntry>,
    /// Tags ranked by usage across published novels.
    pub tags: Vec<TagCount>,
}

#[derive(Debug, Serialize)]
pub struct NovelEntry {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: crate::types::NovelStatus,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub author: AuthorSummary,
    pub reading_time: String,
    /// Chapters in reading order, `(volume, chapter)` ascending.
    pub chapters: Vec<ChapterEntry>,
}

#[derive(Debug, Serialize)]
pub struct ChapterEntry {
    pub id: String,
    pub title: String,
    pub volume: Option<u32>,
    pub chapter: Option<u32>,
    pub publish_date: Option<NaiveDate>,
    pub word_count: usize,
    pub reading_time: String,
    /// Id of the previous chapter in reading order, if any.
    pub older: Option<String>,
    /// Id of the next chapter in reading order, if any.
    pub newer: Option<String>,
    pub toc: Vec<render::TocHeading>,
    pub html: String,
}

/// Assemble the manifest from resolved configuration and a loaded store.
pub fn build_manifest(
    config: &Configuration,
    store: &ContentStore,
) -> Result<SiteManifest, ContentError> {
    let mut novels = Vec::new();
    for novel in store.published_novels() {
        novels.push(novel_entry(store, &novel.id)?);
    }
    Ok(SiteManifest {
        config: config.clone(),
        novels,
        tags: store.ranked_tags(),
    })
}

fn novel_entry(store: &ContentStore, novel_id: &str) -> Result<NovelEntry, ContentError> {
    let novel = store.require_novel(novel_id)?;
    let author = store.resolve_author(&novel.data.author);

    let mut chapters = Vec::new();
    for chapter in store.chapters_by_novel(novel_id) {
        chapters.push(chapter_entry(store, &chapter.id)?);
    }

    Ok(NovelEntry {
        id: novel.id.clone(),
        title: novel.data.title.clone(),
        description: novel.data.description.clone(),
        status: novel.data.status,
        tags: novel.data.tags.clone(),
        cover_image: novel.data.cover_image.clone(),
        start_date: novel.data.start_date,
        author,
        reading_time: store.novel_reading_time(novel_id),
        chapters,
    })
}

fn chapter_entry(store: &ContentStore, chapter_id: &str) -> Result<ChapterEntry, ContentError> {
    let chapter = store.require_chapter(chapter_id)?;
    let rendered = render::render_markdown(&chapter.body);
    let word_count = render::word_count_from_html(&rendered.html);
    let AdjacentChapters { older, newer } = store.adjacent_chapters(chapter_id);

    Ok(ChapterEntry {
        id: chapter.id.clone(),
        title: chapter.data.title.clone(),
        volume: chapter.data.volume,
        chapter: chapter.data.chapter,
        publish_date: chapter.data.publish_date,
        word_count,
        reading_time: render::reading_time(word_count),
        older: older.map(|c| c.id.clone()),
        newer: newer.map(|c| c.id.clone()),
        toc: rendered.headings,
        html: rendered.html,
    })
}
