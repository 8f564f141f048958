//! Chapter views: ordering, grouping, sequential navigation, metrics.

use super::{ContentError, ContentStore};
use crate::render::{self, TocHeading};
use crate::types::Chapter;

/// Sequential navigation neighbors of a chapter within its novel.
///
/// Chapters sort ascending by `(volume, chapter)`, so `older` is the
/// previous entry and `newer` the next. Boundary chapters have the
/// corresponding side absent; an unknown id has both absent — navigation
/// must never hard-fail on a stale link.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdjacentChapters<'a> {
    pub older: Option<&'a Chapter>,
    pub newer: Option<&'a Chapter>,
}

fn ordering_key(chapter: &Chapter) -> (Option<u32>, Option<u32>) {
    (chapter.data.volume, chapter.data.chapter)
}

impl ContentStore {
    /// Published chapters across all novels: drafts excluded, sorted by
    /// `(novel id, volume, chapter)` ascending. Stable, so duplicate
    /// ordering keys keep their load order.
    pub fn published_chapters(&self) -> Vec<&Chapter> {
        let mut chapters: Vec<&Chapter> = self.chapters.iter().filter(|c| !c.data.draft).collect();
        chapters.sort_by(|a, b| {
            a.data
                .novel
                .cmp(&b.data.novel)
                .then_with(|| ordering_key(a).cmp(&ordering_key(b)))
        });
        chapters
    }

    /// Published chapters of one novel in reading order. Empty (never an
    /// error) for an unknown novel id.
    pub fn chapters_by_novel(&self, novel_id: &str) -> Vec<&Chapter> {
        let mut chapters: Vec<&Chapter> = self
            .chapters
            .iter()
            .filter(|c| !c.data.draft && c.data.novel == novel_id)
            .collect();
        chapters.sort_by(|a, b| ordering_key(a).cmp(&ordering_key(b)));
        chapters
    }

    /// Look up a published chapter by id. `None` is a normal outcome.
    pub fn chapter_by_id(&self, chapter_id: &str) -> Option<&Chapter> {
        self.chapters
            .iter()
            .find(|c| !c.data.draft && c.id == chapter_id)
    }

    /// Lookup for call sites that have already established the chapter
    /// exists; absence here is a logic bug.
    pub(crate) fn require_chapter(&self, chapter_id: &str) -> Result<&Chapter, ContentError> {
        self.chapter_by_id(chapter_id)
            .ok_or_else(|| ContentError::NotFound {
                kind: "chapter",
                id: chapter_id.to_string(),
            })
    }

    /// Neighbors of `chapter_id` within its novel's reading order. Unknown
    /// ids degrade to both sides absent.
    pub fn adjacent_chapters(&self, chapter_id: &str) -> AdjacentChapters<'_> {
        let Some(current) = self.chapter_by_id(chapter_id) else {
            log::debug!("adjacent_chapters: unknown chapter {chapter_id:?}");
            return AdjacentChapters::default();
        };
        let sequence = self.chapters_by_novel(&current.data.novel);
        let Some(index) = sequence.iter().position(|c| c.id == chapter_id) else {
            return AdjacentChapters::default();
        };
        AdjacentChapters {
            older: index.checked_sub(1).map(|i| sequence[i]),
            newer: sequence.get(index + 1).copied(),
        }
    }

    /// Word count of a chapter's rendered body. Unknown ids count zero.
    pub fn chapter_word_count(&self, chapter_id: &str) -> usize {
        match self.chapter_by_id(chapter_id) {
            Some(chapter) => {
                render::word_count_from_html(&render::render_markdown(&chapter.body).html)
            }
            None => 0,
        }
    }

    /// Display reading time of one chapter. Unknown ids read as the
    /// one-minute floor.
    pub fn chapter_reading_time(&self, chapter_id: &str) -> String {
        render::reading_time(self.chapter_word_count(chapter_id))
    }

    /// Table of contents of a chapter's rendered body: the renderer's
    /// heading list projected as `{slug, text, depth}`. Unknown ids yield
    /// an empty sequence.
    pub fn chapter_toc(&self, chapter_id: &str) -> Vec<TocHeading> {
        match self.chapter_by_id(chapter_id) {
            Some(chapter) => render::render_markdown(&chapter.body).headings,
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{chapter, draft_chapter, novel, sample_store};

    fn road_store() -> ContentStore {
        ContentStore::new(
            vec![novel("road", "The Road", "jane", 2024, 1, 1)],
            vec![
                // Load order deliberately scrambled.
                chapter("road/2-1", "road", 2, 1),
                chapter("road/1-2", "road", 1, 2),
                chapter("road/1-1", "road", 1, 1),
            ],
            vec![],
        )
    }

    #[test]
    fn chapters_by_novel_sorts_by_volume_then_chapter() {
        let store = road_store();
        let ids: Vec<&str> = store
            .chapters_by_novel("road")
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(ids, vec!["road/1-1", "road/1-2", "road/2-1"]);
    }

    #[test]
    fn chapters_by_novel_unknown_id_is_empty() {
        let store = road_store();
        assert!(store.chapters_by_novel("no-such-novel").is_empty());
    }

    #[test]
    fn published_chapters_group_by_novel_first() {
        let store = ContentStore::new(
            vec![],
            vec![
                chapter("zeta/1", "zeta", 1, 1),
                chapter("alpha/2", "alpha", 1, 2),
                chapter("alpha/1", "alpha", 1, 1),
            ],
            vec![],
        );
        let ids: Vec<&str> = store
            .published_chapters()
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(ids, vec!["alpha/1", "alpha/2", "zeta/1"]);
    }

    #[test]
    fn draft_chapters_are_excluded_everywhere() {
        let store = ContentStore::new(
            vec![],
            vec![
                chapter("road/1-1", "road", 1, 1),
                draft_chapter("road/1-2", "road", 1, 2),
            ],
            vec![],
        );
        assert_eq!(store.chapters_by_novel("road").len(), 1);
        assert!(store.chapter_by_id("road/1-2").is_none());
    }

    #[test]
    fn adjacency_in_the_middle() {
        let store = road_store();
        let adjacent = store.adjacent_chapters("road/1-2");
        assert_eq!(adjacent.older.map(|c| c.id.as_str()), Some("road/1-1"));
        assert_eq!(adjacent.newer.map(|c| c.id.as_str()), Some("road/2-1"));
    }

    #[test]
    fn adjacency_at_boundaries() {
        let store = road_store();
        let first = store.adjacent_chapters("road/1-1");
        assert!(first.older.is_none());
        assert_eq!(first.newer.map(|c| c.id.as_str()), Some("road/1-2"));

        let last = store.adjacent_chapters("road/2-1");
        assert_eq!(last.older.map(|c| c.id.as_str()), Some("road/1-2"));
        assert!(last.newer.is_none());
    }

    #[test]
    fn adjacency_of_single_chapter_novel_is_empty_both_sides() {
        let store = ContentStore::new(vec![], vec![chapter("solo/1", "solo", 1, 1)], vec![]);
        let adjacent = store.adjacent_chapters("solo/1");
        assert!(adjacent.older.is_none() && adjacent.newer.is_none());
    }

    #[test]
    fn adjacency_of_unknown_chapter_never_fails() {
        let store = road_store();
        let adjacent = store.adjacent_chapters("stale-link");
        assert!(adjacent.older.is_none() && adjacent.newer.is_none());
    }

    #[test]
    fn duplicate_ordering_keys_sort_stably() {
        let store = ContentStore::new(
            vec![],
            vec![
                chapter("dup/first", "dup", 1, 1),
                chapter("dup/second", "dup", 1, 1),
            ],
            vec![],
        );
        let ids: Vec<&str> = store
            .chapters_by_novel("dup")
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(ids, vec!["dup/first", "dup/second"]);
    }

    #[test]
    fn chapter_reading_time_from_body() {
        let mut c = chapter("road/1-1", "road", 1, 1);
        c.body = "word ".repeat(400);
        let store = ContentStore::new(vec![], vec![c], vec![]);
        assert_eq!(store.chapter_reading_time("road/1-1"), "2 min read");
        assert_eq!(store.chapter_reading_time("missing"), "1 min read");
    }

    #[test]
    fn chapter_toc_projects_headings() {
        let mut c = chapter("road/1-1", "road", 1, 1);
        c.body = "## Dawn\n\ntext\n\n### Noon\n".to_string();
        let store = ContentStore::new(vec![], vec![c], vec![]);
        let toc = store.chapter_toc("road/1-1");
        assert_eq!(toc.len(), 2);
        assert_eq!(toc[0].slug, "dawn");
        assert_eq!(toc[0].depth, 2);
        assert_eq!(toc[1].text, "Noon");
        assert!(store.chapter_toc("missing").is_empty());
    }

    #[test]
    fn require_chapter_signals_logic_bugs() {
        let store = sample_store();
        assert!(store.require_chapter("not-there").is_err());
    }
}
