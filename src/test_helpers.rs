//! Builders for content entries used across the unit tests. Each builder
//! produces an entry that passes the integrity check; tests that need an
//! invalid entry mutate the result.

use crate::content::ContentStore;
use crate::types::{Author, AuthorMeta, Chapter, ChapterMeta, Novel, NovelMeta, NovelStatus};
use chrono::NaiveDate;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn novel(id: &str, title: &str, author: &str, year: i32, month: u32, day: u32) -> Novel {
    Novel {
        id: id.to_string(),
        data: NovelMeta {
            title: title.to_string(),
            author: author.to_string(),
            status: NovelStatus::Ongoing,
            start_date: Some(date(year, month, day)),
            ..Default::default()
        },
        body: String::new(),
    }
}

pub fn draft_novel(id: &str, title: &str, author: &str, year: i32, month: u32, day: u32) -> Novel {
    let mut entry = novel(id, title, author, year, month, day);
    entry.data.draft = true;
    entry
}

pub fn tagged_novel(id: &str, year: i32, month: u32, day: u32, tags: &[&str]) -> Novel {
    let mut entry = novel(id, id, "jane", year, month, day);
    entry.data.tags = tags.iter().map(|t| t.to_string()).collect();
    entry
}

pub fn chapter(id: &str, novel: &str, volume: u32, chapter: u32) -> Chapter {
    Chapter {
        id: id.to_string(),
        data: ChapterMeta {
            title: format!("Chapter {volume}.{chapter}"),
            novel: novel.to_string(),
            volume: Some(volume),
            chapter: Some(chapter),
            publish_date: Some(date(2024, 6, 1)),
            ..Default::default()
        },
        body: String::new(),
    }
}

pub fn draft_chapter(id: &str, novel: &str, volume: u32, chapter_number: u32) -> Chapter {
    let mut entry = chapter(id, novel, volume, chapter_number);
    entry.data.draft = true;
    entry
}

pub fn author(id: &str, name: &str) -> Author {
    Author {
        id: id.to_string(),
        data: AuthorMeta {
            name: name.to_string(),
            ..Default::default()
        },
        body: String::new(),
    }
}

/// A small but representative store: two novels by one registered author,
/// three chapters on the first novel.
pub fn sample_store() -> ContentStore {
    ContentStore::new(
        vec![
            novel("the-long-road", "The Long Road", "jane", 2024, 3, 1),
            novel("embers", "Embers", "jane", 2023, 11, 20),
        ],
        vec![
            chapter("the-long-road/1-1", "the-long-road", 1, 1),
            chapter("the-long-road/1-2", "the-long-road", 1, 2),
            chapter("the-long-road/2-1", "the-long-road", 2, 1),
        ],
        vec![author("jane", "Jane Doe")],
    )
}
