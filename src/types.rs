//! Shared content entry types.
//!
//! These types are the wire format between the scan stage and everything
//! downstream (content views, manifest emission) and are serialized to JSON
//! in the site manifest. Front-matter field names follow the camelCase
//! convention of the content files themselves (`startDate`, `publishDate`,
//! `penName`), so chapters written for any glob-loader backend parse here
//! unchanged.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A novel entry: identity, front-matter metadata, raw markdown body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Novel {
    /// Entry id — the file path relative to the collection root, extension
    /// stripped (`my-novel` for `content/novels/my-novel.md`).
    pub id: String,
    pub data: NovelMeta,
    /// Raw markdown body (everything after the front matter).
    pub body: String,
}

/// A chapter entry belonging to a novel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chapter {
    pub id: String,
    pub data: ChapterMeta,
    pub body: String,
}

/// An author profile entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    pub id: String,
    pub data: AuthorMeta,
    pub body: String,
}

/// Publication status of a novel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NovelStatus {
    #[default]
    Draft,
    Ongoing,
    Completed,
    Hiatus,
}

/// Novel front matter.
///
/// Every field defaults so that a sparse or partially broken front-matter
/// block still deserializes; the content integrity check (not the parser)
/// decides whether the entry is usable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NovelMeta {
    pub title: String,
    pub description: String,
    pub genre: Vec<String>,
    pub status: NovelStatus,
    pub cover_image: Option<String>,
    /// Author entry id. Resolved presentationally — an unknown id degrades
    /// to an unregistered author record, never a referential error.
    pub author: String,
    pub start_date: Option<NaiveDate>,
    pub last_updated: Option<NaiveDate>,
    pub word_count: Option<u64>,
    pub tags: Vec<String>,
    pub mature: bool,
    pub summary: Option<String>,
    /// Draft entries are excluded from every published listing.
    pub draft: bool,
}

/// Chapter front matter.
///
/// `volume` and `chapter` form the ordering key within a novel. Uniqueness
/// is by convention only — duplicates sort deterministically (stable sort,
/// insertion order breaks ties).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChapterMeta {
    pub title: String,
    /// Id of the novel this chapter belongs to.
    pub novel: String,
    pub volume: Option<u32>,
    pub volume_title: Option<String>,
    pub chapter: Option<u32>,
    pub publish_date: Option<NaiveDate>,
    pub word_count: Option<u64>,
    pub page_count: Option<u32>,
    pub summary: Option<String>,
    pub draft: bool,
    /// Sort hint within the same (volume, chapter) slot.
    pub order: i64,
    pub page_breaks: Vec<PageBreak>,
}

/// Named in-chapter anchor for long chapters split into pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageBreak {
    pub title: String,
    pub anchor: String,
}

/// Author front matter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AuthorMeta {
    pub name: String,
    pub pen_name: Option<String>,
    pub pronouns: Option<String>,
    pub avatar: Option<String>,
    pub bio: Option<String>,
    pub genres: Vec<String>,
    pub website: Option<String>,
    pub twitter: Option<String>,
    pub github: Option<String>,
    pub email: Option<String>,
    pub patreon: Option<String>,
    pub kofi: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn novel_meta_parses_camel_case_front_matter() {
        let yaml = r#"
title: The Long Road
description: A journey in three volumes
author: jane-doe
startDate: 2024-03-01
tags: [fantasy, slow-burn]
mature: false
"#;
        let meta: NovelMeta = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(meta.title, "The Long Road");
        assert_eq!(meta.author, "jane-doe");
        assert_eq!(meta.start_date, NaiveDate::from_ymd_opt(2024, 3, 1));
        assert_eq!(meta.tags, vec!["fantasy", "slow-burn"]);
        assert!(!meta.draft);
        assert_eq!(meta.status, NovelStatus::Draft);
    }

    #[test]
    fn chapter_meta_parses_ordering_key() {
        let yaml = r#"
title: "Chapter 3: Embers"
novel: the-long-road
volume: 1
chapter: 3
publishDate: 2024-04-15
"#;
        let meta: ChapterMeta = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(meta.novel, "the-long-road");
        assert_eq!(meta.volume, Some(1));
        assert_eq!(meta.chapter, Some(3));
        assert_eq!(meta.order, 0);
    }

    #[test]
    fn sparse_front_matter_still_parses() {
        let meta: ChapterMeta = serde_yaml::from_str("title: Lone\n").unwrap();
        assert_eq!(meta.title, "Lone");
        assert!(meta.novel.is_empty());
        assert_eq!(meta.volume, None);
    }

    #[test]
    fn author_pen_name_is_optional() {
        let yaml = "name: Jane Doe\npenName: J. D.\n";
        let meta: AuthorMeta = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(meta.name, "Jane Doe");
        assert_eq!(meta.pen_name.as_deref(), Some("J. D."));
    }

    #[test]
    fn status_parses_lowercase_variants() {
        let meta: NovelMeta = serde_yaml::from_str("status: ongoing\n").unwrap();
        assert_eq!(meta.status, NovelStatus::Ongoing);
        let meta: NovelMeta = serde_yaml::from_str("status: hiatus\n").unwrap();
        assert_eq!(meta.status, NovelStatus::Hiatus);
    }
}
