//! Filesystem scanning: content tree to loaded collections.
//!
//! The content root holds one directory per collection:
//!
//! ```text
//! content/
//! ├── novels/
//! │   └── the-long-road.md
//! ├── chapters/
//! │   └── the-long-road/
//! │       ├── 1-1.md
//! │       └── 1-2.md
//! └── authors/
//!     └── jane.md
//! ```
//!
//! Each file is YAML front matter between `---` fences followed by a
//! markdown body. The entry id is the path relative to its collection
//! directory, extension stripped, with `/` separators on every platform
//! (`the-long-road/1-1` above).
//!
//! A file that fails to parse is skipped with a warning; the build prefers
//! fewer pages over a broken site. Structural failures (unreadable root,
//! IO errors mid-walk) are hard errors.

use crate::content::ContentStore;
use crate::types::{Author, Chapter, Novel};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("content root not found: {0}")]
    MissingRoot(PathBuf),
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Scan a content root into a [`ContentStore`].
///
/// Missing collection directories are treated as empty; a missing root is
/// an error since it almost always means a wrong `--source`.
pub fn scan(root: &Path) -> Result<ContentStore, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::MissingRoot(root.to_path_buf()));
    }

    let novels = load_collection::<Novel>(&root.join("novels"))?;
    let chapters = load_collection::<Chapter>(&root.join("chapters"))?;
    let authors = load_collection::<Author>(&root.join("authors"))?;

    log::info!(
        "scanned {}: {} novels, {} chapters, {} authors",
        root.display(),
        novels.len(),
        chapters.len(),
        authors.len()
    );

    Ok(ContentStore::new(novels, chapters, authors))
}

trait FromParts: Sized {
    type Meta: DeserializeOwned + Default;
    fn from_parts(id: String, data: Self::Meta, body: String) -> Self;
}

impl FromParts for Novel {
    type Meta = crate::types::NovelMeta;
    fn from_parts(id: String, data: Self::Meta, body: String) -> Self {
        Novel { id, data, body }
    }
}

impl FromParts for Chapter {
    type Meta = crate::types::ChapterMeta;
    fn from_parts(id: String, data: Self::Meta, body: String) -> Self {
        Chapter { id, data, body }
    }
}

impl FromParts for Author {
    type Meta = crate::types::AuthorMeta;
    fn from_parts(id: String, data: Self::Meta, body: String) -> Self {
        Author { id, data, body }
    }
}

fn load_collection<T: FromParts>(dir: &Path) -> Result<Vec<T>, ScanError> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in WalkDir::new(dir) {
        let entry = entry?;
        if entry.file_type().is_file() && is_markdown(entry.path()) {
            paths.push(entry.into_path());
        }
    }
    // Deterministic load order regardless of directory iteration order.
    paths.sort();

    let mut entries = Vec::with_capacity(paths.len());
    for path in &paths {
        let id = entry_id(dir, path);
        let content = std::fs::read_to_string(path)?;
        match parse_entry::<T::Meta>(&content) {
            Ok((meta, body)) => entries.push(T::from_parts(id, meta, body)),
            Err(reason) => {
                log::warn!("skipping {}: {reason}", path.display());
            }
        }
    }
    Ok(entries)
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .map(|e| e.eq_ignore_ascii_case("md") || e.eq_ignore_ascii_case("markdown"))
        .unwrap_or(false)
}

/// Relative path without extension, `/`-separated.
fn entry_id(dir: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(dir).unwrap_or(path).with_extension("");
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Split `---` front-matter fences from the body and parse the YAML block.
///
/// A file without an opening fence parses as all-body with default metadata
/// (the integrity check then decides whether that entry is usable).
fn parse_entry<M: DeserializeOwned + Default>(content: &str) -> Result<(M, String), String> {
    let Some(rest) = content.strip_prefix("---") else {
        return Ok((M::default(), content.to_string()));
    };
    let Some((front, body)) = rest.split_once("\n---") else {
        return Err("unterminated front matter".to_string());
    };
    let meta: M =
        serde_yaml::from_str(front).map_err(|e| format!("invalid front matter: {e}"))?;
    let body = body
        .strip_prefix('\n')
        .or_else(|| body.strip_prefix("\r\n"))
        .unwrap_or(body);
    Ok((meta, body.to_string()))
}
