//! Author resolution.
//!
//! Author linking is presentational, not referentially enforced: a novel may
//! name an author id that has no profile entry, and the listing still
//! renders. Unknown ids synthesize an unregistered record using the id as
//! display name and a placeholder avatar.

use super::ContentStore;
use crate::types::Author;
use serde::Serialize;

/// Avatar used for authors without a profile (or without an avatar).
pub const PLACEHOLDER_AVATAR: &str = "/static/author-placeholder.svg";

/// Display-ready author record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorSummary {
    pub id: String,
    pub name: String,
    pub avatar: String,
    /// `false` is a valid, expected outcome for ids without a profile.
    pub is_registered: bool,
}

impl ContentStore {
    /// Look up an author profile by id.
    pub fn author_by_id(&self, author_id: &str) -> Option<&Author> {
        self.authors.iter().find(|a| a.id == author_id)
    }

    /// Resolve one author id to a display record.
    ///
    /// Display name is the first non-empty of real name, pen name, or the
    /// id itself. This never fails for unknown ids.
    pub fn resolve_author(&self, id: &str) -> AuthorSummary {
        match self.author_by_id(id) {
            Some(author) => AuthorSummary {
                id: id.to_string(),
                name: display_name(author, id),
                avatar: author
                    .data
                    .avatar
                    .clone()
                    .unwrap_or_else(|| PLACEHOLDER_AVATAR.to_string()),
                is_registered: true,
            },
            None => {
                log::debug!("resolve_author: no profile for {id:?}, using fallback record");
                AuthorSummary {
                    id: id.to_string(),
                    name: id.to_string(),
                    avatar: PLACEHOLDER_AVATAR.to_string(),
                    is_registered: false,
                }
            }
        }
    }

    /// Resolve requested author ids to display records, in request order.
    pub fn resolve_authors(&self, author_ids: &[String]) -> Vec<AuthorSummary> {
        author_ids.iter().map(|id| self.resolve_author(id)).collect()
    }
}

/// First non-empty of name, pen name, id.
fn display_name(author: &Author, id: &str) -> String {
    [
        Some(author.data.name.as_str()),
        author.data.pen_name.as_deref(),
        Some(id),
    ]
    .into_iter()
    .flatten()
    .map(str::trim)
    .find(|s| !s.is_empty())
    .unwrap_or(id)
    .to_string()
}
