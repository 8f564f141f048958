//! Markdown rendering and derived reading metrics.
//!
//! Chapters are markdown; everything downstream (manifest, word counts,
//! tables of contents) consumes the rendered form produced here:
//!
//! - [`render_markdown`] — HTML plus the heading list, in document order,
//!   with GitHub-style slugs for anchor links.
//! - [`word_count_from_html`] — markup stripped, whitespace runs collapsed,
//!   whitespace-delimited tokens counted.
//! - [`reading_time`] — minutes at 200 words per minute, floored at one
//!   minute, formatted for display.

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use serde::Serialize;

/// Words-per-minute constant behind [`reading_time`].
pub const WORDS_PER_MINUTE: u64 = 200;

/// One table-of-contents entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocHeading {
    /// Anchor slug (`#the-long-night`).
    pub slug: String,
    /// Heading text with inline markup flattened.
    pub text: String,
    /// Heading level, 1–6.
    pub depth: u8,
}

/// Rendered chapter body.
#[derive(Debug, Clone)]
pub struct Rendered {
    pub html: String,
    pub headings: Vec<TocHeading>,
}

/// Render markdown to HTML and extract its headings.
pub fn render_markdown(markdown: &str) -> Rendered {
    let options =
        Options::ENABLE_TABLES | Options::ENABLE_FOOTNOTES | Options::ENABLE_STRIKETHROUGH;
    let events: Vec<Event> = Parser::new_ext(markdown, options).collect();

    let mut headings = Vec::new();
    let mut current: Option<(u8, String)> = None;
    for event in &events {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                current = Some((heading_depth(*level), String::new()));
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some((depth, text)) = current.take() {
                    headings.push(TocHeading {
                        slug: slugify(&text),
                        text,
                        depth,
                    });
                }
            }
            Event::Text(t) | Event::Code(t) => {
                if let Some((_, text)) = &mut current {
                    text.push_str(t);
                }
            }
            _ => {}
        }
    }

    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, events.into_iter());
    Rendered { html, headings }
}

fn heading_depth(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

/// Normalize heading text into an anchor slug: lowercased, alphanumerics
/// kept, everything else collapsed to single dashes, outer dashes stripped.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut prev_dash = false;
    for c in text.chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
            prev_dash = false;
        } else if !prev_dash && !slug.is_empty() {
            slug.push('-');
            prev_dash = true;
        }
    }
    slug.trim_end_matches('-').to_string()
}

/// Count words in rendered HTML.
///
/// Tags are removed (not replaced with spaces, so `<code>x</code>.` stays a
/// single token), whitespace runs including newlines collapse to single
/// separators, and the remaining tokens are counted. Empty input is 0.
pub fn word_count_from_html(html: &str) -> usize {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            c if !in_tag => text.push(c),
            _ => {}
        }
    }
    text.split_whitespace().count()
}

/// Format a word count as display reading time at [`WORDS_PER_MINUTE`].
/// Never less than one minute, even for zero words.
pub fn reading_time(word_count: usize) -> String {
    let minutes = (word_count as f64 / WORDS_PER_MINUTE as f64).round() as u64;
    format!("{} min read", minutes.max(1))
}
