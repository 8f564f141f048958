//! CLI output formatting.
//!
//! Output is information-centric, not file-centric: every entity leads with
//! its positional index and title, with source paths as indented `Source:`
//! context lines. Each command has a `format_*` function (returns
//! `Vec<String>`) for testability and a `print_*` wrapper that writes to
//! stdout. Format functions are pure — no I/O, no side effects.
//!
//! ## Scan
//!
//! ```text
//! Novels
//! 001 The Long Road (3 chapters)
//!     Source: novels/the-long-road.md
//!     001 Setting Out
//!         Source: chapters/the-long-road/1-1.md
//!
//! Authors
//! 001 Jane Doe
//!     Source: authors/jane.md
//! ```
//!
//! ## Check
//!
//! ```text
//! Configuration
//!     error    PATREON_URL: invalid value ...
//!     warning  SITE_URL: site URL is still the placeholder ...
//!     info     no social links configured ...
//! 1 error, 1 warning, 1 suggestion
//! ```

use crate::content::ContentStore;
use crate::env::{Report, Severity};
use crate::manifest::SiteManifest;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn draft_marker(draft: bool) -> &'static str {
    if draft { " (draft)" } else { "" }
}

fn plural(count: usize, singular: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {singular}s")
    }
}

// ============================================================================
// Scan output
// ============================================================================

/// Format the content inventory of a loaded store.
///
/// Shows every retained entry (drafts marked) in load order, with the
/// source file each entry came from.
pub fn format_scan_output(store: &ContentStore) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Novels".to_string());
    for (i, novel) in store.novels().iter().enumerate() {
        let chapters: Vec<_> = store
            .chapters()
            .iter()
            .filter(|c| c.data.novel == novel.id)
            .collect();
        lines.push(format!(
            "{} {} ({}){}",
            format_index(i + 1),
            novel.data.title,
            plural(chapters.len(), "chapter"),
            draft_marker(novel.data.draft)
        ));
        lines.push(format!("    Source: novels/{}.md", novel.id));
        for (j, chapter) in chapters.iter().enumerate() {
            lines.push(format!(
                "    {} {}{}",
                format_index(j + 1),
                chapter.data.title,
                draft_marker(chapter.data.draft)
            ));
            lines.push(format!("        Source: chapters/{}.md", chapter.id));
        }
    }

    if !store.authors().is_empty() {
        lines.push(String::new());
        lines.push("Authors".to_string());
        for (i, author) in store.authors().iter().enumerate() {
            let name = if author.data.name.is_empty() {
                author.data.pen_name.as_deref().unwrap_or(&author.id)
            } else {
                &author.data.name
            };
            lines.push(format!("{} {}", format_index(i + 1), name));
            lines.push(format!("    Source: authors/{}.md", author.id));
        }
    }

    lines
}

/// Print scan output to stdout.
pub fn print_scan_output(store: &ContentStore) {
    for line in format_scan_output(store) {
        println!("{}", line);
    }
}

// ============================================================================
// Check output
// ============================================================================

/// Format a configuration diagnostics report.
///
/// Findings are listed by severity label with their originating key; the
/// trailing summary line counts errors, warnings and suggestions.
pub fn format_check_report(report: &Report) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push("Configuration".to_string());

    if report.issues.is_empty() {
        lines.push("    no findings".to_string());
        return lines;
    }

    let mut errors = 0;
    let mut warnings = 0;
    let mut infos = 0;
    for issue in &report.issues {
        let label = match issue.severity {
            Severity::Error => {
                errors += 1;
                "error  "
            }
            Severity::Warning => {
                warnings += 1;
                "warning"
            }
            Severity::Info => {
                infos += 1;
                "info   "
            }
        };
        match issue.field {
            Some(field) => lines.push(format!("    {label}  {field}: {}", issue.message)),
            None => lines.push(format!("    {label}  {}", issue.message)),
        }
    }

    lines.push(format!(
        "{}, {}, {}",
        plural(errors, "error"),
        plural(warnings, "warning"),
        plural(infos, "suggestion")
    ));
    lines
}

/// Print a check report to stdout.
pub fn print_check_report(report: &Report) {
    for line in format_check_report(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Build output
// ============================================================================

/// Format the build summary: published novels with chapter counts, followed
/// by the manifest destination.
pub fn format_build_output(manifest: &SiteManifest, destination: &Path) -> Vec<String> {
    let mut lines = Vec::new();
    for (i, novel) in manifest.novels.iter().enumerate() {
        lines.push(format!(
            "{} {} ({})",
            format_index(i + 1),
            novel.title,
            plural(novel.chapters.len(), "chapter")
        ));
    }
    let chapter_total: usize = manifest.novels.iter().map(|n| n.chapters.len()).sum();
    lines.push(format!(
        "Built {}, {}, {} \u{2192} {}",
        plural(manifest.novels.len(), "novel"),
        plural(chapter_total, "chapter"),
        plural(manifest.tags.len(), "tag"),
        destination.display()
    ));
    lines
}

/// Print build output to stdout.
pub fn print_build_output(manifest: &SiteManifest, destination: &Path) {
    for line in format_build_output(manifest, destination) {
        println!("{}", line);
    }
}
