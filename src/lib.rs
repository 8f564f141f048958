//! # Serial Press
//!
//! A minimal static site build tool for serialized web novels. Your
//! filesystem is the data source: markdown files with YAML front matter
//! become content collections, environment variables become site
//! configuration, and the build derives every listing, navigation link and
//! aggregate view a page generator needs.
//!
//! # Architecture: Scan → Derive → Emit
//!
//! ```text
//! 1. Scan     content/           →  ContentStore   (files → typed entries)
//! 2. Derive   store + env        →  views          (ordering, adjacency, tags)
//! 3. Emit     config + views     →  dist/site.json (the site manifest)
//! ```
//!
//! The middle stage is a set of pure functions over an immutable snapshot:
//! unit tests exercise every ordering and navigation rule without touching
//! the filesystem, and the emitted manifest is human-readable JSON you can
//! inspect when a page looks wrong.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | walks the content directory, splits front matter, assembles the collections |
//! | [`content`] | the [`content::ContentStore`] snapshot: integrity check, listings, adjacency, tags, authors |
//! | [`render`] | markdown → HTML, heading extraction with slugs, word count, reading time |
//! | [`env`] | environment configuration: field-rule table, typed bundles, diagnostics |
//! | [`envfile`] | `.env` file parsing, merged under the process environment |
//! | [`manifest`] | assembles the JSON site manifest from configuration and store |
//! | [`types`] | content entry types shared between scan and everything downstream |
//! | [`output`] | CLI output formatting — information-first inventories and reports |
//!
//! # Design Decisions
//!
//! ## Degrade, Don't Abort
//!
//! Content problems cost exactly the content they affect. An entry with
//! missing required front matter is dropped with a warning at store
//! construction; a stale chapter link navigates nowhere instead of failing
//! the build; an unknown author id renders as an unregistered byline. The
//! one place this flips is configuration: a value that is *provided* but
//! malformed is an error, because silently ignoring an operator's explicit
//! setting hides typos until the deployed site is wrong.
//!
//! ## Explicit Field Rules Over a Schema Library
//!
//! Configuration validation is a static table of `{key, rule, fallback}`
//! entries and one generic resolution function ([`env::resolve_field`]).
//! Every supported key, its format and its default is readable in one
//! screen of [`env`], and the same table drives strict resolution, the
//! never-fails fallback path, and the `check` diagnostics.
//!
//! ## Configuration Is Resolved Once
//!
//! The CLI resolves the environment into a [`env::Configuration`] at
//! startup and threads it explicitly to consumers. There is no global
//! config singleton and no load-order dependency; call sites that may hold
//! either raw or resolved values pass the tagged [`env::ConfigSource`].
//!
//! ## Front Matter Parses Leniently, Validates Centrally
//!
//! Every metadata field defaults, so a sparse or partially broken front
//! matter block still deserializes. Whether an entry is *usable* is decided
//! by one integrity check at store construction — not scattered across
//! parse-time errors and downstream `Option` handling.

pub mod content;
pub mod env;
pub mod envfile;
pub mod manifest;
pub mod output;
pub mod render;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
