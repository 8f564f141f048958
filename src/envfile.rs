//! `.env`-style configuration file parsing.
//!
//! A flat `KEY=VALUE` format: one pair per line, `#` comments, blank lines
//! ignored, optional single or double quotes around values. Loading is
//! explicit — nothing in this crate reads a `.env` file unless the caller
//! asks for one — and the process environment always wins over file values,
//! so a deployment can override a checked-in `.env` without editing it.

use crate::env::RawEnv;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EnvFileError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed line {line} (expected KEY=VALUE): {content:?}")]
    MalformedLine { line: usize, content: String },
}

/// Parse `.env` content into a raw key/value mapping.
///
/// Later occurrences of a key override earlier ones. A non-comment line
/// without `=` is an error — silently skipping it would hide typos.
pub fn parse(content: &str) -> Result<RawEnv, EnvFileError> {
    let mut raw = RawEnv::new();
    for (index, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            return Err(EnvFileError::MalformedLine {
                line: index + 1,
                content: line.to_string(),
            });
        };
        let key = key.trim().trim_start_matches("export ").trim();
        raw.insert(key.to_string(), unquote(value.trim()).to_string());
    }
    Ok(raw)
}

fn unquote(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'"' || first == b'\'') {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// Read a `.env` file from disk.
///
/// Returns `Ok(None)` if the file does not exist; a file that exists but
/// does not parse is an error.
pub fn read(path: &Path) -> Result<Option<RawEnv>, EnvFileError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(path)?;
    Ok(Some(parse(&content)?))
}

/// Merge the process environment over an optional `.env` mapping.
pub fn merged_environment(file: Option<RawEnv>) -> RawEnv {
    let mut raw = file.unwrap_or_default();
    raw.extend(std::env::vars());
    raw
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn parses_pairs_comments_and_blanks() {
        let content = "\n# comment\nSITE_TITLE=My Site\n\nSITE_AUTHOR=Jane\n";
        let raw = parse(content).unwrap();
        assert_eq!(raw.get("SITE_TITLE").map(String::as_str), Some("My Site"));
        assert_eq!(raw.get("SITE_AUTHOR").map(String::as_str), Some("Jane"));
        assert_eq!(raw.len(), 2);
    }

    #[test]
    fn strips_matching_quotes() {
        let raw = parse("A=\"quoted\"\nB='single'\nC=\"unbalanced'\n").unwrap();
        assert_eq!(raw.get("A").map(String::as_str), Some("quoted"));
        assert_eq!(raw.get("B").map(String::as_str), Some("single"));
        assert_eq!(raw.get("C").map(String::as_str), Some("\"unbalanced'"));
    }

    #[test]
    fn value_may_contain_equals() {
        let raw = parse("QUERY=a=b&c=d\n").unwrap();
        assert_eq!(raw.get("QUERY").map(String::as_str), Some("a=b&c=d"));
    }

    #[test]
    fn export_prefix_is_accepted() {
        let raw = parse("export SITE_TITLE=Exported\n").unwrap();
        assert_eq!(raw.get("SITE_TITLE").map(String::as_str), Some("Exported"));
    }

    #[test]
    fn later_keys_override_earlier() {
        let raw = parse("A=1\nA=2\n").unwrap();
        assert_eq!(raw.get("A").map(String::as_str), Some("2"));
    }

    #[test]
    fn malformed_line_is_error_with_position() {
        let err = parse("A=1\nnot a pair\n").unwrap_err();
        match err {
            EnvFileError::MalformedLine { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn read_returns_none_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let result = read(&tmp.path().join(".env")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn read_parses_existing_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(".env");
        fs::write(&path, "SITE_TITLE=From File\n").unwrap();
        let raw = read(&path).unwrap().unwrap();
        assert_eq!(raw.get("SITE_TITLE").map(String::as_str), Some("From File"));
    }

    #[test]
    fn process_env_wins_over_file() {
        let mut file = RawEnv::new();
        // PATH is always present in the process environment.
        file.insert("PATH".to_string(), "overridden-by-process".to_string());
        let merged = merged_environment(Some(file));
        assert_ne!(merged.get("PATH").map(String::as_str), Some("overridden-by-process"));
    }
}
