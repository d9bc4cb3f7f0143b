//! Small shared helpers: slugs, anchor markers, file collection.
use std::{path::PathBuf, sync::OnceLock};

use regex::Regex;
use walkdir::WalkDir;

/// Slugify a string for use as an anchor ID.
/// Converts to lowercase, replaces non-alphanumeric characters with dashes,
/// and trims leading/trailing dashes.
#[must_use]
pub fn slugify(text: &str) -> String {
  text
    .to_lowercase()
    .replace(|c: char| !c.is_alphanumeric() && c != '-' && c != '_', "-")
    .trim_matches('-')
    .to_string()
}

fn anchor_suffix_regex() -> &'static Regex {
  static ANCHOR_RE: OnceLock<Regex> = OnceLock::new();
  ANCHOR_RE.get_or_init(|| {
    Regex::new(r"\s*\{#([A-Za-z0-9_-]+)\}\s*$")
      .unwrap_or_else(|_| never_matching_regex())
  })
}

/// Split a trailing explicit anchor marker (`Title {#id}`) off a heading
/// text. Returns the text without the marker and the anchor ID, if any.
#[must_use]
pub fn split_anchor(text: &str) -> (&str, Option<&str>) {
  anchor_suffix_regex().captures(text).map_or_else(
    || (text.trim_end(), None),
    |caps| {
      let id = caps.get(1).map(|m| m.as_str());
      let end = caps.get(0).map_or(text.len(), |m| m.start());
      (text[..end].trim_end(), id)
    },
  )
}

/// Remove a trailing explicit anchor marker from heading text, if present.
#[must_use]
pub fn strip_anchor(text: &str) -> String {
  anchor_suffix_regex().replace(text, "").to_string()
}

/// Collect all Markdown files under a directory, sorted for deterministic
/// output.
#[must_use]
pub fn collect_markdown_files(input_dir: &std::path::Path) -> Vec<PathBuf> {
  let mut files: Vec<PathBuf> = WalkDir::new(input_dir)
    .follow_links(true)
    .into_iter()
    .filter_map(std::result::Result::ok)
    .filter(|entry| {
      entry.path().is_file()
        && entry.path().extension().is_some_and(|ext| ext == "md")
    })
    .map(|entry| entry.path().to_path_buf())
    .collect();
  files.sort();
  files
}

/// Create a regex that never matches anything.
///
/// Used as a fallback when a static pattern fails to compile, which is safer
/// than a trivial pattern like `^$` that would match empty strings.
///
/// # Panics
///
/// Panics if the fallback pattern `^\b$` fails to compile, which should
/// never happen.
#[must_use]
#[allow(clippy::unwrap_used, reason = "Both patterns are known-valid")]
pub fn never_matching_regex() -> Regex {
  // Asserts something impossible, so it can never match.
  Regex::new(r"[^\s\S]").unwrap_or_else(|_| Regex::new(r"^\b$").unwrap())
}
