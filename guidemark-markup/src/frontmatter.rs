//! YAML frontmatter handling.
//!
//! Guide documents may open with a `---`-fenced YAML block carrying page
//! metadata. Parsing is strict at the API level ([`parse`]) and graceful at
//! the pipeline level ([`extract`]): a malformed block is logged and dropped
//! rather than failing the page render.
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from strict frontmatter parsing.
#[derive(Debug, Error)]
pub enum FrontmatterError {
  #[error("frontmatter block is not terminated by a closing `---` fence")]
  Unterminated,

  #[error("invalid YAML in frontmatter: {0}")]
  Yaml(#[from] serde_yaml::Error),
}

/// Page metadata from the document's frontmatter block.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Frontmatter {
  /// Page title, overriding the first level-1 heading.
  #[serde(default)]
  pub title: Option<String>,

  /// Page description, used for the HTML meta description.
  #[serde(default)]
  pub description: Option<String>,

  /// Any further keys the author wrote, preserved as-is.
  #[serde(flatten)]
  pub extra: BTreeMap<String, serde_yaml::Value>,
}

/// Split the opening fence block off a document.
/// Returns `(yaml, body)`, or `None` when there is no complete block.
fn split_fenced(source: &str) -> Option<(&str, &str)> {
  let rest = source
    .strip_prefix("---")
    .and_then(|r| r.strip_prefix('\n').or_else(|| r.strip_prefix("\r\n")))?;

  let mut offset = 0;
  for line in rest.split_inclusive('\n') {
    if line.trim_end() == "---" {
      return Some((&rest[..offset], &rest[offset + line.len()..]));
    }
    offset += line.len();
  }
  None
}

/// Parse the frontmatter block of a document, if it has one.
///
/// Returns `Ok(None)` when the document does not start with a fence, and
/// `Ok(Some((frontmatter, body)))` otherwise, where `body` is the content
/// after the closing fence.
///
/// # Errors
///
/// Returns an error when the opening fence is never closed or the block is
/// not valid YAML.
pub fn parse(
  source: &str,
) -> Result<Option<(Frontmatter, &str)>, FrontmatterError> {
  let opens_fence = source
    .strip_prefix("---")
    .is_some_and(|r| r.is_empty() || r.starts_with('\n') || r.starts_with("\r\n"));
  if !opens_fence {
    return Ok(None);
  }

  let Some((yaml, body)) = split_fenced(source) else {
    // "---" on its own is a thematic break, not an unterminated block.
    if source.trim_end() == "---" {
      return Ok(None);
    }
    return Err(FrontmatterError::Unterminated);
  };

  let frontmatter = if yaml.trim().is_empty() {
    Frontmatter::default()
  } else {
    serde_yaml::from_str(yaml)?
  };

  Ok(Some((frontmatter, body)))
}

/// Extract frontmatter without failing the render.
///
/// Malformed blocks are logged and replaced with empty metadata; the body is
/// preserved either way.
#[must_use]
pub fn extract(source: &str) -> (Frontmatter, &str) {
  match parse(source) {
    Ok(Some((frontmatter, body))) => (frontmatter, body),
    Ok(None) => (Frontmatter::default(), source),
    Err(err) => {
      log::warn!("ignoring malformed frontmatter: {err}");
      let body = split_fenced(source).map_or(source, |(_, body)| body);
      (Frontmatter::default(), body)
    },
  }
}
