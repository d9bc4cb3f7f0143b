//! Types for the guidemark-markup public API.
use serde::{Deserialize, Serialize};

use crate::frontmatter::Frontmatter;

/// A heading descriptor extracted from a document tree.
///
/// One descriptor is emitted per heading whose first child is a plain text
/// run, in pre-order document order. The sequence of descriptors is the sole
/// input to table-of-contents rendering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Heading {
  /// Anchor ID of the heading (explicit `{#id}` or generated slug).
  pub id:    String,
  /// Heading level (1-6).
  pub level: u8,
  /// Heading text as written (first plain text run only).
  pub title: String,
}

/// Result of rendering a single guide document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarkupResult {
  /// Rendered HTML body.
  pub html: String,

  /// Heading descriptors in document order, for the table of contents.
  pub toc: Vec<Heading>,

  /// Page title: frontmatter `title` if present, else the first level-1
  /// heading.
  pub title: Option<String>,

  /// Parsed frontmatter (empty when the document has none).
  pub frontmatter: Frontmatter,
}
