//! # guidemark-markup
//!
//! Markup pipeline for the guidemark site generator: Markdown processing
//! with YAML frontmatter, callout blocks, and table-of-contents extraction
//! over a typed document tree.
//!
//! ## Quick Start
//!
//! ```rust
//! use guidemark_markup::{MarkupOptions, MarkupProcessor};
//!
//! let processor = MarkupProcessor::new(MarkupOptions::default());
//! let result = processor.render("# Hello World\n\nThis is **bold** text.\n");
//!
//! assert!(result.html.contains("<strong>bold</strong>"));
//! assert_eq!(result.toc[0].title, "Hello World");
//! ```
//!
//! ## Pipeline
//!
//! [`MarkupProcessor::render`] runs a fixed sequence per document:
//!
//! 1. Split the YAML frontmatter block, if any ([`frontmatter`]).
//! 2. Expand `{% callout %}` blocks into HTML divs ([`callout`]).
//! 3. Parse the remaining Markdown with comrak.
//! 4. Lower the comrak AST into the [`Node`] document tree and collect the
//!    [`Heading`] sequence for the table of contents ([`collect_headings`]).
//! 5. Render HTML, highlighting code fences and injecting heading anchors.
//!
//! The heading collection step never fails: headings that do not open with a
//! plain text run are left out of the table of contents rather than aborting
//! the render.

pub mod callout;
pub mod frontmatter;
mod processor;
mod tree;
mod types;
pub mod utils;

pub use crate::{
  frontmatter::{Frontmatter, FrontmatterError},
  processor::{MarkupOptions, MarkupOptionsBuilder, MarkupProcessor},
  tree::{HeadingAttrs, Node, collect_headings},
  types::{Heading, MarkupResult},
};
