//! Typed document tree and heading collection.
//!
//! The Markdown parser produces a loosely-shaped AST; this module lowers it
//! into a small tagged-variant tree that the rest of the pipeline reads.
//! Heading attributes are a typed record rather than a free-form map, so the
//! collector needs no runtime shape-checking.
use comrak::nodes::{AstNode, NodeHeading, NodeValue};

use crate::{types::Heading, utils};

/// Typed attribute record carried by every heading node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingAttrs {
  /// Anchor ID: the explicit `{#id}` suffix when the author wrote one,
  /// otherwise a slug of the heading's flattened inline text.
  pub id:    String,
  /// Heading level (1-6).
  pub level: u8,
}

/// A node in the lowered document tree.
///
/// The tree is immutable once built and lives for a single page render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
  /// Section heading with its typed attribute record.
  Heading {
    attrs:    HeadingAttrs,
    children: Vec<Node>,
  },

  /// Structural grouping with no tag of its own (document root, paragraph,
  /// list item, block quote).
  Container { children: Vec<Node> },

  /// Plain text leaf.
  Text(String),

  /// Any other named element (emphasis, link, code, list, table, ...).
  Element { name: String, children: Vec<Node> },
}

impl Node {
  /// Child nodes, in document order. Text leaves have none.
  #[must_use]
  pub fn children(&self) -> &[Node] {
    match self {
      Self::Heading { children, .. }
      | Self::Container { children }
      | Self::Element { children, .. } => children,
      Self::Text(_) => &[],
    }
  }

  /// The text value of a plain text leaf.
  #[must_use]
  pub fn as_text(&self) -> Option<&str> {
    match self {
      Self::Text(text) => Some(text),
      _ => None,
    }
  }
}

/// Collect heading descriptors from a document tree, in pre-order document
/// order, appending to the caller-supplied accumulator.
///
/// A heading contributes a descriptor only when its first child is a plain
/// text leaf; the descriptor combines the heading's attribute record with
/// that text as its title. Headings that open with inline markup instead of
/// text are deliberately left out of the table of contents -- their
/// descendants and siblings are still visited. Malformed shapes are skipped,
/// never reported: a partial table of contents is preferable to a failed
/// page render.
pub fn collect_headings(node: Option<&Node>, sections: &mut Vec<Heading>) {
  let Some(node) = node else {
    return;
  };

  if let Node::Heading { attrs, children } = node {
    if let Some(title) = children.first().and_then(Node::as_text) {
      sections.push(Heading {
        id:    attrs.id.clone(),
        level: attrs.level,
        title: title.to_string(),
      });
    }
  }

  for child in node.children() {
    collect_headings(Some(child), sections);
  }
}

/// Lower a comrak AST into the typed document tree.
pub(crate) fn lower<'a>(root: &'a AstNode<'a>) -> Node {
  lower_node(root).unwrap_or(Node::Container {
    children: Vec::new(),
  })
}

fn lower_node<'a>(ast: &'a AstNode<'a>) -> Option<Node> {
  let value = &ast.data.borrow().value;
  match value {
    NodeValue::Document
    | NodeValue::Paragraph
    | NodeValue::BlockQuote
    | NodeValue::Item(_)
    | NodeValue::TaskItem(_) => {
      Some(Node::Container {
        children: lower_children(ast),
      })
    },

    NodeValue::Heading(NodeHeading { level, .. }) => {
      Some(lower_heading(ast, *level))
    },

    NodeValue::Text(text) => Some(Node::Text(text.to_string())),

    // Soft and hard breaks are whitespace as far as the tree is concerned.
    NodeValue::SoftBreak | NodeValue::LineBreak => {
      Some(Node::Text(" ".to_string()))
    },

    NodeValue::Code(code) => {
      Some(Node::Element {
        name:     "code".to_string(),
        children: vec![Node::Text(code.literal.clone())],
      })
    },

    NodeValue::CodeBlock(block) => {
      Some(Node::Element {
        name:     "code-block".to_string(),
        children: vec![Node::Text(block.literal.clone())],
      })
    },

    NodeValue::HtmlInline(raw) => {
      Some(Node::Element {
        name:     "html".to_string(),
        children: vec![Node::Text(raw.clone())],
      })
    },

    NodeValue::HtmlBlock(block) => {
      Some(Node::Element {
        name:     "html".to_string(),
        children: vec![Node::Text(block.literal.clone())],
      })
    },

    // Frontmatter never reaches the parser, but comrak models it anyway.
    NodeValue::FrontMatter(_) => None,

    other => {
      Some(Node::Element {
        name:     element_name(other).to_string(),
        children: lower_children(ast),
      })
    },
  }
}

fn lower_children<'a>(ast: &'a AstNode<'a>) -> Vec<Node> {
  ast.children().filter_map(lower_node).collect()
}

/// Lower a heading node, resolving its attribute record.
///
/// The anchor marker (`{#id}`) is stripped from the text children so that
/// descriptor titles never carry it.
fn lower_heading<'a>(ast: &'a AstNode<'a>, level: u8) -> Node {
  let flat = flatten_inline(ast);
  let (text, explicit) = utils::split_anchor(&flat);
  let id = explicit.map_or_else(|| utils::slugify(text), str::to_string);

  let children = lower_children(ast)
    .into_iter()
    .map(|child| {
      match child {
        Node::Text(t) => Node::Text(utils::strip_anchor(&t)),
        other => other,
      }
    })
    .collect();

  Node::Heading {
    attrs: HeadingAttrs { id, level },
    children,
  }
}

/// Flatten the inline content of a node into plain text.
///
/// Text and inline code contribute their literal content; soft breaks become
/// spaces; images and other non-text inlines contribute nothing.
pub(crate) fn flatten_inline<'a>(ast: &'a AstNode<'a>) -> String {
  let mut text = String::new();
  for node in ast.descendants().skip(1) {
    match &node.data.borrow().value {
      NodeValue::Text(t) => text.push_str(t),
      NodeValue::Code(code) => text.push_str(&code.literal),
      NodeValue::SoftBreak | NodeValue::LineBreak => text.push(' '),
      _ => {},
    }
  }
  text
}

fn element_name(value: &NodeValue) -> &'static str {
  match value {
    NodeValue::Emph => "em",
    NodeValue::Strong => "strong",
    NodeValue::Strikethrough => "del",
    NodeValue::Superscript => "sup",
    NodeValue::Link(_) => "link",
    NodeValue::Image(_) => "image",
    NodeValue::List(_) => "list",
    NodeValue::Table(_) => "table",
    NodeValue::TableRow(_) => "table-row",
    NodeValue::TableCell => "table-cell",
    NodeValue::ThematicBreak => "hr",
    NodeValue::FootnoteDefinition(_) => "footnote",
    NodeValue::FootnoteReference(_) => "footnote-ref",
    NodeValue::DescriptionList => "description-list",
    NodeValue::DescriptionItem(_) => "description-item",
    NodeValue::DescriptionTerm => "description-term",
    NodeValue::DescriptionDetails => "description-details",
    _ => "block",
  }
}
