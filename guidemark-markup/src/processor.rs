//! The markup processor: Markdown in, rendered page parts out.
use std::sync::{Arc, OnceLock};

use comrak::{
  Arena,
  Options,
  Plugins,
  format_html_with_plugins,
  nodes::{AstNode, NodeValue},
  parse_document,
  plugins::syntect::SyntectAdapter,
};
use regex::Regex;

use crate::{
  callout,
  frontmatter,
  tree::{self, collect_headings},
  types::MarkupResult,
  utils,
};

/// Options for configuring the markup processor.
#[derive(Debug, Clone)]
pub struct MarkupOptions {
  /// Enable GitHub Flavored Markdown extensions (tables, strikethrough,
  /// task lists, autolinks, footnotes).
  pub gfm: bool,

  /// Expand `{% callout %}` blocks.
  pub callouts: bool,

  /// Enable server-side syntax highlighting for code fences.
  pub highlight_code: bool,

  /// Optional: syntax highlighting theme name.
  pub highlight_theme: Option<String>,
}

impl Default for MarkupOptions {
  fn default() -> Self {
    Self {
      gfm:             true,
      callouts:        true,
      highlight_code:  true,
      highlight_theme: None,
    }
  }
}

/// Builder for constructing [`MarkupOptions`] with method chaining.
#[derive(Debug, Clone, Default)]
pub struct MarkupOptionsBuilder {
  options: MarkupOptions,
}

impl MarkupOptionsBuilder {
  /// Create a new builder with default options.
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Enable or disable GitHub Flavored Markdown.
  #[must_use]
  pub const fn gfm(mut self, enabled: bool) -> Self {
    self.options.gfm = enabled;
    self
  }

  /// Enable or disable callout expansion.
  #[must_use]
  pub const fn callouts(mut self, enabled: bool) -> Self {
    self.options.callouts = enabled;
    self
  }

  /// Enable or disable syntax highlighting.
  #[must_use]
  pub const fn highlight_code(mut self, enabled: bool) -> Self {
    self.options.highlight_code = enabled;
    self
  }

  /// Set the syntax highlighting theme.
  #[must_use]
  pub fn highlight_theme<S: Into<String>>(mut self, theme: Option<S>) -> Self {
    self.options.highlight_theme = theme.map(Into::into);
    self
  }

  /// Build the final [`MarkupOptions`].
  #[must_use]
  pub fn build(self) -> MarkupOptions {
    self.options
  }
}

/// Main markup processor.
///
/// Can be cheaply cloned since the syntax highlighter is shared via `Arc`.
#[derive(Clone)]
pub struct MarkupProcessor {
  options:     MarkupOptions,
  highlighter: Option<Arc<SyntectAdapter>>,
}

impl MarkupProcessor {
  /// Create a new processor with the given options.
  #[must_use]
  pub fn new(options: MarkupOptions) -> Self {
    let highlighter = options.highlight_code.then(|| {
      let theme = options.highlight_theme.as_deref().unwrap_or("InspiredGitHub");
      Arc::new(SyntectAdapter::new(Some(theme)))
    });

    Self {
      options,
      highlighter,
    }
  }

  /// Access processor options.
  #[must_use]
  pub const fn options(&self) -> &MarkupOptions {
    &self.options
  }

  /// Render a guide document to HTML, collecting its table of contents,
  /// title and frontmatter along the way.
  ///
  /// This never fails: malformed frontmatter, unknown callout types and
  /// headings without a leading text run all degrade to partial output.
  #[must_use]
  pub fn render(&self, source: &str) -> MarkupResult {
    let (frontmatter, body) = frontmatter::extract(source);

    let prepared = if self.options.callouts {
      callout::expand_callouts(body)
    } else {
      body.to_string()
    };

    let arena = Arena::new();
    let options = self.comrak_options();
    let root = parse_document(&arena, &prepared, &options);

    let document = tree::lower(root);
    let mut toc = Vec::new();
    collect_headings(Some(&document), &mut toc);

    let title = frontmatter.title.clone().or_else(|| {
      toc
        .iter()
        .find(|heading| heading.level == 1)
        .map(|heading| heading.title.trim().to_string())
        .filter(|title| !title.is_empty())
    });

    let html = self.convert(root, &options);

    MarkupResult {
      html,
      toc,
      title,
      frontmatter,
    }
  }

  /// Render the parsed AST to HTML and inject heading anchors.
  fn convert<'a>(&self, root: &'a AstNode<'a>, options: &Options) -> String {
    let mut plugins = Plugins::default();
    if let Some(adapter) = self.highlighter.as_deref() {
      plugins.render.codefence_syntax_highlighter = Some(adapter);
    }

    let mut html = String::new();
    format_html_with_plugins(root, options, &mut html, &plugins)
      .unwrap_or_default();

    let generated = generated_anchor_ids(root);
    inject_heading_anchors(&html, &generated)
  }

  /// Build comrak options from [`MarkupOptions`].
  fn comrak_options(&self) -> Options<'_> {
    let mut options = Options::default();
    if self.options.gfm {
      options.extension.table = true;
      options.extension.footnotes = true;
      options.extension.strikethrough = true;
      options.extension.tasklist = true;
      options.extension.autolink = true;
    }
    options.render.r#unsafe = true;
    // Anchor IDs are injected by hand so they match the collected headings.
    options.extension.header_ids = None;
    options
  }
}

/// Slug IDs for every heading without an explicit `{#id}` anchor, in
/// document order. Consumed positionally by [`inject_heading_anchors`].
fn generated_anchor_ids<'a>(root: &'a AstNode<'a>) -> Vec<String> {
  let mut ids = Vec::new();
  for node in root.descendants() {
    if let NodeValue::Heading(_) = &node.data.borrow().value {
      let flat = tree::flatten_inline(node);
      let (text, explicit) = utils::split_anchor(&flat);
      if explicit.is_none() {
        ids.push(utils::slugify(text));
      }
    }
  }
  ids
}

fn explicit_anchor_regex() -> &'static Regex {
  static ANCHOR_RE: OnceLock<Regex> = OnceLock::new();
  ANCHOR_RE.get_or_init(|| {
    Regex::new(r"<h([1-6])>(.*?)\s*\{#([A-Za-z0-9_-]+)\}(.*?)</h[1-6]>")
      .unwrap_or_else(|_| utils::never_matching_regex())
  })
}

fn plain_heading_regex() -> &'static Regex {
  static PLAIN_RE: OnceLock<Regex> = OnceLock::new();
  PLAIN_RE.get_or_init(|| {
    Regex::new(r"<h([1-6])>").unwrap_or_else(|_| utils::never_matching_regex())
  })
}

/// Give every rendered heading an `id` attribute.
///
/// Explicit `{#id}` markers win and are removed from the visible text; the
/// remaining plain heading tags consume the generated slugs in document
/// order.
fn inject_heading_anchors(html: &str, generated: &[String]) -> String {
  let explicit = explicit_anchor_regex().replace_all(html, |caps: &regex::Captures| {
    let level = &caps[1];
    let prefix = &caps[2];
    let id = &caps[3];
    let suffix = &caps[4];
    format!("<h{level} id=\"{id}\">{prefix}{suffix}</h{level}>")
  });

  let mut ids = generated.iter();
  plain_heading_regex()
    .replace_all(&explicit, |caps: &regex::Captures| {
      ids.next().map_or_else(
        || caps[0].to_string(),
        |id| format!("<h{} id=\"{}\">", &caps[1], id),
      )
    })
    .to_string()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn processor() -> MarkupProcessor {
    // Highlighting is covered separately; keep unit tests cheap.
    MarkupProcessor::new(
      MarkupOptionsBuilder::new().highlight_code(false).build(),
    )
  }

  #[test]
  fn generated_anchor_matches_toc_id() {
    let result = processor().render("## What is MLOps?\n");
    assert_eq!(result.toc[0].id, "what-is-mlops");
    assert!(result.html.contains("<h2 id=\"what-is-mlops\">"));
  }

  #[test]
  fn explicit_anchor_wins() {
    let result = processor().render("## Custom {#custom-id}\n");
    assert_eq!(result.toc[0].id, "custom-id");
    assert_eq!(result.toc[0].title, "Custom");
    assert!(result.html.contains("<h2 id=\"custom-id\">Custom</h2>"));
  }

  #[test]
  fn mixed_explicit_and_generated_anchors() {
    let source = "# One\n\n## Two {#second}\n\n## Three\n";
    let result = processor().render(source);
    assert!(result.html.contains("<h1 id=\"one\">"));
    assert!(result.html.contains("<h2 id=\"second\">"));
    assert!(result.html.contains("<h2 id=\"three\">"));
  }

  #[test]
  fn frontmatter_title_wins_over_heading() {
    let source = "---\ntitle: From Frontmatter\n---\n# From Heading\n";
    let result = processor().render(source);
    assert_eq!(result.title.as_deref(), Some("From Frontmatter"));
  }

  #[test]
  fn title_falls_back_to_first_h1() {
    let result = processor().render("## Minor\n\n# Major\n");
    assert_eq!(result.title.as_deref(), Some("Major"));
  }

  #[test]
  fn gfm_tables_render() {
    let source = "| a | b |\n|---|---|\n| 1 | 2 |\n";
    let result = processor().render(source);
    assert!(result.html.contains("<table>"));
  }

  #[test]
  fn callouts_render_through_the_pipeline() {
    let source =
      "{% callout type=\"check\" %}\nAll **good**.\n{% /callout %}\n";
    let result = processor().render(source);
    assert!(result.html.contains("callout-check"));
    assert!(result.html.contains("<strong>good</strong>"));
  }
}
