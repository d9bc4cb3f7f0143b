//! Callout blocks.
//!
//! Guide pages highlight asides with a tag-style block:
//!
//! ```markdown
//! {% callout type="warning" title="Watch out" %}
//! The body is regular Markdown.
//! {% /callout %}
//! ```
//!
//! Expansion happens before Markdown parsing and is code-fence aware, so a
//! callout marker inside a ``` fence is left untouched. The body stays
//! Markdown; the surrounding div is emitted with blank lines so the parser
//! processes the body normally.
use std::{iter::Peekable, str::Lines, sync::OnceLock};

use regex::Regex;

use crate::utils::never_matching_regex;

/// The callout flavors a guide page may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalloutKind {
  Caution,
  Check,
  Note,
  Warning,
}

impl CalloutKind {
  /// Parse an author-written `type` attribute.
  #[must_use]
  pub fn parse(value: &str) -> Option<Self> {
    match value {
      "caution" => Some(Self::Caution),
      "check" => Some(Self::Check),
      "note" => Some(Self::Note),
      "warning" => Some(Self::Warning),
      _ => None,
    }
  }

  /// CSS class suffix for the rendered div.
  #[must_use]
  pub const fn class(self) -> &'static str {
    match self {
      Self::Caution => "caution",
      Self::Check => "check",
      Self::Note => "note",
      Self::Warning => "warning",
    }
  }

  /// Default title shown when the author did not provide one.
  #[must_use]
  pub const fn label(self) -> &'static str {
    match self {
      Self::Caution => "Caution",
      Self::Check => "Check",
      Self::Note => "Note",
      Self::Warning => "Warning",
    }
  }
}

impl Default for CalloutKind {
  fn default() -> Self {
    Self::Note
  }
}

fn open_regex() -> &'static Regex {
  static OPEN_RE: OnceLock<Regex> = OnceLock::new();
  OPEN_RE.get_or_init(|| {
    Regex::new(r"^\{%\s*callout\b(?P<attrs>[^%]*)%\}$")
      .unwrap_or_else(|_| never_matching_regex())
  })
}

fn close_regex() -> &'static Regex {
  static CLOSE_RE: OnceLock<Regex> = OnceLock::new();
  CLOSE_RE.get_or_init(|| {
    Regex::new(r"^\{%\s*/callout\s*%\}$").unwrap_or_else(|_| never_matching_regex())
  })
}

fn attr_regex() -> &'static Regex {
  static ATTR_RE: OnceLock<Regex> = OnceLock::new();
  ATTR_RE.get_or_init(|| {
    Regex::new(r#"(\w+)="([^"]*)""#).unwrap_or_else(|_| never_matching_regex())
  })
}

/// Tracks ``` / ~~~ fences so block markers inside code are not expanded.
#[derive(Default)]
struct FenceTracker {
  open:  Option<char>,
  count: usize,
}

impl FenceTracker {
  fn observe(&mut self, line: &str) {
    let trimmed = line.trim_start();
    if !(trimmed.starts_with("```") || trimmed.starts_with("~~~")) {
      return;
    }

    let Some(fence_char) = trimmed.chars().next() else {
      return;
    };
    let fence_count = trimmed.chars().take_while(|&c| c == fence_char).count();
    if fence_count < 3 {
      return;
    }

    match self.open {
      None => {
        self.open = Some(fence_char);
        self.count = fence_count;
      },
      Some(open) if open == fence_char && fence_count >= self.count => {
        self.open = None;
        self.count = 0;
      },
      Some(_) => {},
    }
  }

  const fn in_code(&self) -> bool {
    self.open.is_some()
  }
}

/// Expand every callout block in `content` into its HTML wrapper, leaving
/// everything else (including fenced code) untouched.
#[must_use]
pub fn expand_callouts(content: &str) -> String {
  let mut result: Vec<String> = Vec::new();
  let mut lines = content.lines().peekable();
  let mut fences = FenceTracker::default();

  while let Some(line) = lines.next() {
    fences.observe(line);

    if !fences.in_code() {
      if let Some(caps) = open_regex().captures(line.trim()) {
        let (kind, title) = parse_attrs(&caps["attrs"]);
        let (body, terminated) = collect_body(&mut lines);

        if terminated {
          result.push(render_callout(kind, title.as_deref(), &body));
        } else {
          // No closing tag anywhere: keep the source as written.
          log::warn!("callout block without a closing tag, leaving as-is");
          result.push(line.to_string());
          if !body.is_empty() {
            result.push(body);
          }
        }
        continue;
      }
    }

    result.push(line.to_string());
  }

  result.join("\n")
}

/// Collect raw body lines until the closing tag, fence-aware.
/// Returns the body and whether a closing tag was found.
fn collect_body(lines: &mut Peekable<Lines>) -> (String, bool) {
  let mut body: Vec<&str> = Vec::new();
  let mut fences = FenceTracker::default();

  for line in lines.by_ref() {
    fences.observe(line);
    if !fences.in_code() && close_regex().is_match(line.trim()) {
      return (body.join("\n"), true);
    }
    body.push(line);
  }

  (body.join("\n"), false)
}

fn parse_attrs(attrs: &str) -> (CalloutKind, Option<String>) {
  let mut kind = CalloutKind::default();
  let mut title = None;

  for caps in attr_regex().captures_iter(attrs) {
    match &caps[1] {
      "type" => {
        kind = CalloutKind::parse(&caps[2]).unwrap_or_else(|| {
          // The original theme treats this as an authoring error; rendering
          // a note is more useful than failing the page.
          log::warn!("unknown callout type {:?}, falling back to note", &caps[2]);
          CalloutKind::Note
        });
      },
      "title" => title = Some(caps[2].to_string()),
      other => log::debug!("ignoring unknown callout attribute {other:?}"),
    }
  }

  (kind, title)
}

fn render_callout(kind: CalloutKind, title: Option<&str>, body: &str) -> String {
  let heading = title.map_or_else(
    || kind.label().to_string(),
    |t| html_escape::encode_text(t).to_string(),
  );

  format!(
    "<div class=\"callout callout-{}\">\n<p \
     class=\"callout-title\">{}</p>\n\n{}\n\n</div>",
    kind.class(),
    heading,
    body.trim()
  )
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn expands_typed_callout() {
    let src = "{% callout type=\"warning\" title=\"Careful\" %}\nMind the \
               gap.\n{% /callout %}";
    let out = expand_callouts(src);
    assert!(out.contains("<div class=\"callout callout-warning\">"));
    assert!(out.contains("<p class=\"callout-title\">Careful</p>"));
    assert!(out.contains("Mind the gap."));
  }

  #[test]
  fn type_defaults_to_note() {
    let out = expand_callouts("{% callout %}\nhello\n{% /callout %}");
    assert!(out.contains("callout-note"));
    assert!(out.contains("<p class=\"callout-title\">Note</p>"));
  }

  #[test]
  fn unknown_type_falls_back_to_note() {
    let out =
      expand_callouts("{% callout type=\"danger\" %}\nx\n{% /callout %}");
    assert!(out.contains("callout-note"));
  }

  #[test]
  fn markers_inside_code_fences_are_untouched() {
    let src = "```\n{% callout %}\nnot a callout\n{% /callout %}\n```\n";
    let out = expand_callouts(src);
    assert!(!out.contains("<div class=\"callout"));
    assert!(out.contains("{% callout %}"));
  }

  #[test]
  fn closing_marker_inside_body_fence_is_ignored() {
    let src = "{% callout %}\n```\n{% /callout %}\n```\n{% /callout %}";
    let out = expand_callouts(src);
    assert!(out.contains("<div class=\"callout callout-note\">"));
    // The fenced marker stays inside the body.
    assert!(out.contains("```\n{% /callout %}\n```"));
  }

  #[test]
  fn unterminated_callout_is_left_as_written() {
    let src = "{% callout type=\"check\" %}\nno closing tag";
    let out = expand_callouts(src);
    assert!(!out.contains("<div class=\"callout"));
    assert!(out.contains("{% callout type=\"check\" %}"));
    assert!(out.contains("no closing tag"));
  }

  #[test]
  fn title_is_html_escaped() {
    let src = "{% callout title=\"a <b> c\" %}\nx\n{% /callout %}";
    let out = expand_callouts(src);
    assert!(out.contains("a &lt;b&gt; c"));
  }
}
