//! Behavior of table-of-contents heading collection over document trees.
use guidemark_markup::{
  Heading,
  HeadingAttrs,
  MarkupOptionsBuilder,
  MarkupProcessor,
  Node,
  collect_headings,
};

fn text(value: &str) -> Node {
  Node::Text(value.to_string())
}

fn heading(id: &str, level: u8, children: Vec<Node>) -> Node {
  Node::Heading {
    attrs: HeadingAttrs {
      id: id.to_string(),
      level,
    },
    children,
  }
}

fn container(children: Vec<Node>) -> Node {
  Node::Container { children }
}

fn element(name: &str, children: Vec<Node>) -> Node {
  Node::Element {
    name: name.to_string(),
    children,
  }
}

fn descriptor(id: &str, level: u8, title: &str) -> Heading {
  Heading {
    id:    id.to_string(),
    level,
    title: title.to_string(),
  }
}

#[test]
fn absent_node_yields_empty_sequence() {
  let mut sections = Vec::new();
  collect_headings(None, &mut sections);
  assert!(sections.is_empty());
}

#[test]
fn empty_tree_yields_empty_sequence() {
  let mut sections = Vec::new();
  collect_headings(Some(&container(Vec::new())), &mut sections);
  assert!(sections.is_empty());
}

#[test]
fn tree_without_headings_yields_empty_sequence() {
  let tree = container(vec![
    element("list", vec![
      container(vec![text("one")]),
      container(vec![element("em", vec![text("two")])]),
    ]),
    container(vec![text("a paragraph")]),
  ]);

  let mut sections = Vec::new();
  collect_headings(Some(&tree), &mut sections);
  assert!(sections.is_empty());
}

#[test]
fn order_is_preorder_document_order_across_depths() {
  // Headings at mixed depths: nesting must not reorder anything.
  let tree = container(vec![
    heading("first", 1, vec![text("First")]),
    container(vec![
      heading("second", 2, vec![text("Second")]),
      element("block", vec![heading("third", 3, vec![text("Third")])]),
    ]),
    heading("fourth", 2, vec![text("Fourth")]),
  ]);

  let mut sections = Vec::new();
  collect_headings(Some(&tree), &mut sections);

  let ids: Vec<&str> = sections.iter().map(|h| h.id.as_str()).collect();
  assert_eq!(ids, vec!["first", "second", "third", "fourth"]);
}

#[test]
fn descriptor_combines_attributes_with_title() {
  let tree = heading("intro", 2, vec![text("Introduction")]);

  let mut sections = Vec::new();
  collect_headings(Some(&tree), &mut sections);

  assert_eq!(sections, vec![descriptor("intro", 2, "Introduction")]);
}

#[test]
fn heading_with_nested_first_child_is_skipped_but_rest_collected() {
  let tree = container(vec![
    heading("styled", 2, vec![
      element("strong", vec![text("Styled")]),
      text(" heading"),
    ]),
    heading("plain", 2, vec![text("Plain")]),
  ]);

  let mut sections = Vec::new();
  collect_headings(Some(&tree), &mut sections);

  assert_eq!(sections, vec![descriptor("plain", 2, "Plain")]);
}

#[test]
fn headings_nested_under_skipped_heading_are_still_collected() {
  // Contrived shape, but the walk must not prune subtrees.
  let tree = heading("outer", 1, vec![
    element("em", vec![text("Outer")]),
    heading("inner", 2, vec![text("Inner")]),
  ]);

  let mut sections = Vec::new();
  collect_headings(Some(&tree), &mut sections);

  assert_eq!(sections, vec![descriptor("inner", 2, "Inner")]);
}

#[test]
fn collection_is_idempotent_across_fresh_accumulators() {
  let tree = container(vec![
    heading("a", 1, vec![text("A")]),
    heading("b", 2, vec![text("B")]),
  ]);

  let mut first = Vec::new();
  collect_headings(Some(&tree), &mut first);

  let mut second = Vec::new();
  collect_headings(Some(&tree), &mut second);

  assert_eq!(first, second);
}

#[test]
fn prepopulated_accumulator_is_appended_to() {
  let tree = heading("new", 2, vec![text("New")]);

  let mut sections = vec![descriptor("existing", 1, "Existing")];
  collect_headings(Some(&tree), &mut sections);

  assert_eq!(sections, vec![
    descriptor("existing", 1, "Existing"),
    descriptor("new", 2, "New"),
  ]);
}

#[test]
fn empty_text_first_child_still_counts_as_text() {
  // The rule is "first child is plain text", not "non-empty text".
  let tree = heading("blank", 3, vec![text("")]);

  let mut sections = Vec::new();
  collect_headings(Some(&tree), &mut sections);

  assert_eq!(sections, vec![descriptor("blank", 3, "")]);
}

// End-to-end: the same ordering guarantees hold for trees built by the
// Markdown pipeline, not just hand-assembled ones.

fn render_toc(markdown: &str) -> Vec<Heading> {
  let processor = MarkupProcessor::new(
    MarkupOptionsBuilder::new().highlight_code(false).build(),
  );
  processor.render(markdown).toc
}

#[test]
fn pipeline_preserves_document_order() {
  let toc = render_toc(
    "# Top\n\nintro\n\n## Middle\n\n> ### Quoted\n\n## Tail\n",
  );

  let titles: Vec<&str> = toc.iter().map(|h| h.title.as_str()).collect();
  assert_eq!(titles, vec!["Top", "Middle", "Quoted", "Tail"]);

  let levels: Vec<u8> = toc.iter().map(|h| h.level).collect();
  assert_eq!(levels, vec![1, 2, 3, 2]);
}

#[test]
fn pipeline_skips_headings_opening_with_markup() {
  let toc = render_toc("# **Bold** opener\n\n## Plain heading\n");

  assert_eq!(toc.len(), 1);
  assert_eq!(toc[0].title, "Plain heading");
}

#[test]
fn pipeline_keeps_heading_with_trailing_markup() {
  // Only the first child decides; the title is the leading text run.
  let toc = render_toc("## Install with `pip`\n");

  assert_eq!(toc.len(), 1);
  assert_eq!(toc[0].title, "Install with ");
  assert_eq!(toc[0].id, "install-with-pip");
}

#[test]
fn pipeline_rendering_twice_is_structurally_equal() {
  let markdown = "# A\n\n## B {#custom}\n\ntext\n";
  assert_eq!(render_toc(markdown), render_toc(markdown));
}
