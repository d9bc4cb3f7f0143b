//! End-to-end site generation over a temporary directory tree.
use std::{fs, path::Path};

use guidemark::{
  config::{Config, NavLink, NavSection},
  utils,
};

fn write_file(path: &Path, content: &str) {
  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent).unwrap();
  }
  fs::write(path, content).unwrap();
}

fn guide_config(input_dir: &Path, output_dir: &Path) -> Config {
  Config {
    input_dir: Some(input_dir.to_path_buf()),
    output_dir: output_dir.to_path_buf(),
    title: "A guide to MLOps".to_string(),
    description: "A simple yet complete guide".to_string(),
    // Highlighting drags in the full syntax set; not what these tests probe.
    highlight_code: false,
    topnav: vec![NavLink {
      text: "GitHub".to_string(),
      href: "https://github.com/example/guide".to_string(),
    }],
    sidebar: vec![NavSection {
      title: "The guide".to_string(),
      links: vec![NavLink {
        text: "Step 1".to_string(),
        href: "the-guide/step-1.html".to_string(),
      }],
    }],
    ..Config::default()
  }
}

#[test]
fn generates_a_page_per_document_with_chrome_and_assets() {
  let workdir = tempfile::tempdir().unwrap();
  let input_dir = workdir.path().join("docs");
  let output_dir = workdir.path().join("build");

  write_file(
    &input_dir.join("index.md"),
    "---\ntitle: What is MLOps?\ndescription: An overview\n---\n\
     # What is MLOps?\n\n## The problem\n\nSome text.\n",
  );
  write_file(
    &input_dir.join("the-guide/step-1.md"),
    "# Step 1: Run a simple ML experiment\n\n\
     {% callout type=\"warning\" title=\"Heads up\" %}\nCheck your \
     environment first.\n{% /callout %}\n\n## Run it\n\n```\nmake run\n```\n",
  );

  let config = guide_config(&input_dir, &output_dir);

  let files = utils::markdown::process_markdown_files(&config).unwrap();
  assert_eq!(files.len(), 2);

  utils::ensure_index(&config, &files).unwrap();
  utils::assets::copy_assets(&config).unwrap();

  // index.md became the site index, carrying its own frontmatter
  let index = fs::read_to_string(output_dir.join("index.html")).unwrap();
  assert!(index.contains("<title>What is MLOps? | A guide to MLOps</title>"));
  assert!(index.contains(r#"content="An overview""#));
  assert!(index.contains(r##"<a href="#the-problem">The problem</a>"##));

  // Nested page: depth-relative assets, callout, sidebar active marking
  let step = fs::read_to_string(output_dir.join("the-guide/step-1.html"))
    .unwrap();
  assert!(step.contains(r#"href="../assets/style.css""#));
  assert!(step.contains("callout callout-warning"));
  assert!(step.contains("Heads up"));
  assert!(step.contains(r#"<li class="active">"#));
  assert!(
    step.contains("<title>Step 1: Run a simple ML experiment | A guide to \
                   MLOps</title>")
  );

  // Assets landed next to the pages
  assert!(output_dir.join("assets/style.css").exists());
  assert!(output_dir.join("assets/main.js").exists());
}

#[test]
fn fallback_index_lists_documents_when_none_is_authored() {
  let workdir = tempfile::tempdir().unwrap();
  let input_dir = workdir.path().join("docs");
  let output_dir = workdir.path().join("build");

  write_file(
    &input_dir.join("concepts.md"),
    "# Core concepts\n\ncontent\n",
  );

  let config = guide_config(&input_dir, &output_dir);

  let files = utils::markdown::process_markdown_files(&config).unwrap();
  utils::ensure_index(&config, &files).unwrap();

  let index = fs::read_to_string(output_dir.join("index.html")).unwrap();
  assert!(index.contains(r#"<a href="concepts.html">Core concepts</a>"#));
}

#[test]
fn authored_index_is_not_overwritten_by_the_fallback() {
  let workdir = tempfile::tempdir().unwrap();
  let input_dir = workdir.path().join("docs");
  let output_dir = workdir.path().join("build");

  write_file(&input_dir.join("index.md"), "# Welcome\n");

  let config = guide_config(&input_dir, &output_dir);

  let files = utils::markdown::process_markdown_files(&config).unwrap();
  utils::ensure_index(&config, &files).unwrap();

  let index = fs::read_to_string(output_dir.join("index.html")).unwrap();
  assert!(index.contains("Welcome"));
  // The fallback page would link to the document instead of being it.
  assert!(!index.contains(r#"<a href="index.html">Welcome</a>"#));
}

#[test]
fn custom_stylesheets_are_appended_to_the_bundle() {
  let workdir = tempfile::tempdir().unwrap();
  let input_dir = workdir.path().join("docs");
  let output_dir = workdir.path().join("build");

  write_file(&input_dir.join("index.md"), "# Welcome\n");
  let extra_css = workdir.path().join("extra.css");
  write_file(&extra_css, ".custom-rule { color: red; }");

  let mut config = guide_config(&input_dir, &output_dir);
  config.stylesheet_paths = vec![extra_css];

  fs::create_dir_all(&output_dir).unwrap();
  utils::assets::copy_assets(&config).unwrap();

  let css = fs::read_to_string(output_dir.join("assets/style.css")).unwrap();
  assert!(css.contains(".custom-rule { color: red; }"));
  // The default stylesheet comes first
  assert!(css.find(":root").unwrap() < css.find(".custom-rule").unwrap());
}

#[test]
fn init_writes_a_loadable_config() {
  let workdir = tempfile::tempdir().unwrap();
  let config_path = workdir.path().join("guidemark.toml");

  Config::generate_default_config("toml", &config_path).unwrap();
  let config = Config::from_file(&config_path).unwrap();

  assert_eq!(config.output_dir, Path::new("build"));
  assert!(!config.sidebar.is_empty());
}

#[test]
fn exported_templates_cover_the_embedded_set() {
  let workdir = tempfile::tempdir().unwrap();
  let template_dir = workdir.path().join("templates");

  Config::export_templates(&template_dir, false).unwrap();

  for name in ["default.html", "navbar.html", "footer.html", "default.css",
    "main.js"]
  {
    assert!(template_dir.join(name).exists(), "missing {name}");
  }

  // Without --force a second export must not clobber edits
  fs::write(template_dir.join("default.html"), "edited").unwrap();
  Config::export_templates(&template_dir, false).unwrap();
  let kept = fs::read_to_string(template_dir.join("default.html")).unwrap();
  assert_eq!(kept, "edited");
}

#[test]
fn user_scripts_are_copied_and_referenced() {
  let workdir = tempfile::tempdir().unwrap();
  let input_dir = workdir.path().join("docs");
  let output_dir = workdir.path().join("build");

  write_file(&input_dir.join("index.md"), "# Welcome\n");
  let script = workdir.path().join("parallax.js");
  write_file(&script, "console.log('scroll');");

  let mut config = guide_config(&input_dir, &output_dir);
  config.script_paths = vec![script];

  let files = utils::markdown::process_markdown_files(&config).unwrap();
  utils::ensure_index(&config, &files).unwrap();
  utils::assets::copy_assets(&config).unwrap();

  assert!(output_dir.join("assets/parallax.js").exists());
  let index = fs::read_to_string(output_dir.join("index.html")).unwrap();
  assert!(
    index.contains(r#"<script defer src="assets/parallax.js"></script>"#)
  );
}
