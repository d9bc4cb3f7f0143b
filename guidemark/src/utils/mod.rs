pub mod assets;
pub mod markdown;

use std::{
  fmt::Write,
  fs,
  path::{Path, PathBuf},
};

use color_eyre::eyre::{Context, Result};
use guidemark_markup::Heading;
use log::info;

use crate::{config::Config, html::template};

/// Ensure that index.html exists in the output directory.
///
/// A guide with its own `index.md` already produced one; otherwise a
/// fallback page listing every generated document is written.
///
/// # Errors
///
/// Returns an error when the fallback page cannot be rendered or written.
pub fn ensure_index(
  config: &Config,
  markdown_files: &[PathBuf],
) -> Result<()> {
  let index_path = config.output_dir.join("index.html");

  // Check if index.html already exists (generated from index.md)
  if index_path.exists() {
    return Ok(());
  }

  info!("No index.md found, creating fallback index.html");

  let content = build_fallback_index(config, markdown_files);

  let toc = vec![Heading {
    id:    "welcome".to_string(),
    level: 1,
    title: config.title.clone(),
  }];

  let html = template::render(
    config,
    &content,
    &config.title,
    &config.description,
    &toc,
    Path::new("index.html"),
  )?;

  fs::write(&index_path, html).wrap_err_with(|| {
    format!(
      "Failed to write fallback index.html: {}",
      index_path.display()
    )
  })?;

  Ok(())
}

/// Build the fallback index body: the site title plus a link per document.
fn build_fallback_index(config: &Config, markdown_files: &[PathBuf]) -> String {
  let mut content = format!(
    "<h1 id=\"welcome\">{}</h1>\n<ul>\n",
    html_escape::encode_text(&config.title)
  );

  if let Some(ref input_dir) = config.input_dir {
    for file in markdown_files {
      let Ok(rel_path) = file.strip_prefix(input_dir) else {
        continue;
      };
      let mut html_rel = rel_path.to_path_buf();
      html_rel.set_extension("html");

      let label = page_label(file, &html_rel);
      writeln!(
        content,
        "<li><a href=\"{}\">{}</a></li>",
        html_rel.to_string_lossy().replace('\\', "/"),
        html_escape::encode_text(&label)
      )
      .expect("Failed to write to index string");
    }
  }

  content.push_str("</ul>\n");
  content
}

/// Label for a document in the fallback index: its first level-1 heading,
/// or the file stem when it has none.
fn page_label(file: &Path, html_rel: &Path) -> String {
  let fallback = html_rel
    .file_stem()
    .unwrap_or_default()
    .to_string_lossy()
    .to_string();

  fs::read_to_string(file)
    .ok()
    .and_then(|content| {
      content.lines().find_map(|line| {
        line
          .strip_prefix("# ")
          .map(guidemark_markup::utils::strip_anchor)
      })
    })
    .filter(|title| !title.is_empty())
    .unwrap_or(fallback)
}
