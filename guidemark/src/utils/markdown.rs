//! Document processing: renders every guide page into the output tree.
use std::{
  fs,
  path::{Path, PathBuf},
};

use color_eyre::eyre::{Context, Result};
use guidemark_markup::{
  MarkupOptionsBuilder,
  MarkupProcessor,
  utils::collect_markdown_files,
};
use log::info;
use rayon::prelude::*;

use crate::{config::Config, html::template};

/// Creates a markup processor from the site configuration.
#[must_use]
pub fn create_processor(config: &Config) -> MarkupProcessor {
  let options = MarkupOptionsBuilder::new()
    .gfm(true)
    .callouts(true)
    .highlight_code(config.highlight_code)
    .highlight_theme(config.highlight_theme.as_deref())
    .build();

  MarkupProcessor::new(options)
}

/// Processes all Markdown files in the input directory and writes HTML
/// output, mirroring the input layout.
///
/// Pages are rendered in parallel; the processor is shared since rendering
/// only reads it.
///
/// # Returns
///
/// A vector of all processed Markdown file paths.
///
/// # Errors
///
/// Returns an error if any file cannot be read, rendered, or written.
pub fn process_markdown_files(config: &Config) -> Result<Vec<PathBuf>> {
  let Some(ref input_dir) = config.input_dir else {
    info!("No input directory provided, skipping markdown processing");
    return Ok(Vec::new());
  };

  info!("Input directory: {}", input_dir.display());
  let files = collect_markdown_files(input_dir);
  info!("Found {} markdown files", files.len());

  let processor = create_processor(config);

  files
    .par_iter()
    .try_for_each(|file_path| {
      render_page(config, &processor, input_dir, file_path)
    })?;

  Ok(files)
}

/// Render a single document and write it to its mirrored output path.
fn render_page(
  config: &Config,
  processor: &MarkupProcessor,
  input_dir: &Path,
  file_path: &Path,
) -> Result<()> {
  let content = fs::read_to_string(file_path).wrap_err_with(|| {
    format!("Failed to read markdown file: {}", file_path.display())
  })?;

  let result = processor.render(&content);

  let rel_path = file_path.strip_prefix(input_dir).wrap_err_with(|| {
    format!(
      "Failed to determine relative path for {}",
      file_path.display()
    )
  })?;
  let mut output_rel = rel_path.to_path_buf();
  output_rel.set_extension("html");

  let title = result.title.clone().unwrap_or_else(|| config.title.clone());
  let description = result
    .frontmatter
    .description
    .clone()
    .unwrap_or_else(|| config.description.clone());

  let html = template::render(
    config,
    &result.html,
    &title,
    &description,
    &result.toc,
    &output_rel,
  )?;

  let output_path = config.output_dir.join(&output_rel);
  if let Some(parent) = output_path.parent() {
    fs::create_dir_all(parent).wrap_err_with(|| {
      format!("Failed to create output directory: {}", parent.display())
    })?;
  }

  fs::write(&output_path, html).wrap_err_with(|| {
    format!("Failed to write output HTML: {}", output_path.display())
  })
}
