use std::{fs, path::Path};

use color_eyre::eyre::{self, Context, Result};
use log::debug;

use crate::config::Config;

/// Copies all required assets (CSS, JS, custom assets, scripts) to the
/// output directory.
///
/// This includes:
/// - The main stylesheet (default or template override), with any custom
///   stylesheets appended (SCSS is compiled)
/// - The main JavaScript file (theme toggle, mobile navigation)
/// - Any custom assets from the configured assets directory
/// - Any custom script files specified in the configuration
///
/// # Errors
///
/// Returns an error if any asset cannot be read or written.
pub fn copy_assets(config: &Config) -> Result<()> {
  // Create assets directory
  let assets_dir = config.output_dir.join("assets");
  fs::create_dir_all(&assets_dir)?;

  // Generate and write CSS
  let css = generate_css(config)?;
  fs::write(assets_dir.join("style.css"), css)
    .context("Failed to write CSS file")?;

  // main.js is always needed for the default templates
  copy_template_asset(
    config,
    &assets_dir,
    "main.js",
    guidemark_templates::MAIN_JS,
  )?;

  // Copy custom assets if they exist
  copy_custom_assets(config, &assets_dir)?;

  // Copy script files to assets directory
  copy_script_files(config, &assets_dir)?;

  Ok(())
}

/// Copies a template asset to the assets directory, allowing user override
/// if present.
fn copy_template_asset(
  config: &Config,
  assets_dir: &Path,
  filename: &str,
  fallback_content: &str,
) -> eyre::Result<()> {
  let content = match config.get_template_file(filename) {
    Some(path) if path.exists() => {
      fs::read_to_string(&path).wrap_err_with(|| {
        format!("Failed to read {} from: {}", filename, path.display())
      })?
    },
    _ => fallback_content.to_string(),
  };

  fs::write(assets_dir.join(filename), content)
    .wrap_err_with(|| format!("Failed to write {filename} to assets directory"))
}

/// Copies custom assets from the configured assets directory, if any, into
/// the output assets directory.
fn copy_custom_assets(config: &Config, assets_dir: &Path) -> eyre::Result<()> {
  if let Some(custom_assets_dir) = &config.assets_dir {
    if custom_assets_dir.exists() && custom_assets_dir.is_dir() {
      debug!("Copying custom assets from {}", custom_assets_dir.display());

      let options = fs_extra::dir::CopyOptions::new()
        .overwrite(true)
        .content_only(true);
      fs_extra::dir::copy(custom_assets_dir, assets_dir, &options)
        .wrap_err("Failed to copy custom assets")?;
    }
  }
  Ok(())
}

/// Copies custom script files to the assets directory.
fn copy_script_files(config: &Config, assets_dir: &Path) -> eyre::Result<()> {
  for script_path in &config.script_paths {
    if script_path.exists() {
      let file_name = script_path
        .file_name()
        .ok_or_else(|| eyre::eyre!("Invalid script filename"))?;
      let dest_path = assets_dir.join(file_name);

      let content = fs::read_to_string(script_path).wrap_err_with(|| {
        format!("Failed to read script file {}", script_path.display())
      })?;

      fs::write(&dest_path, content).wrap_err_with(|| {
        format!("Failed to write script file to {}", dest_path.display())
      })?;
    }
  }
  Ok(())
}

/// Generates the combined CSS for the site.
///
/// The base is the default (or template override) stylesheet; custom
/// stylesheets are appended in order, with SCSS compiled via grass.
fn generate_css(config: &Config) -> eyre::Result<String> {
  let mut combined_css = match config.get_template_file("default.css") {
    Some(path) if path.exists() => {
      fs::read_to_string(&path).wrap_err_with(|| {
        format!("Failed to read template CSS: {}", path.display())
      })?
    },
    _ => String::from(guidemark_templates::DEFAULT_CSS),
  };

  for (index, stylesheet_path) in config.stylesheet_paths.iter().enumerate() {
    if !stylesheet_path.exists() {
      continue;
    }

    let content = fs::read_to_string(stylesheet_path).wrap_err_with(|| {
      format!(
        "Failed to read stylesheet {}: {}",
        index + 1,
        stylesheet_path.display()
      )
    })?;

    // Process SCSS if needed
    let processed_content =
      if stylesheet_path.extension().is_some_and(|ext| ext == "scss") {
        grass::from_string(content, &grass::Options::default()).map_err(
          |e| {
            eyre::eyre!(
              "Failed to compile SCSS to CSS for stylesheet {}: {e}",
              index + 1
            )
          },
        )?
      } else {
        content
      };

    // A comment to separate multiple stylesheets
    combined_css.push_str("\n\n/* Custom Stylesheet ");
    combined_css.push_str(&(index + 1).to_string());
    combined_css.push_str(": ");
    combined_css.push_str(&stylesheet_path.display().to_string());
    combined_css.push_str(" */\n");
    combined_css.push_str(&processed_content);
  }

  Ok(combined_css)
}
