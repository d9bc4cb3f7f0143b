use std::fs;

use color_eyre::eyre::{Context, Result, bail};
use log::{LevelFilter, info};

mod cli;
mod config;
mod error;
mod html;
mod utils;

use cli::{Cli, Commands};
use config::Config;

fn main() -> Result<()> {
  color_eyre::install()?;

  // Parse command line arguments
  let cli = Cli::parse_args();

  // Initialize logging first so we can log during command handling
  env_logger::Builder::new()
    .filter_level(if cli.verbose {
      LevelFilter::Debug
    } else {
      LevelFilter::Info
    })
    .write_style(env_logger::WriteStyle::Always)
    .init();

  // Handle subcommands
  if let Some(command) = &cli.command {
    match command {
      Commands::Init {
        output,
        format,
        force,
      } => {
        // Check if file already exists and that we're not forcing overwrite
        if output.exists() && !force {
          bail!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output.display()
          );
        }

        // Create parent directories if needed
        if let Some(parent) = output.parent() {
          if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).wrap_err_with(|| {
              format!("Failed to create directory: {}", parent.display())
            })?;
            info!("Created directory: {}", parent.display());
          }
        }

        Config::generate_default_config(format, output).wrap_err_with(|| {
          format!(
            "Failed to generate configuration file: {}",
            output.display()
          )
        })?;

        info!(
          "Configuration file created successfully. Edit it to customize \
           your guide site."
        );
        return Ok(());
      },

      Commands::Export { output_dir, force } => {
        Config::export_templates(output_dir, *force).wrap_err_with(|| {
          format!("Failed to export templates to {}", output_dir.display())
        })?;
        return Ok(());
      },

      // The Build command is handled in Config::load and merge_with_cli
      Commands::Build { .. } => {},
    }
  }

  // Create configuration from CLI and/or config file
  let config = Config::load(&cli)?;

  // Run the main site generation process
  generate_site(&config)
}

/// Main site generation process
fn generate_site(config: &Config) -> Result<()> {
  info!("Starting site generation...");

  // Ensure output directory exists
  fs::create_dir_all(&config.output_dir)?;
  info!("Output directory: {}", config.output_dir.display());

  // Setup thread pool once for all parallel operations
  let thread_count = config.jobs.unwrap_or_else(num_cpus::get);
  rayon::ThreadPoolBuilder::new()
    .num_threads(thread_count)
    .build_global()?;

  // Render all guide documents
  let markdown_files = utils::markdown::process_markdown_files(config)?;

  // Make sure the site has an entry point
  utils::ensure_index(config, &markdown_files)?;

  // Copy stylesheets, scripts and custom assets
  utils::assets::copy_assets(config)?;

  info!(
    "Site generated successfully in {}",
    config.output_dir.display()
  );

  Ok(())
}
