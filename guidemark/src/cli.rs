use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Command line interface for guidemark
#[derive(Parser, Debug)]
#[command(author, version, about = "guidemark: a guide-site generator")]
pub struct Cli {
  /// Subcommand to execute (see [`Commands`])
  #[command(subcommand)]
  pub command: Option<Commands>,

  /// Enable verbose debug logging
  #[arg(short, long)]
  pub verbose: bool,

  /// Path to a configuration file (TOML or JSON)
  #[arg(short = 'c', long = "config-file")]
  pub config_file: Option<PathBuf>,
}

/// All supported subcommands for the guidemark CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
  /// Initialize a new guidemark configuration file
  Init {
    /// Path to create the configuration file at
    #[arg(short, long, default_value = "guidemark.toml")]
    output: PathBuf,

    /// Format of the configuration file.
    #[arg(short = 'F', long, default_value = "toml", value_parser = ["toml", "json"])]
    format: String,

    /// Force overwrite if file already exists
    #[arg(short, long)]
    force: bool,
  },

  /// Export default templates to a directory for customization.
  Export {
    /// Output directory for template files.
    #[arg(short, long, default_value = "templates")]
    output_dir: PathBuf,

    /// Whether to overwrite existing files.
    #[arg(long)]
    force: bool,
  },

  /// Process guide documents and generate the HTML site.
  Build {
    /// Path to the directory containing Markdown files.
    #[arg(short, long)]
    input_dir: Option<PathBuf>,

    /// Output directory for the generated site.
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Number of threads to use for parallel processing.
    #[arg(short = 'p', long = "jobs")]
    jobs: Option<usize>,

    /// Path to directory containing template files. Templates override
    /// built-in ones (default.html, navbar.html, footer.html, ...)
    #[arg(long = "template-dir")]
    template_dir: Option<PathBuf>,

    /// Path to custom stylesheet (CSS or SCSS, can be specified multiple
    /// times)
    #[arg(short, long, action = clap::ArgAction::Append)]
    stylesheet: Vec<PathBuf>,

    /// Path to custom JavaScript file (can be specified multiple times)
    #[arg(long, action = clap::ArgAction::Append)]
    script: Vec<PathBuf>,

    /// Title of the site. Used in the top navigation and page titles.
    #[arg(short = 'T', long)]
    title: Option<String>,

    /// Footer text for the site.
    #[arg(short = 'f', long)]
    footer: Option<String>,

    /// Whether to enable syntax highlighting for code blocks.
    #[arg(long = "highlight-code", action = clap::ArgAction::SetTrue)]
    highlight_code: Option<bool>,

    /// Syntax highlighting theme name.
    #[arg(long = "highlight-theme")]
    highlight_theme: Option<String>,
  },
}

impl Cli {
  /// Parse command line arguments into a [`Cli`] struct.
  #[must_use]
  pub fn parse_args() -> Self {
    Self::parse()
  }
}
