pub mod nav;
pub mod templates;

use std::{
  fs,
  path::{Path, PathBuf},
};

use color_eyre::eyre::{self, Context, Result};
use serde::{Deserialize, Serialize};

use crate::cli::{Cli, Commands};
pub use nav::{NavLink, NavSection};

// Serde default values need to be functions; literals are not enough for
// anything that requires construction (PathBuf, String).
fn default_output_dir() -> PathBuf {
  PathBuf::from("build")
}

fn default_title() -> String {
  "A guide".to_string()
}

fn default_footer_text() -> String {
  "Built with guidemark".to_string()
}

const fn default_true() -> bool {
  true
}

/// Configuration options for guidemark
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
  /// Input directory containing Markdown files
  #[serde(default)]
  pub input_dir: Option<PathBuf>,

  /// Output directory for the generated site
  #[serde(default = "default_output_dir")]
  pub output_dir: PathBuf,

  /// Site title, shown in the top navigation and page titles
  #[serde(default = "default_title")]
  pub title: String,

  /// Site description, used when a page has none of its own
  #[serde(default)]
  pub description: String,

  /// Text to be inserted in the footer
  #[serde(default = "default_footer_text")]
  pub footer_text: String,

  /// Path to template directory containing override template files
  #[serde(default)]
  pub template_dir: Option<PathBuf>,

  /// Paths to custom stylesheets (CSS or SCSS)
  #[serde(default)]
  pub stylesheet_paths: Vec<PathBuf>,

  /// Paths to custom JavaScript files
  #[serde(default)]
  pub script_paths: Vec<PathBuf>,

  /// Directory containing additional assets
  #[serde(default)]
  pub assets_dir: Option<PathBuf>,

  /// Whether to enable syntax highlighting for code blocks
  #[serde(default = "default_true")]
  pub highlight_code: bool,

  /// Syntax highlighting theme name
  #[serde(default)]
  pub highlight_theme: Option<String>,

  /// Number of threads to use for parallel processing
  #[serde(default)]
  pub jobs: Option<usize>,

  /// Links shown in the top navigation bar
  #[serde(default)]
  pub topnav: Vec<NavLink>,

  /// Sidebar sections, each a title plus an ordered list of links
  #[serde(default)]
  pub sidebar: Vec<NavSection>,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      input_dir:        None,
      output_dir:       default_output_dir(),
      title:            default_title(),
      description:      String::new(),
      footer_text:      default_footer_text(),
      template_dir:     None,
      stylesheet_paths: Vec::new(),
      script_paths:     Vec::new(),
      assets_dir:       None,
      highlight_code:   true,
      highlight_theme:  None,
      jobs:             None,
      topnav:           Vec::new(),
      sidebar:          Vec::new(),
    }
  }
}

impl Config {
  /// Create a new configuration from a file.
  /// Only TOML and JSON are supported for the time being.
  ///
  /// # Errors
  ///
  /// Returns an error if the file cannot be read or parsed.
  pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).with_context(|| {
      format!("Failed to read config file: {}", path.display())
    })?;

    path.extension().map_or_else(
      || {
        Err(eyre::eyre!(
          "Config file has no extension: {}",
          path.display()
        ))
      },
      |ext| {
        match ext.to_str().unwrap_or("").to_lowercase().as_str() {
          "json" => {
            serde_json::from_str(&content).with_context(|| {
              format!("Failed to parse JSON config from {}", path.display())
            })
          },
          "toml" => {
            toml::from_str(&content).with_context(|| {
              format!("Failed to parse TOML config from {}", path.display())
            })
          },
          _ => {
            Err(eyre::eyre!(
              "Unsupported config file format: {}",
              path.display()
            ))
          },
        }
      },
    )
  }

  /// Load config from file and CLI arguments.
  ///
  /// # Errors
  ///
  /// Returns an error when no usable configuration can be assembled or a
  /// configured path does not exist.
  pub fn load(cli: &Cli) -> Result<Self> {
    let mut config = if let Some(config_path) = &cli.config_file {
      // Config file explicitly specified via CLI
      Self::from_file(config_path).with_context(|| {
        format!("Failed to load config from {}", config_path.display())
      })?
    } else if let Some(discovered_config) = Self::find_config_file() {
      // Found a config file in a standard location
      log::info!(
        "Using discovered config file: {}",
        discovered_config.display()
      );
      Self::from_file(&discovered_config).with_context(|| {
        format!(
          "Failed to load discovered config from {}",
          discovered_config.display()
        )
      })?
    } else {
      Self::default()
    };

    // Merge CLI arguments
    config.merge_with_cli(cli);

    // Without a Build command there must be a config file to work from
    if !matches!(cli.command, Some(Commands::Build { .. }))
      && cli.config_file.is_none()
      && Self::find_config_file().is_none()
    {
      return Err(eyre::eyre!(
        "Neither config file nor 'build' subcommand provided. Use \
         'guidemark build' or provide a config file with --config-file."
      ));
    }

    // We need content to build a site from
    let Some(ref input_dir) = config.input_dir else {
      return Err(eyre::eyre!("An input directory must be provided."));
    };

    if !input_dir.exists() {
      return Err(eyre::eyre!(
        "Input directory does not exist: {}",
        input_dir.display()
      ));
    }

    // Validate all paths
    config.validate_paths()?;

    Ok(config)
  }

  /// Merge CLI arguments into this config, prioritizing CLI values when
  /// present
  pub fn merge_with_cli(&mut self, cli: &Cli) {
    if let Some(Commands::Build {
      input_dir,
      output_dir,
      jobs,
      template_dir,
      stylesheet,
      script,
      title,
      footer,
      highlight_code,
      highlight_theme,
    }) = &cli.command
    {
      if let Some(input_dir) = input_dir {
        self.input_dir = Some(input_dir.clone());
      }

      if let Some(output_dir) = output_dir {
        self.output_dir.clone_from(output_dir);
      }

      self.jobs = jobs.or(self.jobs);

      if let Some(template_dir) = template_dir {
        self.template_dir = Some(template_dir.clone());
      }

      // Append stylesheet and script paths rather than replacing them
      if !stylesheet.is_empty() {
        self.stylesheet_paths.extend(stylesheet.iter().cloned());
      }

      if !script.is_empty() {
        self.script_paths.extend(script.iter().cloned());
      }

      if let Some(title) = title {
        self.title.clone_from(title);
      }

      if let Some(footer) = footer {
        self.footer_text.clone_from(footer);
      }

      // Handle the highlight-code flag when explicitly set
      if let Some(highlight_code_val) = highlight_code {
        self.highlight_code = *highlight_code_val;
      }

      if let Some(highlight_theme) = highlight_theme {
        self.highlight_theme = Some(highlight_theme.clone());
      }
    }
  }

  /// Get template file path for a specific template name
  #[must_use]
  pub fn get_template_file(&self, name: &str) -> Option<PathBuf> {
    self.template_dir.as_ref().map(|dir| dir.join(name))
  }

  /// Search for config files in common locations
  #[must_use]
  pub fn find_config_file() -> Option<PathBuf> {
    let config_filenames = [
      "guidemark.toml",
      "guidemark.json",
      ".guidemark.toml",
      ".guidemark.json",
      ".config/guidemark.toml",
      ".config/guidemark.json",
    ];

    // First try current directory
    let current_dir = std::env::current_dir().ok()?;
    for filename in &config_filenames {
      let config_path = current_dir.join(filename);
      if config_path.exists() {
        return Some(config_path);
      }
    }

    // If we have a $XDG_CONFIG_HOME environment variable, check there too
    if let Ok(xdg_config_home) = std::env::var("XDG_CONFIG_HOME") {
      let xdg_config_dir = PathBuf::from(xdg_config_home).join("guidemark");
      for filename in &["config.toml", "config.json"] {
        let config_path = xdg_config_dir.join(filename);
        if config_path.exists() {
          return Some(config_path);
        }
      }
    }

    None
  }

  /// Validate all paths specified in the configuration
  ///
  /// # Errors
  ///
  /// Returns an aggregated error listing every missing or mistyped path.
  pub fn validate_paths(&self) -> Result<()> {
    let mut errors = Vec::new();

    if let Some(ref template_dir) = self.template_dir {
      if !template_dir.exists() {
        errors.push(format!(
          "Template directory does not exist: {}",
          template_dir.display()
        ));
      } else if !template_dir.is_dir() {
        errors.push(format!(
          "Template directory path is not a directory: {}",
          template_dir.display()
        ));
      }
    }

    for (index, stylesheet_path) in self.stylesheet_paths.iter().enumerate() {
      if !stylesheet_path.exists() {
        errors.push(format!(
          "Stylesheet file {} does not exist: {}",
          index + 1,
          stylesheet_path.display()
        ));
      } else if !stylesheet_path.is_file() {
        errors.push(format!(
          "Stylesheet path {} is not a file: {}",
          index + 1,
          stylesheet_path.display()
        ));
      }
    }

    for (index, script_path) in self.script_paths.iter().enumerate() {
      if !script_path.exists() {
        errors.push(format!(
          "Script file {} does not exist: {}",
          index + 1,
          script_path.display()
        ));
      } else if !script_path.is_file() {
        errors.push(format!(
          "Script path {} is not a file: {}",
          index + 1,
          script_path.display()
        ));
      }
    }

    if let Some(ref assets_dir) = self.assets_dir {
      if !assets_dir.exists() {
        errors.push(format!(
          "Assets directory does not exist: {}",
          assets_dir.display()
        ));
      } else if !assets_dir.is_dir() {
        errors.push(format!(
          "Assets directory path is not a directory: {}",
          assets_dir.display()
        ));
      }
    }

    if !errors.is_empty() {
      let error_message = errors.join("\n");
      return Err(eyre::eyre!(
        "Configuration path validation errors:\n{}",
        error_message
      ));
    }

    Ok(())
  }

  /// Generate a default configuration file with commented explanations
  ///
  /// # Errors
  ///
  /// Returns an error for unknown formats or when the file cannot be
  /// written.
  pub fn generate_default_config(format: &str, path: &Path) -> Result<()> {
    let config_content = templates::get_template(format)
      .map_err(|e| eyre::eyre!("{}", e))?;

    fs::write(path, config_content).with_context(|| {
      format!("Failed to write default config to {}", path.display())
    })?;

    log::info!("Created default configuration file: {}", path.display());
    Ok(())
  }

  /// Export embedded templates to a directory for customization
  ///
  /// # Errors
  ///
  /// Returns an error when the directory or any template cannot be written.
  pub fn export_templates(output_dir: &Path, force: bool) -> Result<()> {
    fs::create_dir_all(output_dir).with_context(|| {
      format!(
        "Failed to create template directory: {}",
        output_dir.display()
      )
    })?;

    for (filename, content) in guidemark_templates::all_templates() {
      let file_path = output_dir.join(filename);

      if file_path.exists() && !force {
        log::warn!(
          "Skipping existing file: {} (use --force to overwrite)",
          file_path.display()
        );
        continue;
      }

      fs::write(&file_path, content).with_context(|| {
        format!("Failed to write template file: {}", file_path.display())
      })?;

      log::info!("Exported template: {}", file_path.display());
    }

    log::info!("Templates exported to: {}", output_dir.display());
    log::info!(
      "Use --template-dir {} to customize your site",
      output_dir.display()
    );
    Ok(())
  }
}
