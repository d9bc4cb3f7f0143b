use std::io;

use thiserror::Error;

/// Top-level error type for the guidemark crate.
#[derive(Debug, Error)]
pub enum GuidemarkError {
  #[error("Template error: {0}")]
  Template(String),

  #[error("I/O error: {0}")]
  Io(#[from] io::Error),

  #[error("Serde error: {0}")]
  Serde(#[from] serde_json::Error),

  #[error("TOML error: {0}")]
  Toml(#[from] toml::de::Error),
}

impl From<tera::Error> for GuidemarkError {
  fn from(e: tera::Error) -> Self {
    Self::Template(e.to_string())
  }
}

impl From<fs_extra::error::Error> for GuidemarkError {
  fn from(e: fs_extra::error::Error) -> Self {
    Self::Io(io::Error::other(e.to_string()))
  }
}
