use std::fs::File;
use std::path::PathBuf;

use serde::Deserialize;
use config::{Config, FileFormat};
use anyhow::{Context, Result};
use lazy_static::lazy_static;

// Constants
pub const DEFAULT_COMMENT_COLOR: &str = "#959595";
const DEFAULT_GIT: &str = "git";
const DEFAULT_SHOW_TITLE: bool = true;

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct App {
  pub comment_color: String,
  pub git:           String,
  pub show_title:    bool
}

impl Default for App {
  fn default() -> Self {
    Self {
      comment_color: DEFAULT_COMMENT_COLOR.to_string(),
      git:           DEFAULT_GIT.to_string(),
      show_title:    DEFAULT_SHOW_TITLE
    }
  }
}

#[derive(Debug)]
pub struct ConfigPaths {
  pub dir:  PathBuf,
  pub file: PathBuf
}

lazy_static! {
  static ref PATHS: Option<ConfigPaths> = ConfigPaths::new();
}

impl ConfigPaths {
  fn new() -> Option<Self> {
    let dir = home::home_dir()?.join(".config/git-compose");
    let file = dir.join("config.ini");
    Some(Self { dir, file })
  }

  fn ensure_exists(&self) -> Result<()> {
    if !self.dir.exists() {
      std::fs::create_dir_all(&self.dir).with_context(|| format!("Failed to create config directory at {:?}", self.dir))?;
    }
    if !self.file.exists() {
      File::create(&self.file).with_context(|| format!("Failed to create config file at {:?}", self.file))?;
    }
    Ok(())
  }
}

impl App {
  /// Loads `~/.config/git-compose/config.ini`, overlaid by `APP_*` variables.
  pub fn new() -> Result<Self> {
    let file = match PATHS.as_ref() {
      Some(paths) => {
        paths.ensure_exists()?;
        Some(paths.file.clone())
      },
      None => {
        log::warn!("No home directory found, using built-in configuration defaults");
        None
      }
    };

    Self::load(file)
  }

  pub fn load(file: Option<PathBuf>) -> Result<Self> {
    let mut builder = Config::builder()
      .set_default("comment_color", DEFAULT_COMMENT_COLOR)?
      .set_default("git", DEFAULT_GIT)?
      .set_default("show_title", DEFAULT_SHOW_TITLE)?;

    if let Some(file) = file {
      builder = builder.add_source(config::File::new(file.to_string_lossy().as_ref(), FileFormat::Ini).required(false));
    }

    builder
      .add_source(config::Environment::with_prefix("APP").try_parsing(true))
      .build()?
      .try_deserialize()
      .context("Failed to deserialize config. Please check ~/.config/git-compose/config.ini")
  }
}
