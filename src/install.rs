use std::io;
use std::process::Command;

use anyhow::Context;
use colored::Colorize;
use console::Emoji;
use thiserror::Error;

use crate::config::App;

const EMOJI: Emoji<'_, '_> = Emoji("🔗", "");
const INSTALL_HELP_URL: &str = "https://git-scm.com/book/en/v2/Getting-Started-Installing-Git";

pub const ERROR_SUMMARY: &str = "\nError: failed to set git-compose as your default Git editor.\n\n";

#[derive(Error, Debug)]
pub enum InstallError {
  #[error("Git is not installed.\n\nFor help on installing Git, please see:\n{}\n", INSTALL_HELP_URL)]
  GitNotFound,

  #[error("{0}")]
  Spawn(io::Error),

  #[error("{stderr}")]
  Failed { stderr: String },

  #[error(transparent)]
  Anyhow(#[from] anyhow::Error)
}

impl InstallError {
  /// Full diagnostic shown to the person, summary first.
  pub fn diagnostic(&self) -> String {
    format!("{ERROR_SUMMARY}{self}")
  }
}

/// Sets the running binary as Git's global `core.editor`.
pub fn run(app: &App) -> Result<(), InstallError> {
  let exe = std::env::current_exe().context("Failed to get current executable")?;
  install(app, &exe.to_string_lossy())
}

pub fn install(app: &App, editor: &str) -> Result<(), InstallError> {
  log::debug!("Running {} config --global core.editor {editor}", app.git);

  let output = Command::new(&app.git)
    .args(["config", "--global", "core.editor", editor])
    .output()
    .map_err(|err| match err.kind() {
      io::ErrorKind::NotFound => InstallError::GitNotFound,
      _ => InstallError::Spawn(err)
    })?;

  if !output.status.success() {
    return Err(InstallError::Failed {
      stderr: String::from_utf8_lossy(&output.stderr).into_owned()
    });
  }

  println!("{EMOJI} git-compose is now your default Git editor ({})", editor.italic());
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_missing_git_binary() {
    let app = App { git: "git-compose-no-such-binary".to_string(), ..App::default() };
    let err = install(&app, "/usr/bin/git-compose").unwrap_err();

    assert!(matches!(err, InstallError::GitNotFound));
    assert!(err.diagnostic().starts_with(ERROR_SUMMARY));
    assert!(err.diagnostic().contains(INSTALL_HELP_URL));
  }

  #[test]
  fn test_failed_command_reports_stderr() {
    let err = InstallError::Failed { stderr: "error: could not lock config file".to_string() };
    assert_eq!(err.diagnostic(), format!("{ERROR_SUMMARY}error: could not lock config file"));
  }
}
