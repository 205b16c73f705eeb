#![allow(dead_code)]

use std::path::PathBuf;

use anyhow::Result;
use tempfile::TempDir;

pub const TEMPLATE: &str = "
# Please enter the commit message for your changes. Lines starting
# with '#' will be ignored, and an empty message aborts the commit.
#
# On branch main
# Changes to be committed:
#\tnew file:   README.md
#
";

pub struct TestRepo {
  pub repo:      git2::Repository,
  pub repo_path: TempDir
}

impl Default for TestRepo {
  fn default() -> Self {
    let repo_path = TempDir::new().unwrap();
    let repo = git2::Repository::init(repo_path.path()).unwrap();

    Self { repo, repo_path }
  }
}

impl TestRepo {
  pub fn project_name(&self) -> String {
    self
      .repo_path
      .path()
      .file_name()
      .unwrap()
      .to_string_lossy()
      .into_owned()
  }

  /// Writes a message file inside `.git`, the way Git does before it
  /// launches the editor.
  pub fn message_file(&self, name: &str, content: &[u8]) -> Result<PathBuf> {
    let path = self.repo.path().join(name);
    std::fs::write(&path, content)?;
    Ok(path)
  }
}
