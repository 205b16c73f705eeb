use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::annotate::Annotated;
use crate::message::{self, ParseError, ParsedCommitMessage};
use crate::profile;

pub trait FilePath {
  fn read_bytes(&self) -> Result<Vec<u8>>;
  fn write(&self, msg: &str) -> Result<()>;
}

impl FilePath for Path {
  fn read_bytes(&self) -> Result<Vec<u8>> {
    let mut contents = Vec::new();
    File::open(self)?.read_to_end(&mut contents)?;
    Ok(contents)
  }

  fn write(&self, msg: &str) -> Result<()> {
    File::create(self)?
      .write_all(msg.as_bytes())
      .map_err(Into::into)
  }
}

/// One editing session over a commit message file.
///
/// The parsed message never changes; only the editable text in front of the
/// comment block does. The comment block is protected from edits.
#[derive(Debug, Clone)]
pub struct Session {
  path:     PathBuf,
  message:  ParsedCommitMessage,
  editable: String,
  baseline: i64
}

impl Session {
  pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
    let path = path.into();
    let raw = path
      .read_bytes()
      .with_context(|| format!("Failed to read {}", path.display()))?;

    Self::from_bytes(&raw, path).context("Failed to parse commit message")
  }

  pub fn from_bytes(raw: &[u8], path: impl Into<PathBuf>) -> Result<Self, ParseError> {
    let path = path.into();
    let message = message::parse(raw, &path)?;
    let editable = message.body.clone();

    let mut session = Self { path, message, editable, baseline: 0 };
    session.baseline = session.editable_line_count();
    Ok(session)
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  pub fn message(&self) -> &ParsedCommitMessage {
    &self.message
  }

  pub fn editable(&self) -> &str {
    &self.editable
  }

  pub fn annotated(&self) -> Annotated {
    Annotated::new(&self.message)
  }

  /// Editable text followed by the untouched comment block.
  ///
  /// A comment block that does not open with a newline gets one in front of
  /// it, so typed text never runs into its first line.
  pub fn buffer(&self) -> String {
    let comment = &self.message.comment;
    if self.editable.is_empty() || comment.starts_with('\n') {
      format!("{}{}", self.editable, comment)
    } else {
      format!("{}\n{}", self.editable, comment)
    }
  }

  pub fn replace_editable(&mut self, text: impl Into<String>) {
    self.editable = text.into();
    log::debug!("Editable region now spans {} lines", self.editable_line_count());
  }

  /// Lines of the buffer outside the comment block. May be negative.
  pub fn editable_line_count(&self) -> i64 {
    let buffer_lines = message::line_count(&self.buffer()) as i64;
    message::recount(buffer_lines, self.message.comment_line_count as i64)
  }

  /// Lines added in front of the comment block since the session opened.
  pub fn lines_added(&self) -> usize {
    (self.editable_line_count() - self.baseline).max(0) as usize
  }

  pub fn save(&self) -> Result<()> {
    profile!("Save commit message");
    log::debug!("Writing commit message to {}", self.path.display());

    self
      .path
      .write(&self.buffer())
      .with_context(|| format!("Failed to write {}", self.path.display()))
  }
}
