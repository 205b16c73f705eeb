//! Splits a Git commit message file into the text a person may edit and the
//! instructional comment block Git appends below it.
//!
//! Both the comment detection and the branch lookup are positional on purpose:
//! Git translates its instructions, so matching on wording would only work in
//! one locale.

use std::path::{Path, MAIN_SEPARATOR};

use thiserror::Error;

use crate::profile;

/// Directory segment that marks the repository metadata folder.
const GIT_DIR: &str = ".git";

/// Line of the comment block that carries the current branch
/// (`# On branch main` in Git's default template).
const BRANCH_LINE: usize = 5;

#[derive(Error, Debug)]
pub enum ParseError {
  #[error("Commit message is not valid UTF-8")]
  Decode(#[from] std::str::Utf8Error)
}

/// The segmented contents of a commit message file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommitMessage {
  /// Auto-generated leading line, e.g. a merge summary. Empty when the file
  /// starts with the comment block.
  pub body:               String,
  /// Everything after the body. Starts with a newline whenever a body was
  /// split off, so `body + comment` rebuilds the file.
  pub comment:            String,
  pub comment_line_count: usize,
  pub branch_name:        Option<String>,
  pub project_name:       Option<String>
}

impl ParsedCommitMessage {
  pub fn has_body(&self) -> bool {
    !self.body.is_empty()
  }
}

/// Parses raw commit message bytes read from `path`.
///
/// Never fails on short or oddly shaped input: missing branch or project
/// names come back as `None`. The only error is undecodable bytes.
pub fn parse(raw: &[u8], path: &Path) -> Result<ParsedCommitMessage, ParseError> {
  profile!("Parse commit message");

  let text = std::str::from_utf8(raw)?;
  let (body, comment) = split(text);
  let comment_line_count = line_count(&comment);
  let branch_name = branch_name(&comment);
  let project_name = project_name(path);

  log::debug!(
    "Parsed {} (body: {} chars, comment: {} lines, project: {:?}, branch: {:?})",
    path.display(),
    body.chars().count(),
    comment_line_count,
    project_name,
    branch_name
  );

  Ok(ParsedCommitMessage {
    body,
    comment,
    comment_line_count,
    branch_name,
    project_name
  })
}

/// Lines of an edited buffer that sit outside the protected comment.
///
/// Returns the raw difference; a buffer shorter than the comment yields a
/// negative value and the caller decides how to clamp it.
pub fn recount(edited_line_count: i64, comment_line_count: i64) -> i64 {
  edited_line_count - comment_line_count
}

/// Number of `\n`-separated entries in `text`, counting the empty ones.
pub fn line_count(text: &str) -> usize {
  text.split('\n').count()
}

/// Last space-separated token of the sixth line of the comment block.
pub fn branch_name(comment: &str) -> Option<String> {
  comment
    .split('\n')
    .nth(BRANCH_LINE)
    .and_then(|line| line.split(' ').last())
    .map(str::to_string)
}

/// Name of the directory that holds the first `.git` segment of `path`.
pub fn project_name(path: &Path) -> Option<String> {
  let path = path.to_string_lossy();
  let segments: Vec<&str> = path.split(MAIN_SEPARATOR).collect();

  segments
    .iter()
    .position(|segment| *segment == GIT_DIR)
    .and_then(|index| index.checked_sub(1))
    .map(|index| segments[index].to_string())
}

fn split(text: &str) -> (String, String) {
  // `\n#` at the top means Git's comment block comes first
  if text.chars().nth(1) == Some('#') {
    return (String::new(), text.to_string());
  }

  let mut lines = text.split('\n');
  let body = lines.next().unwrap_or_default().to_string();
  let rest: Vec<&str> = lines.collect();

  (body, format!("\n{}", rest.join("\n")))
}
