//! Display-ready view of a parsed commit message: which text is editable,
//! which is greyed-out instructions, where the cursor starts and what the
//! window title reads.

use crate::message::ParsedCommitMessage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
  Body,
  Comment
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
  pub text:     String,
  pub style:    Style,
  pub editable: bool
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotated {
  pub segments: Vec<Segment>,
  /// Initial cursor position, in characters from the start of the text.
  pub cursor:   usize,
  pub title:    Option<String>
}

impl Annotated {
  pub fn new(message: &ParsedCommitMessage) -> Self {
    let mut segments = Vec::with_capacity(2);

    if message.has_body() {
      segments.push(Segment {
        text:     message.body.clone(),
        style:    Style::Body,
        editable: true
      });
    }

    segments.push(Segment {
      text:     message.comment.clone(),
      style:    Style::Comment,
      editable: false
    });

    Self {
      segments,
      cursor: message.body.chars().count(),
      title: title(message.project_name.as_deref(), message.branch_name.as_deref())
    }
  }

  pub fn text(&self) -> String {
    self.segments.iter().map(|segment| segment.text.as_str()).collect()
  }
}

/// `"<project> (<branch>)"`, dropping whichever half is unknown.
pub fn title(project: Option<&str>, branch: Option<&str>) -> Option<String> {
  let project = project.filter(|project| !project.is_empty());
  let branch = branch.filter(|branch| !branch.is_empty());

  match (project, branch) {
    (Some(project), Some(branch)) => Some(format!("{project} ({branch})")),
    (Some(project), None) => Some(project.to_string()),
    (None, Some(branch)) => Some(format!("({branch})")),
    (None, None) => None
  }
}

#[cfg(test)]
mod tests {
  use std::path::Path;

  use super::*;
  use crate::message::parse;

  #[test]
  fn test_merge_message_segments() {
    let text = "Merge branch 'foo'\n#\n#\n#\n#\nOn branch main";
    let message = parse(text.as_bytes(), Path::new("/src/app/.git/MERGE_MSG")).unwrap();
    let annotated = Annotated::new(&message);

    assert_eq!(annotated.segments.len(), 2);
    assert_eq!(annotated.segments[0].style, Style::Body);
    assert!(annotated.segments[0].editable);
    assert_eq!(annotated.segments[1].style, Style::Comment);
    assert!(!annotated.segments[1].editable);
    assert_eq!(annotated.cursor, "Merge branch 'foo'".len());
    assert_eq!(annotated.title.as_deref(), Some("app (main)"));
    assert_eq!(annotated.text(), text);
  }

  #[test]
  fn test_comment_only_starts_cursor_at_zero() {
    let message = parse(b"\n# one\n# two", Path::new("/tmp/COMMIT_EDITMSG")).unwrap();
    let annotated = Annotated::new(&message);

    assert_eq!(annotated.segments.len(), 1);
    assert_eq!(annotated.cursor, 0);
    assert_eq!(annotated.title, None);
  }

  #[test]
  fn test_cursor_counts_characters() {
    let message = parse("Zusammenführung\n#".as_bytes(), Path::new("/p/.git/MERGE_MSG")).unwrap();
    assert_eq!(Annotated::new(&message).cursor, 15);
  }

  #[test]
  fn test_title_fallbacks() {
    assert_eq!(title(Some("p"), Some("b")).as_deref(), Some("p (b)"));
    assert_eq!(title(Some("p"), None).as_deref(), Some("p"));
    assert_eq!(title(Some("p"), Some("")).as_deref(), Some("p"));
    assert_eq!(title(None, Some("b")).as_deref(), Some("(b)"));
    assert_eq!(title(Some(""), Some("b")).as_deref(), Some("(b)"));
    assert_eq!(title(None, None), None);
  }
}
