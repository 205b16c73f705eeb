use std::io::{self, BufRead};

use anyhow::{Context, Result};
use colored::Colorize;
use console::Term;

use crate::render::Renderer;
use crate::session::Session;

const PROMPT: &str = "Type your commit message, then a line with a single . to finish:";

/// Line that ends the message.
const END_OF_MESSAGE: &str = ".";

/// Collects typed lines until a lone `.` line or end of input. Blank lines
/// inside the message are kept; trailing ones are dropped.
///
/// Returns `None` when nothing but blank lines was typed.
pub fn read_message<I>(lines: I) -> Result<Option<String>>
where
  I: IntoIterator<Item = io::Result<String>>
{
  let mut typed = Vec::new();

  for line in lines {
    let line = line.context("Failed to read input")?;
    let line = line.trim_end_matches('\r');

    if line == END_OF_MESSAGE {
      break;
    }
    typed.push(line.to_string());
  }

  while typed.last().is_some_and(|line| line.is_empty()) {
    typed.pop();
  }

  Ok((!typed.is_empty()).then(|| typed.join("\n")))
}

/// Shows the message, takes the person's text and saves the file.
pub fn run(session: &mut Session, renderer: &Renderer) -> Result<()> {
  let term = Term::stdout();

  term.write_line(&renderer.render(&session.annotated()))?;
  term.write_line("")?;
  term.write_line(&PROMPT.dimmed().to_string())?;

  let typed = if term.is_term() {
    read_message(std::iter::from_fn(|| Some(term.read_line())))?
  } else {
    read_message(io::stdin().lock().lines())?
  };

  match typed {
    Some(text) => session.replace_editable(text),
    None => log::debug!("Nothing typed, keeping the existing message")
  }

  log::debug!("{} lines added", session.lines_added());
  session.save()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn lines(input: &[&str]) -> Vec<io::Result<String>> {
    input.iter().map(|line| Ok(line.to_string())).collect()
  }

  #[test]
  fn test_stops_at_lone_dot() {
    let typed = read_message(lines(&["Add login form", "Second line", ".", "ignored"])).unwrap();
    assert_eq!(typed.as_deref(), Some("Add login form\nSecond line"));
  }

  #[test]
  fn test_keeps_blank_line_between_subject_and_body() {
    let typed = read_message(lines(&["Add login form", "", "Validates the email field.", "."])).unwrap();
    assert_eq!(typed.as_deref(), Some("Add login form\n\nValidates the email field."));
  }

  #[test]
  fn test_drops_trailing_blank_lines() {
    let typed = read_message(lines(&["Fix typo", "", ""])).unwrap();
    assert_eq!(typed.as_deref(), Some("Fix typo"));
  }

  #[test]
  fn test_stops_at_end_of_input() {
    let typed = read_message(lines(&["Fix typo\r"])).unwrap();
    assert_eq!(typed.as_deref(), Some("Fix typo"));
  }

  #[test]
  fn test_nothing_typed() {
    assert_eq!(read_message(lines(&[""])).unwrap(), None);
    assert_eq!(read_message(lines(&["", "", "."])).unwrap(), None);
    assert_eq!(read_message(lines(&[])).unwrap(), None);
  }

  #[test]
  fn test_read_error_propagates() {
    let input = vec![Ok("a".to_string()), Err(io::Error::new(io::ErrorKind::Other, "closed"))];
    assert!(read_message(input).is_err());
  }
}
