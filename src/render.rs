use colored::{ColoredString, Colorize};

use crate::annotate::{Annotated, Style};
use crate::config::{self, App};
use crate::profile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
  /// Parses `#rrggbb` or `rrggbb`.
  pub fn parse(hex: &str) -> Option<Self> {
    let hex = hex.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
      return None;
    }

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some(Self(channel(0..2)?, channel(2..4)?, channel(4..6)?))
  }
}

/// Writes annotated messages to the terminal, greying out the comment block.
#[derive(Debug, Clone)]
pub struct Renderer {
  comment_color: Rgb,
  show_title:    bool
}

impl Renderer {
  pub fn new(app: &App) -> Self {
    let comment_color = Rgb::parse(&app.comment_color).unwrap_or_else(|| {
      log::warn!("Invalid comment color {:?}, using {}", app.comment_color, config::DEFAULT_COMMENT_COLOR);
      Rgb(0x95, 0x95, 0x95)
    });

    Self { comment_color, show_title: app.show_title }
  }

  pub fn render(&self, annotated: &Annotated) -> String {
    profile!("Render commit message");

    let mut out = String::new();

    if self.show_title {
      if let Some(title) = &annotated.title {
        out.push_str(&format!("{}\n\n", title.bold()));
      }
    }

    for segment in &annotated.segments {
      out.push_str(&self.paint(&segment.text, segment.style).to_string());
    }

    out
  }

  fn paint(&self, text: &str, style: Style) -> ColoredString {
    let Rgb(r, g, b) = self.comment_color;
    match style {
      Style::Body => text.normal(),
      Style::Comment => text.truecolor(r, g, b)
    }
  }
}
