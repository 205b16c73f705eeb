#[macro_export]
macro_rules! profile {
  ($name:expr) => {
    let _span = tracing::span!(tracing::Level::DEBUG, $name);
    let _enter = _span.enter();
  };
}

pub mod annotate;
pub mod config;
pub mod editor;
pub mod install;
pub mod message;
pub mod render;
pub mod session;

// Re-exports
pub use message::{parse, recount, ParseError, ParsedCommitMessage};
pub use session::Session;
