//! Types for the mdtoc-core public API.
use serde::{Deserialize, Serialize};

/// Represents a header in a Markdown document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Header {
  /// Header level (1-6).
  pub level:       u8,
  /// Header text, trimmed but otherwise exactly as written.
  pub text:        String,
  /// Anchor, unique among the headers extracted from the same document.
  pub anchor:      String,
  /// 1-based line the header was found on.
  pub line_number: usize,
}

/// A rendered table of contents.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Outline {
  /// Outline lines joined with `\n`, without the section heading.
  pub markdown:      String,
  /// Number of headers that made it into the outline.
  pub headers_found: usize,
}

/// Reasons an outline could not be produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OutlineError {
  #[error("No headers found in the specified range")]
  NoHeadersInRange,
}

/// Result type for outline generation.
pub type OutlineResult = Result<Outline, OutlineError>;
