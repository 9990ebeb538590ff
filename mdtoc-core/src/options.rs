//! Rendering and insertion options.
//!
//! Every enum here parses from the same lowercase names it serializes to, so
//! configuration files, `KEY=VALUE` overrides and CLI flags all accept the
//! same spelling.
//!
//! # Examples
//!
//! ```
//! use mdtoc_core::{FormatOptions, FormatType, LevelRange, LinkFormat};
//!
//! let options = FormatOptions {
//!   format_type: FormatType::Mixed,
//!   link_format: LinkFormat::Markdown,
//!   level_range: LevelRange::new(2, 3),
//!   ..Default::default()
//! };
//!
//! assert_eq!("numbered".parse::<FormatType>(), Ok(FormatType::Numbers));
//! assert!(options.level_range.contains(3));
//! ```
use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Error returned when an option value cannot be parsed from a string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid {kind}: '{value}'. Expected one of: {expected}")]
pub struct ParseOptionError {
  kind:     &'static str,
  value:    String,
  expected: &'static str,
}

impl ParseOptionError {
  fn new(kind: &'static str, value: &str, expected: &'static str) -> Self {
    Self {
      kind,
      value: value.to_string(),
      expected,
    }
  }
}

/// List marker style used for outline entries.
#[derive(
  Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum FormatType {
  /// `-` for every entry.
  #[default]
  #[serde(alias = "bulleted")]
  Bullets,
  /// `1.` for every entry. The ordinal is never incremented.
  #[serde(alias = "numbered")]
  Numbers,
  /// `1.` for top level entries, `-` for everything nested below them.
  Mixed,
}

impl FormatType {
  /// Marker placed in front of an entry at the given relative depth.
  #[must_use]
  pub const fn marker(self, relative_level: u8) -> &'static str {
    match self {
      Self::Bullets => "-",
      Self::Numbers => "1.",
      Self::Mixed => {
        if relative_level == 0 {
          "1."
        } else {
          "-"
        }
      },
    }
  }
}

impl FromStr for FormatType {
  type Err = ParseOptionError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "bullets" | "bulleted" => Ok(Self::Bullets),
      "numbers" | "numbered" => Ok(Self::Numbers),
      "mixed" => Ok(Self::Mixed),
      _ => {
        Err(ParseOptionError::new(
          "format type",
          s,
          "bullets, numbers, mixed",
        ))
      },
    }
  }
}

impl fmt::Display for FormatType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Self::Bullets => "bullets",
      Self::Numbers => "numbers",
      Self::Mixed => "mixed",
    })
  }
}

/// Link syntax used when outline entries are hyperlinked.
#[derive(
  Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum LinkFormat {
  /// `[Header Text](#anchor)`
  Markdown,
  /// `[[#Header Text]]`, the header text repeated verbatim.
  #[default]
  #[serde(alias = "obsidian")]
  Wiki,
}

impl LinkFormat {
  /// Render a link to the given header text and anchor.
  #[must_use]
  pub fn link(self, text: &str, anchor: &str) -> String {
    match self {
      Self::Markdown => format!("[{text}](#{anchor})"),
      Self::Wiki => format!("[[#{text}]]"),
    }
  }
}

impl FromStr for LinkFormat {
  type Err = ParseOptionError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "markdown" => Ok(Self::Markdown),
      "wiki" | "obsidian" => Ok(Self::Wiki),
      _ => Err(ParseOptionError::new("link format", s, "markdown, wiki")),
    }
  }
}

impl fmt::Display for LinkFormat {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Self::Markdown => "markdown",
      Self::Wiki => "wiki",
    })
  }
}

/// Where the rendered outline goes in the document.
#[derive(
  Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum InsertionMethod {
  /// After frontmatter and the document title.
  #[default]
  Beginning,
  /// Appended after a blank separator line.
  End,
  /// At the caller's cursor position. The core leaves the document alone.
  Cursor,
}

impl FromStr for InsertionMethod {
  type Err = ParseOptionError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "beginning" => Ok(Self::Beginning),
      "end" => Ok(Self::End),
      "cursor" => Ok(Self::Cursor),
      _ => {
        Err(ParseOptionError::new(
          "insertion method",
          s,
          "beginning, end, cursor",
        ))
      },
    }
  }
}

impl fmt::Display for InsertionMethod {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Self::Beginning => "beginning",
      Self::End => "end",
      Self::Cursor => "cursor",
    })
  }
}

/// Inclusive range of header levels to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelRange {
  pub min: u8,
  pub max: u8,
}

impl LevelRange {
  #[must_use]
  pub const fn new(min: u8, max: u8) -> Self {
    Self { min, max }
  }

  /// Whether `level` lies within the range, bounds included.
  #[must_use]
  pub const fn contains(&self, level: u8) -> bool {
    level >= self.min && level <= self.max
  }
}

impl Default for LevelRange {
  fn default() -> Self {
    Self::new(1, 6)
  }
}

/// Widest indent per nesting level the renderer emits. Larger values are
/// clamped.
pub const MAX_INDENT_SIZE: usize = 16;

/// Options controlling how an outline is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatOptions {
  /// Marker style for each entry.
  pub format_type:   FormatType,
  /// Spaces per nesting level, at most [`MAX_INDENT_SIZE`].
  pub indent_size:   usize,
  /// Whether entries link to their header.
  pub include_links: bool,
  /// Link syntax, only used when `include_links` is set.
  pub link_format:   LinkFormat,
  /// Header levels to include.
  pub level_range:   LevelRange,
}

impl Default for FormatOptions {
  fn default() -> Self {
    Self {
      format_type:   FormatType::Bullets,
      indent_size:   2,
      include_links: true,
      link_format:   LinkFormat::Wiki,
      level_range:   LevelRange::default(),
    }
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, reason = "Fine in tests")]
  use super::*;

  #[test]
  fn test_format_type_aliases() {
    assert_eq!("bulleted".parse::<FormatType>(), Ok(FormatType::Bullets));
    assert_eq!("Numbers".parse::<FormatType>(), Ok(FormatType::Numbers));
    assert_eq!(" mixed ".parse::<FormatType>(), Ok(FormatType::Mixed));
    assert!("roman".parse::<FormatType>().is_err());
  }

  #[test]
  fn test_link_format_accepts_obsidian() {
    assert_eq!("obsidian".parse::<LinkFormat>(), Ok(LinkFormat::Wiki));
    assert_eq!("markdown".parse::<LinkFormat>(), Ok(LinkFormat::Markdown));
  }

  #[test]
  fn test_parse_error_message() {
    let err = "middle".parse::<InsertionMethod>().unwrap_err();
    assert_eq!(
      err.to_string(),
      "Invalid insertion method: 'middle'. Expected one of: beginning, end, \
       cursor"
    );
  }

  #[test]
  fn test_display_round_trips_through_from_str() {
    for method in [
      InsertionMethod::Beginning,
      InsertionMethod::End,
      InsertionMethod::Cursor,
    ] {
      assert_eq!(method.to_string().parse::<InsertionMethod>(), Ok(method));
    }
  }

  #[test]
  fn test_mixed_marker_depends_on_depth() {
    assert_eq!(FormatType::Mixed.marker(0), "1.");
    assert_eq!(FormatType::Mixed.marker(1), "-");
    assert_eq!(FormatType::Mixed.marker(4), "-");
    assert_eq!(FormatType::Numbers.marker(3), "1.");
  }

  #[test]
  fn test_level_range_is_inclusive() {
    let range = LevelRange::new(2, 3);
    assert!(!range.contains(1));
    assert!(range.contains(2));
    assert!(range.contains(3));
    assert!(!range.contains(4));
  }
}
