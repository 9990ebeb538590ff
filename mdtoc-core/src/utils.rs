use std::sync::OnceLock;

use log::error;
use regex::Regex;

/// Byte-order mark some editors write at the start of UTF-8 files.
const BOM: char = '\u{feff}';

/// Slugify header text for use as an anchor.
///
/// Lowercases the text, drops every character that is not an ASCII word
/// character, whitespace or `-`, turns whitespace runs into a single `-`,
/// collapses repeated dashes and trims dashes from both ends.
///
/// Punctuation is removed without substitution, so `API/REST Endpoints`
/// becomes `apirest-endpoints`. Existing documents link to anchors produced
/// this way; keep it that way.
#[must_use]
pub fn slugify(text: &str) -> String {
  let lowered = text.to_lowercase();
  let mut slug = String::with_capacity(lowered.len());

  for c in lowered.chars() {
    if c.is_ascii_alphanumeric() || c == '_' {
      slug.push(c);
    } else if (c == '-' || c.is_whitespace()) && !slug.ends_with('-') {
      slug.push('-');
    }
  }

  slug.trim_matches('-').to_string()
}

/// Pattern for an ATX header line that has already been trimmed.
pub(crate) fn header_regex() -> &'static Regex {
  static HEADER_RE: OnceLock<Regex> = OnceLock::new();
  HEADER_RE.get_or_init(|| {
    Regex::new(r"^(#{1,6})\s+(.+)$").unwrap_or_else(|e| {
      error!("Failed to compile header regex: {e}");
      never_matching_regex()
    })
  })
}

/// Create a regex that never matches anything.
///
/// Used as a fallback when a pattern fails to compile, so that lines are
/// treated as plain text instead of aborting.
///
/// # Panics
///
/// Panics if the literal pattern `[^\s\S]` fails to compile, which cannot
/// happen.
#[must_use]
#[allow(clippy::expect_used, reason = "Literal pattern is always valid")]
pub fn never_matching_regex() -> Regex {
  Regex::new(r"[^\s\S]").expect("Failed to compile never-matching regex")
}

/// Trim whitespace and a byte-order mark from both ends of `line`.
#[must_use]
pub fn trim_line(line: &str) -> &str {
  line.trim_matches(|c: char| c.is_whitespace() || c == BOM)
}

/// Return true if the trimmed line is blank.
#[must_use]
pub fn is_blank(line: &str) -> bool {
  trim_line(line).is_empty()
}
