//! Line based header extraction and anchor allocation.
//!
//! Extraction does not parse Markdown: every trimmed line of the form
//! `#{1,6} text` is a header, including lines inside fenced code blocks.
use std::collections::{HashMap, HashSet};

use log::trace;

use crate::{
  types::Header,
  utils::{header_regex, is_blank, slugify, trim_line},
};

/// Hands out unique anchors for one document.
///
/// The first request for a base slug returns it unchanged; the `n`th repeat
/// returns `{base}-{n}`. A candidate that was already handed out (say a
/// header literally titled "Intro 1" after two "Intro" headers) is skipped
/// by bumping the counter, so anchors never repeat within a document.
///
/// Use a fresh allocator per document; anchors from one document have no
/// bearing on another.
#[derive(Debug, Default, Clone)]
pub struct AnchorAllocator {
  counts: HashMap<String, usize>,
  issued: HashSet<String>,
}

impl AnchorAllocator {
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Allocate a unique anchor for the given base slug.
  pub fn allocate(&mut self, base: &str) -> String {
    let mut count = self.counts.get(base).copied().unwrap_or(0);
    let mut candidate = if count == 0 {
      base.to_string()
    } else {
      format!("{base}-{count}")
    };

    while self.issued.contains(&candidate) {
      count += 1;
      candidate = format!("{base}-{count}");
    }

    self.counts.insert(base.to_string(), count + 1);
    self.issued.insert(candidate.clone());
    candidate
  }

  /// Slugify `text` and allocate an anchor for the result.
  pub fn anchor_for(&mut self, text: &str) -> String {
    self.allocate(&slugify(text))
  }

  /// Forget every anchor handed out so far.
  pub fn reset(&mut self) {
    self.counts.clear();
    self.issued.clear();
  }

  /// Number of anchors handed out since creation or the last reset.
  #[must_use]
  pub fn len(&self) -> usize {
    self.issued.len()
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.issued.is_empty()
  }
}

/// Extract all headers from `content` in document order.
///
/// Uses a fresh [`AnchorAllocator`], so calling this on several documents
/// never leaks anchors between them. Empty or whitespace-only input yields no
/// headers.
#[must_use]
pub fn extract_headers(content: &str) -> Vec<Header> {
  let mut anchors = AnchorAllocator::new();
  extract_headers_with(content, &mut anchors)
}

/// Extract headers using a caller supplied allocator.
///
/// Anchors already handed out by `anchors` are avoided, which lets a caller
/// reserve anchors up front.
pub fn extract_headers_with(
  content: &str,
  anchors: &mut AnchorAllocator,
) -> Vec<Header> {
  if is_blank(content) {
    return Vec::new();
  }

  let re = header_regex();

  let mut headers = Vec::new();
  for (index, line) in content.split('\n').enumerate() {
    let Some(caps) = re.captures(trim_line(line)) else {
      continue;
    };

    let (Some(marks), Some(rest)) = (caps.get(1), caps.get(2)) else {
      continue;
    };

    #[allow(
      clippy::cast_possible_truncation,
      reason = "Marker run is at most six bytes"
    )]
    let level = marks.as_str().len() as u8;
    let text = rest.as_str().trim().to_string();
    let anchor = anchors.anchor_for(&text);

    headers.push(Header {
      level,
      text,
      anchor,
      line_number: index + 1,
    });
  }

  trace!("Extracted {} headers", headers.len());
  headers
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_allocator_suffixes_repeats() {
    let mut anchors = AnchorAllocator::new();
    assert_eq!(anchors.allocate("intro"), "intro");
    assert_eq!(anchors.allocate("intro"), "intro-1");
    assert_eq!(anchors.allocate("intro"), "intro-2");
    assert_eq!(anchors.allocate("setup"), "setup");
    assert_eq!(anchors.len(), 4);
  }

  #[test]
  fn test_allocator_skips_literal_collisions() {
    let mut anchors = AnchorAllocator::new();
    assert_eq!(anchors.anchor_for("Intro"), "intro");
    assert_eq!(anchors.anchor_for("Intro"), "intro-1");
    assert_eq!(anchors.anchor_for("Intro 1"), "intro-1-1");

    let mut anchors = AnchorAllocator::new();
    assert_eq!(anchors.anchor_for("Intro 1"), "intro-1");
    assert_eq!(anchors.anchor_for("Intro"), "intro");
    assert_eq!(anchors.anchor_for("Intro"), "intro-2");
  }

  #[test]
  fn test_allocator_reset() {
    let mut anchors = AnchorAllocator::new();
    anchors.allocate("intro");
    anchors.reset();
    assert!(anchors.is_empty());
    assert_eq!(anchors.allocate("intro"), "intro");
  }

  #[test]
  fn test_extract_levels_and_text() {
    let headers = extract_headers("# One\n## Two\n###### Six\n####### Seven");
    let levels: Vec<u8> = headers.iter().map(|h| h.level).collect();
    assert_eq!(levels, vec![1, 2, 6]);
    assert_eq!(headers[2].text, "Six");
  }

  #[test]
  fn test_extract_trims_line_and_text() {
    let headers = extract_headers("   ##   Padded header   \r\n");
    assert_eq!(headers.len(), 1);
    assert_eq!(headers[0].level, 2);
    assert_eq!(headers[0].text, "Padded header");
    assert_eq!(headers[0].anchor, "padded-header");
  }

  #[test]
  fn test_extract_ignores_byte_order_mark() {
    let headers = extract_headers("\u{feff}# Title\n## Part");
    assert_eq!(headers.len(), 2);
    assert_eq!(headers[0].text, "Title");
    assert_eq!(headers[0].anchor, "title");
  }

  #[test]
  fn test_extract_requires_whitespace_after_markers() {
    assert!(extract_headers("#hashtag\n#\n##  ").is_empty());
  }

  #[test]
  fn test_extract_keeps_text_verbatim() {
    let headers = extract_headers("## API/REST *Endpoints*");
    assert_eq!(headers[0].text, "API/REST *Endpoints*");
    assert_eq!(headers[0].anchor, "apirest-endpoints");
  }

  #[test]
  fn test_extract_counts_lines_from_one() {
    let headers = extract_headers("intro\n\n# Title\ntext\n## Sub");
    assert_eq!(headers[0].line_number, 3);
    assert_eq!(headers[1].line_number, 5);
  }

  #[test]
  fn test_extract_with_shared_allocator_avoids_reserved_anchors() {
    let mut anchors = AnchorAllocator::new();
    anchors.allocate("table-of-contents");
    let headers =
      extract_headers_with("## Table of Contents\n# Title", &mut anchors);
    assert_eq!(headers[0].anchor, "table-of-contents-1");
    assert_eq!(headers[1].anchor, "title");
  }
}
