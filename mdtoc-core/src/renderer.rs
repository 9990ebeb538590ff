//! Outline rendering.
use std::collections::BTreeMap;

use log::debug;

use crate::{
  options::{FormatOptions, LevelRange, MAX_INDENT_SIZE},
  types::{Header, Outline, OutlineError, OutlineResult},
};

/// Render a table of contents for `headers`.
///
/// Only headers within `options.level_range` are kept. Nesting is relative
/// to the shallowest kept header, which always renders without indentation.
///
/// # Errors
///
/// Returns [`OutlineError::NoHeadersInRange`] when no header falls within the
/// level range, including when `headers` is empty.
pub fn generate_outline(
  headers: &[Header],
  options: &FormatOptions,
) -> OutlineResult {
  let filtered = filter_by_level(headers, options.level_range);

  let Some(min_level) = filtered.iter().map(|h| h.level).min() else {
    return Err(OutlineError::NoHeadersInRange);
  };

  let lines: Vec<String> = filtered
    .iter()
    .map(|header| format_entry(header, min_level, options))
    .collect();

  debug!(
    "Rendered outline with {} of {} headers",
    filtered.len(),
    headers.len()
  );

  Ok(Outline {
    markdown:      lines.join("\n"),
    headers_found: filtered.len(),
  })
}

/// Headers whose level lies within `range`, in document order.
#[must_use]
pub fn filter_by_level(headers: &[Header], range: LevelRange) -> Vec<&Header> {
  headers.iter().filter(|h| range.contains(h.level)).collect()
}

/// Group headers by level. Within a level, headers keep document order.
#[must_use]
pub fn group_by_level(headers: &[Header]) -> BTreeMap<u8, Vec<&Header>> {
  let mut levels: BTreeMap<u8, Vec<&Header>> = BTreeMap::new();
  for header in headers {
    levels.entry(header.level).or_default().push(header);
  }
  levels
}

fn format_entry(
  header: &Header,
  min_level: u8,
  options: &FormatOptions,
) -> String {
  let relative_level = header.level.saturating_sub(min_level);
  let indent_size = options.indent_size.min(MAX_INDENT_SIZE);
  let indent = " ".repeat(usize::from(relative_level) * indent_size);
  let marker = options.format_type.marker(relative_level);

  let label = if options.include_links {
    options.link_format.link(&header.text, &header.anchor)
  } else {
    header.text.clone()
  };

  format!("{indent}{marker} {label}")
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, reason = "Fine in tests")]
  use super::*;
  use crate::options::{FormatType, LinkFormat};

  fn header(level: u8, text: &str, anchor: &str) -> Header {
    Header {
      level,
      text: text.to_string(),
      anchor: anchor.to_string(),
      line_number: 1,
    }
  }

  #[test]
  fn test_mixed_uses_ordinal_only_at_top() {
    let headers = vec![
      header(2, "A", "a"),
      header(3, "B", "b"),
      header(4, "C", "c"),
      header(2, "D", "d"),
    ];
    let options = FormatOptions {
      format_type: FormatType::Mixed,
      include_links: false,
      ..Default::default()
    };

    let outline = generate_outline(&headers, &options).unwrap();
    assert_eq!(outline.markdown, "1. A\n  - B\n    - C\n1. D");
  }

  #[test]
  fn test_indent_size_zero_flattens() {
    let headers = vec![header(1, "A", "a"), header(3, "B", "b")];
    let options = FormatOptions {
      indent_size: 0,
      include_links: false,
      ..Default::default()
    };
    let outline = generate_outline(&headers, &options).unwrap();
    assert_eq!(outline.markdown, "- A\n- B");
  }

  #[test]
  fn test_oversized_indent_is_clamped() {
    let headers = vec![header(1, "A", "a"), header(2, "B", "b")];
    let options = FormatOptions {
      indent_size: usize::MAX,
      include_links: false,
      ..Default::default()
    };
    let outline = generate_outline(&headers, &options).unwrap();
    assert_eq!(
      outline.markdown,
      format!("- A\n{}- B", " ".repeat(MAX_INDENT_SIZE))
    );
  }

  #[test]
  fn test_wiki_links_repeat_text_verbatim() {
    let headers = vec![header(1, "API/REST Endpoints", "apirest-endpoints")];
    let options = FormatOptions {
      link_format: LinkFormat::Wiki,
      ..Default::default()
    };
    let outline = generate_outline(&headers, &options).unwrap();
    assert_eq!(outline.markdown, "- [[#API/REST Endpoints]]");
  }

  #[test]
  fn test_range_without_matches_is_an_error() {
    let headers = vec![header(1, "A", "a")];
    let options = FormatOptions {
      level_range: LevelRange::new(2, 6),
      ..Default::default()
    };
    assert_eq!(
      generate_outline(&headers, &options),
      Err(OutlineError::NoHeadersInRange)
    );
  }

  #[test]
  fn test_group_by_level_keeps_document_order() {
    let headers = vec![
      header(2, "A", "a"),
      header(1, "B", "b"),
      header(2, "C", "c"),
    ];
    let grouped = group_by_level(&headers);
    assert_eq!(grouped.keys().copied().collect::<Vec<_>>(), vec![1, 2]);
    let second: Vec<&str> =
      grouped[&2].iter().map(|h| h.text.as_str()).collect();
    assert_eq!(second, vec!["A", "C"]);
  }
}
