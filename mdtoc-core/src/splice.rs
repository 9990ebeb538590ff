//! Placement of a rendered outline inside an existing document.
//!
//! With [`InsertionMethod::Beginning`] the insertion line is found by a short
//! walk over the document's lines:
//!
//! 1. skip a frontmatter block (`---` on the first line up to and including
//!    the next `---` line),
//! 2. skip blank lines,
//! 3. skip a top level title (`# `) and at most one blank line after it.
//!
//! The outline therefore never lands inside frontmatter and never separates a
//! title from the outline below it.
use log::debug;

use crate::{
  options::InsertionMethod,
  utils::{is_blank, trim_line},
};

/// Heading placed above every inserted outline.
pub const TOC_HEADING: &str = "## Table of Contents";

const FRONTMATTER_DELIMITER: &str = "---";

/// Steps of the insertion point walk, in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scan {
  Frontmatter,
  BlankLines,
  Title,
  Done,
}

/// Insert `outline` under [`TOC_HEADING`] according to `method`.
///
/// Lines are split and re-joined on `\n` only, so the rest of the document
/// is left byte for byte as it was. [`InsertionMethod::Cursor`] depends on an
/// editor position the core does not know about; the document is returned
/// unchanged.
#[must_use]
pub fn splice_outline_into_document(
  content: &str,
  outline: &str,
  method: InsertionMethod,
) -> String {
  let section = format!("{TOC_HEADING}\n{outline}");
  let mut lines: Vec<&str> = content.split('\n').collect();

  match method {
    InsertionMethod::Beginning => {
      let index = find_insertion_index(&lines);
      debug!("Inserting outline at line {}", index + 1);
      lines.insert(index, "");
      lines.insert(index, &section);
    },
    InsertionMethod::End => {
      lines.push("");
      lines.push(&section);
    },
    InsertionMethod::Cursor => {
      debug!("Cursor insertion is handled by the caller, leaving document");
      return content.to_string();
    },
  }

  lines.join("\n")
}

/// Line index at which an outline should be inserted at the beginning of a
/// document.
#[must_use]
pub fn find_insertion_index(lines: &[&str]) -> usize {
  let mut index = 0;
  let mut state = Scan::Frontmatter;

  loop {
    state = match state {
      Scan::Frontmatter => {
        index = frontmatter_end(lines).unwrap_or(0);
        Scan::BlankLines
      },
      Scan::BlankLines => {
        index += lines
          .iter()
          .skip(index)
          .take_while(|line| is_blank(line))
          .count();
        Scan::Title
      },
      Scan::Title => {
        if lines.get(index).is_some_and(|line| is_title(line)) {
          index += 1;
          if lines.get(index).is_some_and(|line| is_blank(line)) {
            index += 1;
          }
        }
        Scan::Done
      },
      Scan::Done => return index,
    };
  }
}

/// Index of the first line after a closed frontmatter block, if the document
/// starts with one.
///
/// An opening delimiter without a closing one is not frontmatter.
fn frontmatter_end(lines: &[&str]) -> Option<usize> {
  let first = lines.first()?;
  if trim_line(first) != FRONTMATTER_DELIMITER {
    return None;
  }

  lines
    .iter()
    .skip(1)
    .position(|line| trim_line(line) == FRONTMATTER_DELIMITER)
    .map(|offset| offset + 2)
}

fn is_title(line: &str) -> bool {
  trim_line(line).starts_with("# ")
}
