//! # mdtoc-core - Markdown table of contents generation
//!
//! This crate scans Markdown documents for ATX headers, derives stable anchors
//! for them and renders a navigable outline back into Markdown. It also knows
//! where that outline belongs in an existing document: after any frontmatter
//! block and after the document title.
//!
//! ## Quick Start
//!
//! ```rust
//! use mdtoc_core::{
//!   FormatOptions,
//!   InsertionMethod,
//!   extract_headers,
//!   generate_outline,
//!   splice_outline_into_document,
//! };
//!
//! let document = "# Guide\n\n## Install\n\n## Usage\n";
//! let headers = extract_headers(document);
//! assert_eq!(headers.len(), 3);
//!
//! let outline = generate_outline(&headers, &FormatOptions::default())
//!   .expect("document has headers");
//! let updated = splice_outline_into_document(
//!   document,
//!   &outline.markdown,
//!   InsertionMethod::Beginning,
//! );
//! assert!(updated.starts_with("# Guide\n\n## Table of Contents\n"));
//! ```
//!
//! ## Pipeline
//!
//! - [`extract_headers`] performs a line based scan. Lines that look like
//!   headers inside fenced code blocks are reported as headers too.
//! - [`generate_outline`] filters by level range and renders the outline,
//!   returning [`OutlineError::NoHeadersInRange`] when nothing is left.
//! - [`splice_outline_into_document`] inserts the rendered outline under a
//!   `## Table of Contents` heading.

pub mod extractor;
pub mod options;
pub mod renderer;
pub mod splice;
mod types;
pub mod utils;

pub use crate::{
  extractor::{AnchorAllocator, extract_headers, extract_headers_with},
  options::{
    FormatOptions,
    FormatType,
    InsertionMethod,
    LevelRange,
    LinkFormat,
    MAX_INDENT_SIZE,
    ParseOptionError,
  },
  renderer::{filter_by_level, generate_outline, group_by_level},
  splice::{TOC_HEADING, find_insertion_index, splice_outline_into_document},
  types::{Header, Outline, OutlineError, OutlineResult},
  utils::slugify,
};
