//! Adding a table of contents to documents on disk.
//!
//! [`OutlineInserter`] ties the core pipeline (extract, render, splice) to
//! files and folders. Folder runs are best effort: every document is read,
//! transformed and written before the next one starts, and a failure on one
//! document is recorded without stopping the rest.
use std::{
  fmt,
  fs,
  path::{Path, PathBuf},
};

use color_eyre::eyre::{Context, Report, Result};
use log::{debug, info, warn};
use mdtoc_config::Config;
use mdtoc_core::{
  FormatOptions,
  InsertionMethod,
  OutlineError,
  TOC_HEADING,
  extract_headers,
  generate_outline,
  splice_outline_into_document,
};

use crate::markdown::{collect_markdown_files, is_markdown_file};

/// Why a document was left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
  /// The document contains no headers at all.
  NoHeaders,
  /// Headers exist, but none within the configured level range.
  EmptyRange,
  /// Cursor insertion was requested without a cursor line.
  NoCursor,
  /// The path is not a Markdown file.
  NotMarkdown,
}

impl fmt::Display for SkipReason {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Self::NoHeaders => "no headers found",
      Self::EmptyRange => "no headers found in the specified range",
      Self::NoCursor => "cursor insertion needs a cursor line",
      Self::NotMarkdown => "not a markdown file",
    })
  }
}

/// Result of adding a table of contents to a document held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transform {
  Updated {
    content:       String,
    headers_found: usize,
  },
  Skipped(SkipReason),
}

/// Result of adding a table of contents to a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
  Updated { headers_found: usize },
  Skipped(SkipReason),
}

/// Summary of a folder run.
#[derive(Debug, Default)]
pub struct BatchReport {
  pub updated: Vec<PathBuf>,
  pub skipped: Vec<(PathBuf, SkipReason)>,
  pub failed:  Vec<(PathBuf, Report)>,
}

impl BatchReport {
  /// Number of files visited.
  #[must_use]
  pub fn total(&self) -> usize {
    self.updated.len() + self.skipped.len() + self.failed.len()
  }

  /// Whether every file was processed without an error.
  #[must_use]
  pub fn is_success(&self) -> bool {
    self.failed.is_empty()
  }
}

/// Adds a rendered outline to documents according to a [`Config`].
#[derive(Debug, Clone)]
pub struct OutlineInserter {
  options:     FormatOptions,
  method:      InsertionMethod,
  cursor_line: Option<usize>,
}

impl OutlineInserter {
  /// Create an inserter from loaded settings.
  #[must_use]
  pub const fn from_config(config: &Config) -> Self {
    Self {
      options:     config.format_options(),
      method:      config.insertion_method,
      cursor_line: None,
    }
  }

  /// Set the 0-based line used for [`InsertionMethod::Cursor`].
  #[must_use]
  pub const fn with_cursor_line(mut self, line: Option<usize>) -> Self {
    self.cursor_line = line;
    self
  }

  #[must_use]
  pub const fn options(&self) -> &FormatOptions {
    &self.options
  }

  /// Add a table of contents to `content`.
  #[must_use]
  pub fn apply(&self, content: &str) -> Transform {
    let headers = extract_headers(content);
    if headers.is_empty() {
      return Transform::Skipped(SkipReason::NoHeaders);
    }

    let outline = match generate_outline(&headers, &self.options) {
      Ok(outline) => outline,
      Err(OutlineError::NoHeadersInRange) => {
        return Transform::Skipped(SkipReason::EmptyRange);
      },
    };

    let content = match (self.method, self.cursor_line) {
      (InsertionMethod::Cursor, Some(line)) => {
        insert_at_line(content, &outline.markdown, line)
      },
      (InsertionMethod::Cursor, None) => {
        return Transform::Skipped(SkipReason::NoCursor);
      },
      (method, _) => {
        splice_outline_into_document(content, &outline.markdown, method)
      },
    };

    Transform::Updated {
      content,
      headers_found: outline.headers_found,
    }
  }

  /// Read `path` and compute its new content without writing anything.
  ///
  /// # Errors
  ///
  /// Returns an error if the file cannot be read.
  pub fn preview_file(&self, path: &Path) -> Result<Transform> {
    if !is_markdown_file(path) {
      return Ok(Transform::Skipped(SkipReason::NotMarkdown));
    }

    let content = fs::read_to_string(path).wrap_err_with(|| {
      format!("Failed to read markdown file: {}", path.display())
    })?;
    Ok(self.apply(&content))
  }

  /// Add a table of contents to the file at `path`, writing it in place.
  ///
  /// The file is only written when it changes.
  ///
  /// # Errors
  ///
  /// Returns an error if the file cannot be read or written.
  pub fn apply_to_file(&self, path: &Path) -> Result<FileOutcome> {
    match self.preview_file(path)? {
      Transform::Updated {
        content,
        headers_found,
      } => {
        fs::write(path, content).wrap_err_with(|| {
          format!("Failed to write markdown file: {}", path.display())
        })?;
        info!(
          "Added table of contents with {headers_found} entries to {}",
          path.display()
        );
        Ok(FileOutcome::Updated { headers_found })
      },
      Transform::Skipped(reason) => {
        debug!("Skipping {}: {reason}", path.display());
        Ok(FileOutcome::Skipped(reason))
      },
    }
  }

  /// Add a table of contents to every Markdown file below `dir`.
  ///
  /// Files are handled one at a time. Errors are logged and collected in the
  /// report; the remaining files are still processed and nothing is rolled
  /// back.
  #[must_use]
  pub fn apply_to_folder(&self, dir: &Path) -> BatchReport {
    let files = collect_markdown_files(dir);
    info!("Found {} markdown files in {}", files.len(), dir.display());

    let mut report = BatchReport::default();
    for file in files {
      match self.apply_to_file(&file) {
        Ok(FileOutcome::Updated { .. }) => report.updated.push(file),
        Ok(FileOutcome::Skipped(reason)) => report.skipped.push((file, reason)),
        Err(e) => {
          warn!("{e:#}");
          report.failed.push((file, e));
        },
      }
    }

    report
  }
}

/// Insert the table of contents section before 0-based line `line`.
///
/// A line past the end of the document appends the section. A blank line
/// follows the section, as with insertion at the beginning.
#[must_use]
pub fn insert_at_line(content: &str, outline: &str, line: usize) -> String {
  let section = format!("{TOC_HEADING}\n{outline}");
  let mut lines: Vec<&str> = content.split('\n').collect();
  let index = line.min(lines.len());

  lines.insert(index, "");
  lines.insert(index, &section);
  lines.join("\n")
}
