use std::path::{Path, PathBuf};

use log::trace;
use walkdir::WalkDir;

/// Return true if `path` names a Markdown file, judged by its `md`
/// extension.
#[must_use]
pub fn is_markdown_file(path: &Path) -> bool {
  path.extension().is_some_and(|ext| ext == "md")
}

/// Collect all Markdown files below `input_dir`, recursively.
///
/// Entries that cannot be read are skipped. The result is sorted so batch
/// runs visit files in a stable order.
#[must_use]
pub fn collect_markdown_files(input_dir: &Path) -> Vec<PathBuf> {
  let mut files: Vec<PathBuf> = WalkDir::new(input_dir)
    .follow_links(true)
    .into_iter()
    .filter_map(Result::ok)
    .filter(|entry| entry.file_type().is_file() && is_markdown_file(entry.path()))
    .map(walkdir::DirEntry::into_path)
    .collect();

  files.sort();
  trace!("Found {} markdown files in {}", files.len(), input_dir.display());
  files
}
