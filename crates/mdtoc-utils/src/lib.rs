pub mod insert;
pub mod markdown;

pub use insert::{
  BatchReport,
  FileOutcome,
  OutlineInserter,
  SkipReason,
  Transform,
  insert_at_line,
};
pub use markdown::{collect_markdown_files, is_markdown_file};
