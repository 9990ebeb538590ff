use std::fmt;

/// Error type for template operations.
#[derive(Debug)]
pub enum TemplateError {
  /// Indicates that the requested configuration format is not supported.
  /// Contains the name of the unsupported format.
  UnsupportedFormat(String),
}

impl fmt::Display for TemplateError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::UnsupportedFormat(format) => {
        write!(f, "Unsupported config format: {format}")
      },
    }
  }
}

impl std::error::Error for TemplateError {}

/// Default configuration template in TOML, with a comment per field.
pub const DEFAULT_TOML_TEMPLATE: &str = r#"# mdtoc Configuration File

# Marker style for outline entries: "bullets", "numbers" or "mixed".
# "mixed" numbers the top level entries and bullets everything below them.
format_type = "bullets"

# Spaces per nesting level, from 1 to 16
indent_size = 2

# Whether outline entries link to their header
include_links = true

# Link syntax: "wiki" renders [[#Header Text]], "markdown" renders
# [Header Text](#header-text)
link_format = "wiki"

# Only headers within this range (inclusive) are included
min_header_level = 1
max_header_level = 6

# Where the outline goes: "beginning" (after frontmatter and title), "end",
# or "cursor" (requires --cursor-line)
insertion_method = "beginning"
"#;

/// Default configuration template in JSON.
pub const DEFAULT_JSON_TEMPLATE: &str = r#"{
  "format_type": "bullets",
  "indent_size": 2,
  "include_links": true,
  "link_format": "wiki",
  "min_header_level": 1,
  "max_header_level": 6,
  "insertion_method": "beginning"
}
"#;

/// Get the default configuration template for the given format.
///
/// # Errors
///
/// Returns [`TemplateError::UnsupportedFormat`] for anything other than
/// `toml` or `json`.
pub fn get_template(format: &str) -> Result<&'static str, TemplateError> {
  match format.to_lowercase().as_str() {
    "toml" => Ok(DEFAULT_TOML_TEMPLATE),
    "json" => Ok(DEFAULT_JSON_TEMPLATE),
    _ => Err(TemplateError::UnsupportedFormat(format.to_string())),
  }
}
