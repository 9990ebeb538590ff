use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use mdtoc_config::Config;
use mdtoc_core::{FormatType, InsertionMethod, LinkFormat};

/// Command line interface for mdtoc
#[derive(Parser, Debug)]
#[command(
  author,
  version,
  about = "mdtoc: tables of contents for Markdown notes"
)]
pub struct Cli {
  /// Subcommand to execute (see [`Commands`])
  #[command(subcommand)]
  pub command: Commands,

  /// Enable verbose debug logging
  #[arg(short, long, global = true)]
  pub verbose: bool,

  /// Path to configuration file(s) (TOML or JSON, can be specified multiple
  /// times). Multiple files are merged in order, with later files overriding
  /// earlier ones
  #[arg(
    short = 'c',
    long = "config-file",
    global = true,
    action = clap::ArgAction::Append
  )]
  pub config_files: Vec<PathBuf>,

  /// Override configuration values (KEY=VALUE format, can be used multiple
  /// times)
  #[arg(long = "config", global = true, action = clap::ArgAction::Append)]
  pub config_overrides: Vec<String>,
}

/// All supported subcommands for the mdtoc CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
  /// Add a table of contents to Markdown files. Directories are processed
  /// recursively.
  Insert {
    /// Markdown files or directories to process.
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    #[command(flatten)]
    format: FormatArgs,

    /// Where to insert the table of contents.
    #[arg(short = 'm', long = "insertion")]
    insertion: Option<InsertionMethod>,

    /// Line (1-based) to insert before when using cursor insertion.
    #[arg(long = "cursor-line")]
    cursor_line: Option<usize>,

    /// Print the updated documents instead of writing them.
    #[arg(short = 'n', long = "dry-run")]
    dry_run: bool,
  },

  /// Print the table of contents of a Markdown file. Prints nothing, with a
  /// warning, when no header falls within the level range.
  Show {
    /// Markdown file to read.
    file: PathBuf,

    #[command(flatten)]
    format: FormatArgs,
  },

  /// List the headers found in a Markdown file with their anchors.
  Headers {
    /// Markdown file to read.
    file: PathBuf,

    /// Print headers as JSON.
    #[arg(long)]
    json: bool,
  },

  /// Initialize a new mdtoc configuration file
  Init {
    /// Path to create the configuration file at
    #[arg(short, long, default_value = "mdtoc.toml")]
    output: PathBuf,

    /// Format of the configuration file.
    #[arg(short = 'F', long, default_value = "toml", value_parser = ["toml", "json"])]
    format: String,

    /// Force overwrite if file already exists
    #[arg(long)]
    force: bool,

    /// Write the settings currently in effect (config files and `--config`
    /// overrides) instead of the commented template. The format follows the
    /// output file's extension.
    #[arg(long)]
    from_current: bool,
  },
}

/// Rendering flags shared by the subcommands that produce an outline. Each
/// flag, when given, overrides the loaded configuration.
#[derive(Args, Debug, Default, Clone)]
pub struct FormatArgs {
  /// Marker style: bullets, numbers or mixed.
  #[arg(short = 'f', long = "format")]
  pub format_type: Option<FormatType>,

  /// Spaces per nesting level.
  #[arg(short = 'i', long = "indent")]
  pub indent_size: Option<usize>,

  /// Render plain entries instead of links.
  #[arg(long = "no-links")]
  pub no_links: bool,

  /// Link syntax: markdown or wiki.
  #[arg(short = 'l', long = "link-format")]
  pub link_format: Option<LinkFormat>,

  /// Shallowest header level to include.
  #[arg(long = "min-level", value_parser = clap::value_parser!(u8).range(1..=6))]
  pub min_level: Option<u8>,

  /// Deepest header level to include.
  #[arg(long = "max-level", value_parser = clap::value_parser!(u8).range(1..=6))]
  pub max_level: Option<u8>,
}

impl FormatArgs {
  /// Merge the flags that were given into `config`.
  pub fn apply_to(&self, config: &mut Config) {
    if let Some(format_type) = self.format_type {
      config.format_type = format_type;
    }
    if let Some(indent_size) = self.indent_size {
      config.indent_size = indent_size;
    }
    if self.no_links {
      config.include_links = false;
    }
    if let Some(link_format) = self.link_format {
      config.link_format = link_format;
    }
    if let Some(min_level) = self.min_level {
      config.min_header_level = min_level;
    }
    if let Some(max_level) = self.max_level {
      config.max_header_level = max_level;
    }
  }
}

impl Cli {
  /// Parse command line arguments into a [`Cli`] struct.
  #[must_use]
  pub fn parse_args() -> Self {
    Self::parse()
  }
}
