use std::{
  fs,
  io::{self, Write},
  path::{Path, PathBuf},
};

use color_eyre::eyre::{Context, Result, bail};
use log::{LevelFilter, error, info, warn};
use mdtoc::cli::{Cli, Commands, FormatArgs};
use mdtoc_config::Config;
use mdtoc_core::{extract_headers, generate_outline, group_by_level};
use mdtoc_utils::{
  FileOutcome,
  OutlineInserter,
  SkipReason,
  Transform,
  collect_markdown_files,
};

fn main() -> Result<()> {
  color_eyre::install()?;

  let cli = Cli::parse_args();

  // Initialize logging first so we can log during command handling
  env_logger::Builder::new()
    .filter_level(if cli.verbose {
      LevelFilter::Debug
    } else {
      LevelFilter::Info
    })
    .write_style(env_logger::WriteStyle::Auto)
    .init();

  match &cli.command {
    Commands::Init {
      output,
      format,
      force,
      from_current,
    } => {
      let current = if *from_current {
        Some(load_config(&cli, &FormatArgs::default())?)
      } else {
        None
      };
      init(output, format, *force, current.as_ref())
    },

    Commands::Insert {
      paths,
      format,
      insertion,
      cursor_line,
      dry_run,
    } => {
      let mut config = load_config(&cli, format)?;
      if let Some(method) = insertion {
        config.insertion_method = *method;
      }
      // Lines are 1-based on the command line
      let cursor_line = cursor_line.map(|line| line.saturating_sub(1));
      let inserter =
        OutlineInserter::from_config(&config).with_cursor_line(cursor_line);

      if *dry_run {
        preview(&inserter, paths)
      } else {
        insert(&inserter, paths)
      }
    },

    Commands::Show { file, format } => {
      let config = load_config(&cli, format)?;
      show(&config, file)
    },

    Commands::Headers { file, json } => headers(file, *json),
  }
}

/// Load configuration files and overrides, then apply command line flags.
fn load_config(cli: &Cli, format: &FormatArgs) -> Result<Config> {
  let mut config = Config::load(&cli.config_files, &cli.config_overrides)?;
  format.apply_to(&mut config);
  config.validate()?;
  Ok(config)
}

/// Write a configuration file to `output`: the commented default template,
/// or the settings in `current` when given.
fn init(
  output: &Path,
  format: &str,
  force: bool,
  current: Option<&Config>,
) -> Result<()> {
  // Check if file already exists and that we're not forcing overwrite
  if output.exists() && !force {
    bail!(
      "Configuration file already exists: {}. Use --force to overwrite.",
      output.display()
    );
  }

  if let Some(parent) = output.parent() {
    if !parent.as_os_str().is_empty() && !parent.exists() {
      fs::create_dir_all(parent).wrap_err_with(|| {
        format!("Failed to create directory: {}", parent.display())
      })?;
      info!("Created directory: {}", parent.display());
    }
  }

  match current {
    Some(config) => config.save(output),
    None => Config::generate_default_config(format, output),
  }
  .wrap_err_with(|| {
    format!("Failed to generate configuration file: {}", output.display())
  })?;

  info!("Configuration file created at {}", output.display());
  Ok(())
}

/// Write a table of contents into every given file and folder.
///
/// A failing document does not stop the run; the command fails at the end if
/// any document could not be updated.
fn insert(inserter: &OutlineInserter, paths: &[PathBuf]) -> Result<()> {
  let mut updated = 0;
  let mut failed = 0;

  for path in paths {
    if path.is_dir() {
      let report = inserter.apply_to_folder(path);
      info!(
        "{}: {} updated, {} skipped, {} failed",
        path.display(),
        report.updated.len(),
        report.skipped.len(),
        report.failed.len()
      );
      updated += report.updated.len();
      failed += report.failed.len();
      continue;
    }

    match inserter.apply_to_file(path) {
      Ok(FileOutcome::Updated { .. }) => updated += 1,
      Ok(FileOutcome::Skipped(reason)) => {
        warn!("Skipped {}: {reason}", path.display());
      },
      Err(e) => {
        error!("{e:#}");
        failed += 1;
      },
    }
  }

  if failed > 0 {
    bail!("{failed} document(s) could not be updated ({updated} updated)");
  }
  Ok(())
}

/// Print the updated documents without touching the files.
fn preview(inserter: &OutlineInserter, paths: &[PathBuf]) -> Result<()> {
  let files: Vec<PathBuf> = paths
    .iter()
    .flat_map(|path| {
      if path.is_dir() {
        collect_markdown_files(path)
      } else {
        vec![path.clone()]
      }
    })
    .collect();
  let with_banner = files.len() > 1;

  let mut stdout = io::stdout().lock();
  let mut failed = 0;
  for file in &files {
    match inserter.preview_file(file) {
      Ok(Transform::Updated { content, .. }) => {
        if with_banner {
          writeln!(stdout, "==> {} <==", file.display())?;
        }
        writeln!(stdout, "{content}")?;
      },
      Ok(Transform::Skipped(reason)) => {
        warn!("Skipped {}: {reason}", file.display());
      },
      Err(e) => {
        error!("{e:#}");
        failed += 1;
      },
    }
  }

  if failed > 0 {
    bail!("{failed} document(s) could not be read");
  }
  Ok(())
}

/// Print the table of contents of `file`.
fn show(config: &Config, file: &Path) -> Result<()> {
  let content = fs::read_to_string(file)
    .wrap_err_with(|| format!("Failed to read file: {}", file.display()))?;

  let headers = extract_headers(&content);
  if headers.is_empty() {
    warn!("Skipped {}: {}", file.display(), SkipReason::NoHeaders);
    return Ok(());
  }

  match generate_outline(&headers, &config.format_options()) {
    Ok(outline) => writeln!(io::stdout().lock(), "{}", outline.markdown)?,
    Err(e) => warn!("Skipped {}: {e}", file.display()),
  }
  Ok(())
}

/// List the headers of `file`, grouped by level.
fn headers(file: &Path, json: bool) -> Result<()> {
  let content = fs::read_to_string(file)
    .wrap_err_with(|| format!("Failed to read file: {}", file.display()))?;
  let headers = extract_headers(&content);

  let mut stdout = io::stdout().lock();
  if json {
    let rendered = serde_json::to_string_pretty(&headers)
      .wrap_err("Failed to serialize headers")?;
    writeln!(stdout, "{rendered}")?;
    return Ok(());
  }

  for header in &headers {
    writeln!(
      stdout,
      "{:>5}  {} {}  #{}",
      header.line_number,
      "#".repeat(usize::from(header.level)),
      header.text,
      header.anchor
    )?;
  }

  for (level, group) in group_by_level(&headers) {
    info!("Level {level}: {} header(s)", group.len());
  }
  Ok(())
}
