use std::{
  fs,
  path::{Path, PathBuf},
  str::FromStr,
};

use mdtoc_core::{
  FormatOptions,
  FormatType,
  InsertionMethod,
  LevelRange,
  LinkFormat,
  MAX_INDENT_SIZE,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ConfigError;

/// Lowest and highest header level a document can contain.
const LEVEL_BOUNDS: (u8, u8) = (1, 6);

/// Settings for generating and inserting a table of contents.
///
/// [`Config`] is usually loaded from a TOML or JSON file and adjusted with
/// `--config KEY=VALUE` overrides or dedicated CLI flags. Every field has a
/// default, so a config file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
  /// Marker style for outline entries.
  pub format_type: FormatType,

  /// Spaces per nesting level.
  pub indent_size: usize,

  /// Whether outline entries link to their header.
  pub include_links: bool,

  /// Link syntax for outline entries.
  pub link_format: LinkFormat,

  /// Shallowest header level to include.
  pub min_header_level: u8,

  /// Deepest header level to include.
  pub max_header_level: u8,

  /// Where the outline is inserted.
  pub insertion_method: InsertionMethod,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      format_type:      FormatType::Bullets,
      indent_size:      2,
      include_links:    true,
      link_format:      LinkFormat::Wiki,
      min_header_level: 1,
      max_header_level: 6,
      insertion_method: InsertionMethod::Beginning,
    }
  }
}

impl Config {
  /// Load configuration from a file (TOML or JSON).
  ///
  /// # Errors
  ///
  /// Returns an error if the file cannot be read or parsed, or if the format is
  /// unsupported.
  pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
    let path = path.as_ref();
    let value = read_config_value(path)?;
    serde_json::from_value(value).map_err(|e| {
      ConfigError::Config(format!(
        "Invalid configuration in {}: {}",
        path.display(),
        e
      ))
    })
  }

  /// Load configuration from files and overrides.
  ///
  /// Files are merged in order, key by key, so a later file only replaces
  /// the keys it sets. Without explicit files, a config file is looked up in
  /// the standard locations (see [`Config::find_config_file`]). Overrides in
  /// `KEY=VALUE` form are applied last, then the result is validated.
  ///
  /// # Errors
  ///
  /// Returns an error if a file cannot be loaded, an override is malformed or
  /// the final configuration is invalid.
  pub fn load(
    config_files: &[PathBuf],
    config_overrides: &[String],
  ) -> Result<Self, ConfigError> {
    let mut config = if config_files.is_empty() {
      if let Some(discovered_config) = Self::find_config_file() {
        log::info!(
          "Using discovered config file: {}",
          discovered_config.display()
        );
        Self::from_file(&discovered_config).map_err(|e| {
          ConfigError::Config(format!(
            "Failed to load discovered config from {}: {}",
            discovered_config.display(),
            e
          ))
        })?
      } else {
        Self::default()
      }
    } else {
      let mut merged = Map::new();
      for config_path in config_files {
        let value = read_config_value(config_path).map_err(|e| {
          ConfigError::Config(format!(
            "Failed to load config from {}: {}",
            config_path.display(),
            e
          ))
        })?;
        merge_values(&mut merged, value, config_path)?;
      }

      if config_files.len() > 1 {
        log::info!("Loaded and merged {} config files", config_files.len());
      }

      serde_json::from_value(Value::Object(merged)).map_err(|e| {
        ConfigError::Config(format!("Invalid configuration: {e}"))
      })?
    };

    if !config_overrides.is_empty() {
      config.apply_overrides(config_overrides)?;
    }

    config.validate()?;
    Ok(config)
  }

  /// Apply configuration overrides from KEY=VALUE strings.
  ///
  /// # Errors
  ///
  /// Returns an error if:
  ///
  /// - An override string is not in KEY=VALUE format
  /// - A key is not recognized
  /// - A value cannot be parsed as the expected type
  ///
  /// # Example
  ///
  /// ```rust
  /// use mdtoc_config::Config;
  ///
  /// let mut config = Config::default();
  /// config
  ///   .apply_overrides(&[
  ///     "format_type=mixed".to_string(),
  ///     "indent_size=4".to_string(),
  ///   ])
  ///   .unwrap();
  /// assert_eq!(config.indent_size, 4);
  /// ```
  pub fn apply_overrides(
    &mut self,
    overrides: &[String],
  ) -> Result<(), ConfigError> {
    for override_str in overrides {
      let (key, value) = override_str.split_once('=').ok_or_else(|| {
        ConfigError::Config(format!(
          "Invalid config override format: '{override_str}'. Expected \
           KEY=VALUE"
        ))
      })?;

      self.apply_override(key.trim(), value.trim())?;
    }

    Ok(())
  }

  /// Apply a single override.
  ///
  /// # Errors
  ///
  /// Returns an error for unknown keys or values of the wrong type.
  pub fn apply_override(
    &mut self,
    key: &str,
    value: &str,
  ) -> Result<(), ConfigError> {
    match key {
      "format_type" => self.format_type = parse_field(key, value)?,
      "indent_size" => self.indent_size = parse_positive(key, value)?,
      "include_links" => self.include_links = parse_bool(key, value)?,
      "link_format" => self.link_format = parse_field(key, value)?,
      "min_header_level" => self.min_header_level = parse_field(key, value)?,
      "max_header_level" => self.max_header_level = parse_field(key, value)?,
      "insertion_method" => self.insertion_method = parse_field(key, value)?,
      _ => {
        return Err(ConfigError::Config(format!(
          "Unknown configuration key: '{key}'. See documentation for \
           supported keys."
        )));
      },
    }

    log::debug!("Applied config override: {key}={value}");
    Ok(())
  }

  /// Check that header levels are within 1-6 and ordered, and that the indent
  /// is between 1 and [`MAX_INDENT_SIZE`].
  ///
  /// # Errors
  ///
  /// Returns an error listing every problem found.
  pub fn validate(&self) -> Result<(), ConfigError> {
    let (lowest, highest) = LEVEL_BOUNDS;
    let mut errors = Vec::new();

    for (name, level) in [
      ("min_header_level", self.min_header_level),
      ("max_header_level", self.max_header_level),
    ] {
      if !(lowest..=highest).contains(&level) {
        errors.push(format!(
          "{name} must be between {lowest} and {highest}, got {level}"
        ));
      }
    }

    if self.min_header_level > self.max_header_level {
      errors.push(format!(
        "min_header_level ({}) is greater than max_header_level ({})",
        self.min_header_level, self.max_header_level
      ));
    }

    if self.indent_size == 0 {
      errors.push("indent_size must be a positive integer".to_string());
    } else if self.indent_size > MAX_INDENT_SIZE {
      errors.push(format!(
        "indent_size must be at most {MAX_INDENT_SIZE}, got {}",
        self.indent_size
      ));
    }

    if errors.is_empty() {
      Ok(())
    } else {
      Err(ConfigError::Config(errors.join("; ")))
    }
  }

  /// Rendering options derived from this configuration.
  #[must_use]
  pub const fn format_options(&self) -> FormatOptions {
    FormatOptions {
      format_type:   self.format_type,
      indent_size:   self.indent_size,
      include_links: self.include_links,
      link_format:   self.link_format,
      level_range:   LevelRange::new(
        self.min_header_level,
        self.max_header_level,
      ),
    }
  }

  /// Search for config files in common locations
  #[must_use]
  pub fn find_config_file() -> Option<PathBuf> {
    let config_filenames = [
      "mdtoc.toml",
      "mdtoc.json",
      ".mdtoc.toml",
      ".mdtoc.json",
      ".config/mdtoc.toml",
      ".config/mdtoc.json",
    ];

    if let Ok(current_dir) = std::env::current_dir() {
      for filename in &config_filenames {
        let config_path = current_dir.join(filename);
        if config_path.exists() {
          return Some(config_path);
        }
      }
    }

    if let Ok(xdg_config_home) = std::env::var("XDG_CONFIG_HOME") {
      let xdg_config_dir = PathBuf::from(xdg_config_home);
      for filename in &["mdtoc.toml", "mdtoc.json"] {
        let config_path = xdg_config_dir.join(filename);
        if config_path.exists() {
          return Some(config_path);
        }
      }
    }

    if let Ok(home) = std::env::var("HOME") {
      let home_config_dir = PathBuf::from(home).join(".config").join("mdtoc");
      for filename in &["config.toml", "config.json"] {
        let config_path = home_config_dir.join(filename);
        if config_path.exists() {
          return Some(config_path);
        }
      }
    }

    None
  }

  /// Generate a default configuration file with commented explanations
  ///
  /// # Errors
  ///
  /// Returns an error if the format is unsupported or the file cannot be
  /// written.
  pub fn generate_default_config(
    format: &str,
    path: &Path,
  ) -> Result<(), ConfigError> {
    let config_content = crate::templates::get_template(format)
      .map_err(|e| ConfigError::Template(e.to_string()))?;

    fs::write(path, config_content).map_err(|e| {
      ConfigError::Config(format!(
        "Failed to write default config to {}: {}",
        path.display(),
        e
      ))
    })?;

    log::info!("Created default configuration file: {}", path.display());
    Ok(())
  }

  /// Write the current settings to `path`, as TOML or JSON depending on the
  /// extension.
  ///
  /// # Errors
  ///
  /// Returns an error if the extension is unsupported, serialization fails or
  /// the file cannot be written.
  pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
    let content = match extension_of(path)?.as_str() {
      "json" => {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        json
      },
      "toml" => toml::to_string(self)?,
      _ => {
        return Err(ConfigError::Config(format!(
          "Unsupported config file format: {}",
          path.display()
        )));
      },
    };

    fs::write(path, content)?;
    log::info!("Saved configuration to {}", path.display());
    Ok(())
  }
}

fn extension_of(path: &Path) -> Result<String, ConfigError> {
  path
    .extension()
    .and_then(|ext| ext.to_str())
    .map(str::to_lowercase)
    .ok_or_else(|| {
      ConfigError::Config(format!(
        "Config file has no extension: {}",
        path.display()
      ))
    })
}

/// Read a TOML or JSON config file into a generic value so that several
/// files can be merged before deserializing.
fn read_config_value(path: &Path) -> Result<Value, ConfigError> {
  let content = fs::read_to_string(path).map_err(|e| {
    ConfigError::Config(format!(
      "Failed to read config file: {}: {}",
      path.display(),
      e
    ))
  })?;

  match extension_of(path)?.as_str() {
    "json" => {
      serde_json::from_str(&content).map_err(|e| {
        ConfigError::Config(format!(
          "Failed to parse JSON config from {}: {}",
          path.display(),
          e
        ))
      })
    },
    "toml" => {
      toml::from_str(&content).map_err(|e| {
        ConfigError::Config(format!(
          "Failed to parse TOML config from {}: {}",
          path.display(),
          e
        ))
      })
    },
    _ => {
      Err(ConfigError::Config(format!(
        "Unsupported config file format: {}",
        path.display()
      )))
    },
  }
}

fn merge_values(
  merged: &mut Map<String, Value>,
  value: Value,
  path: &Path,
) -> Result<(), ConfigError> {
  let Value::Object(entries) = value else {
    return Err(ConfigError::Config(format!(
      "Config file {} must contain a table of settings",
      path.display()
    )));
  };
  merged.extend(entries);
  Ok(())
}

fn parse_field<T: FromStr>(key: &str, value: &str) -> Result<T, ConfigError>
where
  T::Err: std::fmt::Display,
{
  value.parse().map_err(|e| {
    ConfigError::Config(format!("Invalid value for '{key}': '{value}' - {e}"))
  })
}

fn parse_positive(key: &str, value: &str) -> Result<usize, ConfigError> {
  match value.parse::<usize>() {
    Ok(n) if n > 0 => Ok(n),
    _ => {
      Err(ConfigError::Config(format!(
        "Invalid value for '{key}': '{value}'. Expected a positive integer"
      )))
    },
  }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
  match value.to_lowercase().as_str() {
    "true" | "yes" | "1" => Ok(true),
    "false" | "no" | "0" => Ok(false),
    _ => {
      Err(ConfigError::Config(format!(
        "Invalid boolean value for '{key}': '{value}'. Expected true/false, \
         yes/no, or 1/0"
      )))
    },
  }
}
