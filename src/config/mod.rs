//! Tool configuration management for `authroute.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── routes     # [routes]
//! │   ├── schema     # [schema]
//! │   ├── check      # [check]
//! │   └── resolve    # [resolve]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError
//! │   └── field      # FieldPath
//! └── mod.rs         # RouteConfig (this file)
//! ```
//!
//! The config file is optional: without one every section takes its
//! defaults and paths resolve against the current directory.

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{CheckConfig, CheckLevel, ResolveConfig, RoutesConfig, SchemaConfig};
pub use types::{ConfigError, FieldErrors, FieldPath};

use crate::{
    cli::{Cli, Commands},
    debug, log,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing authroute.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RouteConfig {
    /// Path of the loaded config file, `None` when running on defaults
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Directory relative paths resolve against (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Route table location
    #[serde(default)]
    pub routes: RoutesConfig,

    /// Roles and dynamic paths
    #[serde(default)]
    pub schema: SchemaConfig,

    /// Validation settings
    #[serde(default)]
    pub check: CheckConfig,

    /// Resolution settings
    #[serde(default)]
    pub resolve: ResolveConfig,
}

impl RouteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd for the config file. The root is the config
    /// file's parent directory, or cwd when no config file exists.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let mut config = match find_config_file(&cli.config, &cwd) {
            Some(path) => {
                debug!("config"; "using {}", path.display());
                let mut config = Self::from_path(&path)?;
                config.root = path.parent().map(Path::to_path_buf).unwrap_or_default();
                config.config_path = Some(path);
                config
            }
            None => {
                debug!("config"; "{} not found, using defaults", cli.config.display());
                Self {
                    root: cwd.clone(),
                    ..Self::default()
                }
            }
        };

        config.apply_command_options(cli, &cwd);
        config.validate()?;

        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Route table file, resolved against the root.
    pub fn routes_file(&self) -> PathBuf {
        self.root.join(&self.routes.file)
    }

    /// Whether the configured route table exists on disk.
    pub fn has_routes_file(&self) -> bool {
        self.routes_file().is_file()
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply command-specific configuration options.
    ///
    /// A route table given on the command line is relative to cwd, not root.
    fn apply_command_options(&mut self, cli: &Cli, cwd: &Path) {
        if let Some(file) = cli.routes_override() {
            self.routes.file = cwd.join(file);
        }

        match &cli.command {
            Commands::Check { args } => {
                if args.warn_only {
                    self.check.level = CheckLevel::Warn;
                }
            }
            Commands::Resolve { args } => {
                Self::update_option(&mut self.resolve.layout, args.layout.as_ref());
            }
            Commands::Path { .. } => {}
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration, collecting all field errors at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();
        self.routes.validate(&mut errors);
        self.schema.validate(&mut errors);
        FieldErrors(errors).into_result()
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config, panicking on unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> RouteConfig {
    let (parsed, ignored) = RouteConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
