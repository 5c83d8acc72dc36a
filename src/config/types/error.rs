//! Configuration error types.

use super::FieldPath;
use owo_colors::OwoColorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Validation(FieldErrors),
}

/// Field-level validation failures, in the order they were found.
#[derive(Debug, Default)]
pub struct FieldErrors(pub Vec<(FieldPath, String)>);

impl FieldErrors {
    /// Convert to Result (returns Err if there are errors).
    pub fn into_result(self) -> Result<(), ConfigError> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(self))
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", "config validation failed:".red().bold())?;
        for (field, message) in &self.0 {
            write!(
                f,
                "\n{}{}{} {} {}",
                "[".dimmed(),
                field.as_str().cyan(),
                "]".dimmed(),
                "→".red(),
                message
            )?;
        }
        Ok(())
    }
}
