//! `[routes]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [routes]
//! file = "routes.json"        # JSON (backend format) or TOML route table
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::FieldPath;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutesConfig {
    /// Route table file, relative to the config file.
    pub file: PathBuf,
}

impl RoutesConfig {
    pub const FILE: FieldPath = FieldPath::new("routes.file");

    pub fn validate(&self, errors: &mut Vec<(FieldPath, String)>) {
        if self.file.as_os_str().is_empty() {
            errors.push((Self::FILE, "route table file must not be empty".into()));
        }
    }
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            file: "routes.json".into(),
        }
    }
}
