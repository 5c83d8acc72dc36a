//! `[check]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [check]
//! level = "error"             # Failure level: error | warn
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckConfig {
    /// How to treat rule violations: "error" or "warn".
    pub level: CheckLevel,
}

/// Validation error level.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CheckLevel {
    /// Violations reject the route table.
    #[default]
    Error,
    /// Violations are reported, the table is still accepted.
    Warn,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_check_config_default() {
        let config = test_parse_config("");
        assert_eq!(config.check.level, CheckLevel::Error);
    }

    #[test]
    fn test_check_config_warn() {
        let config = test_parse_config("[check]\nlevel = \"warn\"");
        assert_eq!(config.check.level, CheckLevel::Warn);
    }

    #[test]
    fn test_check_config_rejects_unknown_level() {
        let result: Result<CheckConfig, _> = toml::from_str("level = \"fatal\"");
        assert!(result.is_err());
    }
}
