//! Check command: validate a route table and report every violation.

use anyhow::Result;

use super::common::{load_table, validate_table};
use crate::config::{CheckLevel, RouteConfig};
use crate::log;
use crate::table::TableError;
use crate::utils::{plural_count, plural_s};

/// Validate the configured route table.
///
/// With `level = "warn"` violations are printed and the table is still
/// accepted.
pub fn run_check(config: &RouteConfig) -> Result<()> {
    let table = load_table(config)?;
    log!("check"; "checking {}", plural_count(table.len(), "route"));

    let diag = validate_table(&table, config);
    if diag.is_empty() {
        log!("ok"; "all checks passed");
        return Ok(());
    }

    match config.check.level {
        CheckLevel::Error => Err(TableError::Rejected(diag).into()),
        CheckLevel::Warn => {
            eprintln!("{diag}");
            log!("warning"; "{} violation{} ignored", diag.len(), plural_s(diag.len()));
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use std::fs;

    const INVALID: &str = r#"[{ "name": "about", "path": "/about", "component": "multi",
        "meta": { "title": "About" } }]"#;

    fn config_with(dir: &std::path::Path, content: &str) -> RouteConfig {
        RouteConfig {
            root: dir.to_path_buf(),
            ..test_parse_config(content)
        }
    }

    #[test]
    fn test_check_rejects_on_error_level() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("routes.json"), INVALID).unwrap();
        let err = run_check(&config_with(dir.path(), "")).unwrap_err();
        assert!(err.downcast_ref::<TableError>().is_some());
    }

    #[test]
    fn test_check_passes_on_warn_level() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("routes.json"), INVALID).unwrap();
        assert!(run_check(&config_with(dir.path(), "[check]\nlevel = \"warn\"")).is_ok());
    }

    #[test]
    fn test_check_toml_table() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("routes.toml"),
            "[[routes]]\nname = \"about\"\npath = \"/about\"\ncomponent = \"self\"\nmeta = { title = \"About\" }\n",
        )
        .unwrap();
        let config = config_with(dir.path(), "[routes]\nfile = \"routes.toml\"");
        assert!(run_check(&config).is_ok());
    }
}
