//! Common utilities shared across CLI commands.

use std::sync::Arc;

use anyhow::{Context, Result};

use crate::config::RouteConfig;
use crate::table::{RouteTable, TableError, init_routes};
use crate::utils::plural_count;
use crate::validate::{RouteDiagnostics, ValidateOptions, Validator};
use crate::{debug, log};

/// Validation inputs taken from `[schema]`.
pub fn validate_options(config: &RouteConfig) -> ValidateOptions {
    ValidateOptions {
        roles: config.schema.roles.clone(),
        dynamic_bases: config.schema.dynamic_bases(),
    }
}

/// Read the configured route table.
pub fn load_table(config: &RouteConfig) -> Result<RouteTable> {
    let path = config.routes_file();
    debug!("routes"; "loading {}", path.display());
    let table = RouteTable::from_path(&path)
        .with_context(|| format!("Failed to load route table `{}`", path.display()))?;
    debug!("routes"; "{} loaded", plural_count(table.len(), "route"));
    Ok(table)
}

/// Run every rule over `table` and print warnings.
pub fn validate_table(table: &RouteTable, config: &RouteConfig) -> RouteDiagnostics {
    let diag = Validator::new(validate_options(config)).validate(table);
    diag.print_warnings();
    diag
}

/// Load and validate the route table, then publish it.
///
/// A table with any violation is rejected as a whole.
pub fn load_validated(config: &RouteConfig) -> Result<Arc<RouteTable>> {
    let table = load_table(config)?;
    validate_table(&table, config)
        .into_result()
        .map_err(TableError::Rejected)?;
    log!("check"; "{} valid", plural_count(table.len(), "route"));
    Ok(init_routes(table))
}
