//! Path command: show the path a key projects to.
//!
//! ```text
//! $ authroute path about dashboard_analysis
//! about -> /about
//!   parent about-parent -> /about-parent
//! dashboard_analysis -> /dashboard/analysis
//! ```

use anyhow::{Result, bail};

use super::common::load_table;
use crate::cli::args::PathArgs;
use crate::config::RouteConfig;
use crate::route::{KeySet, RouteKey};
use crate::utils::plural_s;
use crate::{debug, log};

/// Print the projection of every key in `args`.
///
/// Single routes are classified against the configured route table when it
/// exists, otherwise against the key alone. A table named with `--routes`
/// must exist.
pub fn run_path(args: &PathArgs, config: &RouteConfig) -> Result<()> {
    let known = if args.routes.is_some() || config.has_routes_file() {
        load_table(config)?.keys()
    } else {
        debug!("path"; "no route table at {}", config.routes_file().display());
        KeySet::default()
    };

    let mut failed = 0;
    for raw in &args.keys {
        match RouteKey::parse(raw) {
            Ok(key) => println!("{}", describe(&key, &known)),
            Err(e) => {
                log!("error"; "{}", e);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        bail!("{} malformed key{}", failed, plural_s(failed));
    }
    Ok(())
}

fn describe(key: &RouteKey, known: &KeySet) -> String {
    let mut keys = known.clone();
    keys.insert(key.clone());

    let mut line = format!("{} -> {}", key, key.to_path());
    if let Some(parent) = keys.single_route_parent(key) {
        line.push_str(&format!("\n  parent {} -> {}", parent.key, parent.path));
    }
    line
}
