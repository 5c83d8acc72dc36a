//! Resolve command: emit the router-ready route table.

use std::fs;
use std::io::Write;

use anyhow::{Context, Result};

use crate::cli::args::ResolveArgs;
use crate::config::RouteConfig;
use crate::log;
use crate::resolve::{ResolveOptions, resolve};
use crate::route::Route;
use crate::table::routes;

/// Resolve the published route table and write it as JSON.
pub fn run_resolve(args: &ResolveArgs, config: &RouteConfig) -> Result<()> {
    let options = ResolveOptions {
        default_layout: config.resolve.layout,
    };
    let resolved = resolve(&routes(), &options);
    let formatted = format_routes(&resolved, args.pretty)?;

    // Output to file or stdout
    if let Some(ref output_path) = args.output {
        let mut file = fs::File::create(output_path)
            .with_context(|| format!("Failed to create `{}`", output_path.display()))?;
        writeln!(file, "{}", formatted)?;
        log!("resolve"; "wrote output to {}", output_path.display());
    } else {
        println!("{}", formatted);
    }

    Ok(())
}

fn format_routes(routes: &[Route], pretty: bool) -> Result<String> {
    let formatted = if pretty {
        serde_json::to_string_pretty(routes)?
    } else {
        serde_json::to_string(routes)?
    };
    Ok(formatted)
}
