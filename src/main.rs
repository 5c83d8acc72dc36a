//! authroute - route table validator and resolver for admin front ends.

#![allow(dead_code)]

mod cli;
mod config;
mod logger;
mod resolve;
mod route;
mod table;
mod utils;
mod validate;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands, common};
use config::RouteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = RouteConfig::load(&cli)?;

    match &cli.command {
        Commands::Check { .. } => cli::check::run_check(&config),
        Commands::Path { args } => cli::path::run_path(args, &config),
        Commands::Resolve { args } => {
            common::load_validated(&config)?;
            cli::resolve::run_resolve(args, &config)
        }
    }
}
