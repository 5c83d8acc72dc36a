//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

use crate::route::SingleLayout;

/// Route table validator and resolver
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: authroute.toml)
    #[arg(short = 'C', long, global = true, default_value = "authroute.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Validate a route table
    #[command(visible_alias = "c")]
    Check {
        #[command(flatten)]
        args: CheckArgs,
    },

    /// Print the path a route key projects to
    #[command(visible_alias = "p")]
    Path {
        #[command(flatten)]
        args: PathArgs,
    },

    /// Validate, then print the router-ready route table as JSON
    #[command(visible_alias = "r")]
    Resolve {
        #[command(flatten)]
        args: ResolveArgs,
    },
}

/// Check command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct CheckArgs {
    /// Route table to check (default: `routes.file` from the config)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub file: Option<PathBuf>,

    /// Treat validation failures as warnings instead of errors
    #[arg(long, short = 'w')]
    pub warn_only: bool,
}

/// Path command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct PathArgs {
    /// Route keys to project
    #[arg(value_name = "KEY", required = true)]
    pub keys: Vec<String>,

    /// Route table used to classify single routes
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub routes: Option<PathBuf>,
}

/// Resolve command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ResolveArgs {
    /// Route table to resolve (default: `routes.file` from the config)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub file: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Layout of synthesized parents without `singleLayout`
    #[arg(short, long, value_enum)]
    pub layout: Option<SingleLayout>,
}

impl Cli {
    /// Route table given on the command line, if any.
    pub fn routes_override(&self) -> Option<&PathBuf> {
        match &self.command {
            Commands::Check { args } => args.file.as_ref(),
            Commands::Path { args } => args.routes.as_ref(),
            Commands::Resolve { args } => args.file.as_ref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_check() {
        let cli = Cli::parse_from(["authroute", "check", "routes.toml", "-w"]);
        assert!(matches!(cli.command, Commands::Check { ref args } if args.warn_only));
        assert_eq!(cli.routes_override(), Some(&PathBuf::from("routes.toml")));
        assert_eq!(cli.config, PathBuf::from("authroute.toml"));
    }

    #[test]
    fn test_parse_path_requires_key() {
        assert!(Cli::try_parse_from(["authroute", "path"]).is_err());

        let cli = Cli::parse_from(["authroute", "path", "about", "dashboard_analysis", "-v"]);
        let Commands::Path { args } = &cli.command else {
            panic!("expected path command");
        };
        assert_eq!(args.keys, vec!["about", "dashboard_analysis"]);
        assert!(cli.verbose);
        assert!(cli.routes_override().is_none());
    }

    #[test]
    fn test_parse_resolve() {
        let cli = Cli::parse_from([
            "authroute", "-C", "conf/authroute.toml", "resolve", "--pretty", "--layout", "blank",
            "-o", "out.json",
        ]);
        let Commands::Resolve { args } = &cli.command else {
            panic!("expected resolve command");
        };
        assert!(args.pretty);
        assert_eq!(args.layout, Some(SingleLayout::Blank));
        assert_eq!(args.output, Some(PathBuf::from("out.json")));
        assert_eq!(cli.config, PathBuf::from("conf/authroute.toml"));
    }
}
