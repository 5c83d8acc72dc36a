//! Command-line interface module.

mod args;
pub mod check;
pub mod common;
pub mod path;
pub mod resolve;

pub use args::{CheckArgs, Cli, Commands, PathArgs, ResolveArgs};
