//! Small helpers shared by the command handlers.

mod plural;

pub use plural::{plural_count, plural_s};
