//! CLI domain: parse, route, and output only.
//! No comparison logic; the route table dispatches to the core.

mod output;
mod parse;
mod route;

pub use output::{map_error, EXIT_ERROR, EXIT_MISMATCH, EXIT_OK};
pub use parse::{Cli, Commands, CompareArgs, HashArgs};
pub use route::{RunContext, RunOutcome};
