//! CLI domain: parse, route, and output only.
//! No manifest or diff logic; the route table dispatches to the library.

mod output;
mod parse;
mod route;

pub use output::{format_compare_summary, format_generate_summary, map_error};
pub use parse::{Cli, Commands};
pub use route::{CompareRequest, GenerateRequest, RunContext};
