mod commands;
mod parse;
mod warning;

pub use commands::*;
pub use parse::{ParsedScript, parse_script};
pub use warning::*;
