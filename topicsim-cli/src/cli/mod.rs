//! Command-line interface orchestration for topicsim.
//!
//! The `generate` command builds a corpus from the supplied shape and seed
//! and renders it to stdout as plain text, JSON, or bag-of-words lines.

mod commands;
mod render;

pub use commands::{
    Cli, CliError, Command, GenerateCommand, GenerationSummary, LabelArg, OutputFormat,
    SeedPolicyArg, run_cli,
};
pub use render::render_summary;
