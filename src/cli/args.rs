//! Defines the command-line arguments for the emet CLI.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::Parser;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "emet",
    version,
    about = "Expand compact element-abbreviation notation into a markup fragment."
)]
pub struct EmetArgs {
    /// The abbreviation to expand, e.g. `ul>li.item*3`.
    #[arg(required = true)]
    pub abbreviation: String,

    /// Placeholder content for leaf elements.
    #[arg(long, default_value = "")]
    pub content: String,

    /// Print the parsed abbreviation tree as JSON instead of the fragment.
    #[arg(long)]
    pub tree: bool,

    /// Fail if the rendered output would exceed this many bytes.
    #[arg(long, value_name = "BYTES")]
    pub max_output: Option<usize>,
}
