//! The emet command-line interface.
//!
//! This module is the entry point for the CLI: it parses arguments, drives
//! the parse-then-render pipeline, and reports failures as miette
//! diagnostics.

use clap::Parser;
use std::process;

use crate::cli::args::EmetArgs;
use crate::diagnostics::{print_error, EmetError};
use crate::grammar;
use crate::render::{render, RenderOptions};

pub mod args;

/// The main entry point for the CLI.
pub fn run() {
    let args = EmetArgs::parse();
    if let Err(error) = expand(&args) {
        print_error(error);
        process::exit(1);
    }
}

fn expand(args: &EmetArgs) -> Result<(), EmetError> {
    let tree = grammar::parse_expression(&args.abbreviation)
        .map_err(|e| EmetError::from_parse(e, "<abbreviation>", &args.abbreviation))?;

    if args.tree {
        println!("{}", serde_json::to_string_pretty(&tree)?);
        return Ok(());
    }

    let opts = RenderOptions {
        content: args.content.clone(),
        max_output: args.max_output,
    };
    let fragment = render(&tree, &opts)?;

    // Echo the input, then the expansion.
    println!("{}", args.abbreviation);
    println!("{fragment}");
    Ok(())
}
