//! Command-line arguments for the sintagma binary, using `clap` derive.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "sintagma",
    version,
    about = "Deterministic recursive-descent parser for a small Spanish SVO grammar."
)]
pub struct SintagmaArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse a sentence and report ACCEPTED or REJECTED.
    Parse {
        /// The sentence to parse (quoted, or as separate words).
        #[arg(required = true)]
        sentence: Vec<String>,
        /// Show the step-by-step trace table, even when the parse fails.
        #[arg(long)]
        trace: bool,
        /// Pretty-print the derivation tree on acceptance.
        #[arg(long)]
        tree: bool,
        /// Print the subject/verb/object role summary on acceptance.
        #[arg(long)]
        roles: bool,
        /// Emit the full result (tree, trace, error) as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Run accept/reject fixture suites from directories of sentence files.
    Test {
        /// Directory of fixtures expected to be accepted.
        #[arg(long, default_value = "tests/fixtures/nl_ok")]
        ok_dir: PathBuf,
        /// Directory of fixtures expected to be rejected.
        #[arg(long, default_value = "tests/fixtures/nl_fail")]
        fail_dir: PathBuf,
        /// Pretty-print derivation trees for accepted fixtures.
        #[arg(long)]
        show_tree: bool,
    },
}
