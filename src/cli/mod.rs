//! CLI orchestration: dispatches subcommands onto the core library and
//! turns outcomes into exit codes. Contains no parsing logic of its own.

use std::path::Path;
use std::process;

use clap::Parser;

use crate::cli::args::{Command, SintagmaArgs};
use crate::grammar::parse_with_trace;
use crate::roles;
use crate::runner::{self, Expectation, Summary};

pub mod args;
pub mod output;

/// Entry point for the binary. Exits nonzero on rejection or suite failure.
pub fn run() {
    let args = SintagmaArgs::parse();
    let code = match args.command {
        Command::Parse {
            sentence,
            trace,
            tree,
            roles,
            json,
        } => cmd_parse(&sentence.join(" "), trace, tree, roles, json),
        Command::Test {
            ok_dir,
            fail_dir,
            show_tree,
        } => cmd_test(&ok_dir, &fail_dir, show_tree),
    };
    if code != 0 {
        process::exit(code);
    }
}

fn cmd_parse(sentence: &str, show_trace: bool, show_tree: bool, show_roles: bool, json: bool) -> i32 {
    let (result, trace) = parse_with_trace(sentence);

    if json {
        if let Err(e) = output::print_json(sentence, &result, &trace) {
            eprintln!("failed to serialize result: {e}");
            return 2;
        }
        return i32::from(result.is_err());
    }

    output::print_verdict(result.is_ok());
    if show_trace {
        print!("{}", output::render_trace_table(&trace));
    }

    match result {
        Ok(tree) => {
            if show_tree {
                print!("{}", output::render_tree(&tree));
            }
            if show_roles {
                if let Some(roles) = roles::extract(&tree) {
                    println!("{}", roles.summary());
                }
            }
            0
        }
        Err(error) => {
            output::print_parse_error(error);
            1
        }
    }
}

fn cmd_test(ok_dir: &Path, fail_dir: &Path, show_tree: bool) -> i32 {
    let mut summary = Summary::default();

    for (dir, expectation) in [(ok_dir, Expectation::Accept), (fail_dir, Expectation::Reject)] {
        let cases = match runner::run_dir(dir, expectation) {
            Ok(cases) => cases,
            Err(error) => {
                eprintln!("error: {error}");
                return 2;
            }
        };
        for case in cases {
            output::print_case(
                case.passed(),
                case.expectation.as_str(),
                case.accepted(),
                &case.name,
            );
            if show_tree {
                if let Ok(tree) = &case.outcome {
                    print!("{}", output::render_tree(tree));
                }
            }
            summary.add(&case);
        }
    }

    println!("{}", "-".repeat(50));
    if summary.total == 0 {
        println!("No test cases were executed (check directories).");
        return 2;
    }
    println!(
        "Summary: {}/{} cases passed.",
        summary.passed, summary.total
    );
    i32::from(!summary.all_passed())
}
