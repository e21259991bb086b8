//! A command line interface to *Traveling Salesman Problem* metaheuristics.
//!

mod commands;

use clap::Command;
use commands::create_write_buffer;
use commands::solve::{get_solve_app, run_solve};
use std::process;

fn main() {
    let matches = Command::new("Traveling Salesman Problem Solver")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A command line interface to population based TSP metaheuristics")
        .subcommand(get_solve_app())
        .get_matches();

    let result = match matches.subcommand() {
        Some(("solve", solve_matches)) => run_solve(solve_matches, create_write_buffer),
        _ => {
            eprintln!("No subcommand was used. Use -h to print help information.");
            process::exit(1);
        }
    };

    if let Err(err) = result {
        eprintln!("{err}");
        process::exit(1);
    }
}
