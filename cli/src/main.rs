//! `finance-engine` binary
//!
//! Logging goes to stderr and is controlled by `RUST_LOG`.

use std::process::ExitCode;

use clap::Parser;
use finance_engine_cli::{run, Cli};

fn main() -> ExitCode {
    env_logger::init();

    match run(Cli::parse()) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
