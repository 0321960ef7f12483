// file: src/main.rs
// version: 1.0.0
// guid: d7f3b1c8-9a05-4e6d-b2c7-5e0a8f4d1b39

//! mktcpip agent - Main entry point

use clap::Parser;
use mktcpip_agent::{
    cli::{args::Cli, args::Commands, commands::*},
    logging::logger,
    ModuleResult,
};
use std::process::ExitCode;
use tracing::{error, warn};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logger::init_logger(cli.verbose, cli.quiet) {
        eprintln!("{}", e);
    }

    match cli.command {
        Commands::Apply(args) => {
            let result = apply_command(&cli.program, &args);
            print_result(&result)
        }
        Commands::Render(args) => match render_command(&cli.program, &args) {
            Ok(argv) => match serde_json::to_string(&argv) {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    error!("Failed to serialize argument vector: {}", e);
                    ExitCode::FAILURE
                }
            },
            Err(e) => {
                error!("{}", e);
                ExitCode::FAILURE
            }
        },
    }
}

/// Print the result record on stdout; failed runs exit non-zero
fn print_result(result: &ModuleResult) -> ExitCode {
    match result.to_json() {
        Ok(json) => println!("{}", json),
        Err(e) => {
            error!("Failed to serialize result: {}", e);
            return ExitCode::FAILURE;
        }
    }

    if result.is_success() {
        ExitCode::SUCCESS
    } else {
        warn!("mktcpip run failed");
        ExitCode::FAILURE
    }
}
