// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rxpad CLI entry point.

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt};

use rxpad::cli::{Cli, Command};
use rxpad::error::ExitCode;

mod cmd_capture;
mod cmd_explain;
mod cmd_find;
mod cmd_library;
mod cmd_replace;
mod cmd_restore;

fn init_logging() {
    let filter = EnvFilter::try_from_env("RXPAD_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("rxpad: {}", e);
            match e.downcast_ref::<rxpad::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    match &cli.command {
        None => {
            // Show help for bare invocation
            Cli::command().print_help()?;
            println!();
            Ok(ExitCode::Success)
        }
        Some(Command::Explain(args)) => {
            cmd_explain::run(args)?;
            Ok(ExitCode::Success)
        }
        Some(Command::Find(args)) => cmd_find::run(&cli, args),
        Some(Command::Replace(args)) => {
            cmd_replace::run(&cli, args)?;
            Ok(ExitCode::Success)
        }
        Some(Command::Capture(args)) => cmd_capture::run(&cli, args),
        Some(Command::Restore(args)) => {
            cmd_restore::run(args)?;
            Ok(ExitCode::Success)
        }
        Some(Command::Library(args)) => {
            cmd_library::run(&cli, args)?;
            Ok(ExitCode::Success)
        }
        Some(Command::Completions(args)) => {
            rxpad::completions::generate_to_stdout(args.shell);
            Ok(ExitCode::Success)
        }
    }
}
