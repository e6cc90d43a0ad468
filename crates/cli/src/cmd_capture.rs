// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Capture command implementation.

use termcolor::StandardStream;

use rxpad::capture::CaptureTable;
use rxpad::cli::{CaptureArgs, Cli, OutputFormat};
use rxpad::color::resolve_color;
use rxpad::error::{Error, ExitCode};
use rxpad::output::{json, text};
use rxpad::reader::read_input;

/// Run the capture command.
pub fn run(cli: &Cli, args: &CaptureArgs) -> anyhow::Result<ExitCode> {
    let library = cli.open_library()?;
    let (pattern, _) = args.pattern.resolve(&library)?;
    let matcher = pattern.compile()?;
    let input = read_input(args.file.as_deref())?;

    let table = CaptureTable::collect(&matcher, &input);

    match args.output {
        OutputFormat::Csv => print!("{}", table.to_csv()),
        OutputFormat::Json => {
            let output = json::CaptureOutput::new(&pattern.pattern, &table);
            let stdout = std::io::stdout();
            json::write_json(&mut stdout.lock(), &output, args.compact)?;
        }
        OutputFormat::Text => {
            let mut stdout = StandardStream::stdout(resolve_color(false, false));
            text::write_capture_table(&mut stdout, &table)?;
        }
        OutputFormat::Html => {
            return Err(Error::Argument("capture does not support html output".into()).into());
        }
    }

    if table.is_empty() {
        Ok(ExitCode::NoMatches)
    } else {
        Ok(ExitCode::Success)
    }
}
