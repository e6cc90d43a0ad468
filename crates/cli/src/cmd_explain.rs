// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Explain command implementation.

use termcolor::StandardStream;

use rxpad::cli::{ExplainArgs, OutputFormat};
use rxpad::color::resolve_color;
use rxpad::error::Error;
use rxpad::output::{json, text};
use rxpad::pattern::explain::explain;

/// Run the explain command.
pub fn run(args: &ExplainArgs) -> anyhow::Result<()> {
    let tokens = explain(&args.pattern);

    match args.output {
        OutputFormat::Json => {
            let output = json::ExplainOutput::new(&args.pattern, &tokens);
            let stdout = std::io::stdout();
            json::write_json(&mut stdout.lock(), &output, args.compact)?;
        }
        OutputFormat::Text => {
            let mut stdout = StandardStream::stdout(resolve_color(false, false));
            text::write_explanation(&mut stdout, &tokens)?;
        }
        OutputFormat::Html | OutputFormat::Csv => {
            return Err(Error::Argument(
                "explain supports only text and json output".into(),
            )
            .into());
        }
    }
    Ok(())
}
