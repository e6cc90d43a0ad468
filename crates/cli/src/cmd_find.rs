// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Find command implementation.

use termcolor::StandardStream;

use rxpad::cli::{Cli, FindArgs, OutputFormat};
use rxpad::color::resolve_color;
use rxpad::error::{Error, ExitCode};
use rxpad::output::{json, text};
use rxpad::reader::read_input;
use rxpad::render;

/// Run the find command.
pub fn run(cli: &Cli, args: &FindArgs) -> anyhow::Result<ExitCode> {
    let library = cli.open_library()?;
    let (pattern, _) = args.pattern.resolve(&library)?;
    let matcher = pattern.compile()?;
    let input = read_input(args.file.as_deref())?;

    let spans = matcher.find_all(&input);

    match args.output {
        OutputFormat::Json => {
            let output = json::FindOutput::new(&pattern.pattern, &input, &spans);
            let stdout = std::io::stdout();
            json::write_json(&mut stdout.lock(), &output, args.compact)?;
        }
        OutputFormat::Html => {
            let rendered = render::render_markup(&matcher, &input, pattern.color);
            println!("{}", rendered.markup);
        }
        OutputFormat::Text => {
            let choice = resolve_color(args.force_color, args.no_color);
            let mut stdout = StandardStream::stdout(choice);
            if args.list {
                text::write_match_list(&mut stdout, &input, &spans)?;
            } else if !spans.is_empty() {
                text::write_highlighted(&mut stdout, &input, &spans, pattern.color)?;
            }
            text::write_count(&mut stdout, spans.len())?;
        }
        OutputFormat::Csv => {
            return Err(Error::Argument("find does not support csv output".into()).into());
        }
    }

    if spans.is_empty() {
        Ok(ExitCode::NoMatches)
    } else {
        Ok(ExitCode::Success)
    }
}
