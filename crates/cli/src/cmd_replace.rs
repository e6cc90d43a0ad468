// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Replace command implementation.

use rxpad::cli::{Cli, ReplaceArgs};
use rxpad::session::{FileOrigin, SessionState};

/// Run the replace command.
///
/// In-place edits go through the session so the original file is backed up
/// before being overwritten; otherwise the result prints to stdout.
pub fn run(cli: &Cli, args: &ReplaceArgs) -> anyhow::Result<()> {
    let library = cli.open_library()?;
    let (pattern, saved_template) = args.pattern.resolve(&library)?;

    let mut session = SessionState::new();
    session.pattern = pattern;
    session.replace_with = args
        .template
        .clone()
        .or(saved_template)
        .unwrap_or_default();

    match (&args.file, args.in_place) {
        (Some(path), true) => {
            session.load_file(path, FileOrigin::Local, |_| {})?;
            let count = session.replace_in_editor()?;
            let backup = session.save_to_file()?;
            match backup {
                Some(pair) => eprintln!(
                    "rxpad: replaced {} match(es); backup at {}",
                    count,
                    pair.backup.display()
                ),
                None => eprintln!("rxpad: replaced {count} match(es)"),
            }
        }
        (file, false) => {
            let input = rxpad::reader::read_input(file.as_deref())?;
            session.set_editor_text(input);
            session.replace_in_editor()?;
            print!("{}", session.editor);
        }
        (None, true) => {
            // clap enforces --in-place requires FILE
            return Err(rxpad::Error::Argument("--in-place requires a FILE".into()).into());
        }
    }
    Ok(())
}
