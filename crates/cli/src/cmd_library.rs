// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Library command implementation.

use rxpad::cli::{Cli, LibraryAction, LibraryArgs};
use rxpad::error::Error;
use rxpad::library::{BUILTIN_PATTERNS, SavedPattern};
use rxpad::pattern::Pattern;

/// Run a library subcommand.
pub fn run(cli: &Cli, args: &LibraryArgs) -> anyhow::Result<()> {
    let mut library = cli.open_library()?;

    match &args.action {
        LibraryAction::List => {
            if library.entries().is_empty() {
                println!("No saved patterns yet.");
            }
            for entry in library.entries() {
                let case = if entry.case_sensitive { "CS" } else { "CI" };
                println!("{} | {} | {}", entry.name, case, entry.pattern);
            }
        }
        LibraryAction::Show { name } => {
            let entry = library.get(name).ok_or_else(|| Error::Library {
                message: format!("no saved pattern named '{name}'"),
                path: Some(library.path().to_path_buf()),
            })?;
            println!("name:           {}", entry.name);
            println!("pattern:        {}", entry.pattern);
            println!("case_sensitive: {}", entry.case_sensitive);
            println!("multiline:      {}", entry.multiline);
            println!("dotall:         {}", entry.dotall);
            println!("color:          {}", entry.color.css_name());
            println!("replace_with:   {}", entry.replace_with);
        }
        LibraryAction::Save(save) => {
            // Validate before persisting so the library never stores a
            // pattern that cannot compile.
            Pattern::new(&save.pattern).compile()?;
            library.add(SavedPattern {
                name: save.name.clone(),
                pattern: save.pattern.clone(),
                case_sensitive: save.case_sensitive,
                multiline: save.multiline,
                dotall: save.dotall,
                color: save.color,
                replace_with: save.replace_with.clone(),
            })?;
            eprintln!("rxpad: saved pattern '{}'", save.name);
        }
        LibraryAction::Delete { name } => match library.remove(name)? {
            Some(removed) => eprintln!("rxpad: deleted pattern '{}'", removed.name),
            None => {
                return Err(Error::Library {
                    message: format!("no saved pattern named '{name}'"),
                    path: Some(library.path().to_path_buf()),
                }
                .into());
            }
        },
        LibraryAction::Builtins => {
            for preset in BUILTIN_PATTERNS {
                println!("{} | {}", preset.name, preset.pattern);
            }
        }
    }
    Ok(())
}
