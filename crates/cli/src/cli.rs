// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::error::{Error, Result};
use crate::library::{self, PatternLibrary};
use crate::pattern::{HighlightColor, Pattern};

/// A regex authoring and text-manipulation tool with live highlighting
#[derive(Parser)]
#[command(name = "rxpad")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use a specific saved-pattern library file
    #[arg(short = 'L', long = "library", global = true, env = "RXPAD_PATTERNS")]
    pub library: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Explain a pattern token by token
    Explain(ExplainArgs),
    /// Find and highlight matches in text
    Find(FindArgs),
    /// Replace matches with a template
    Replace(ReplaceArgs),
    /// Extract capture groups as a table
    Capture(CaptureArgs),
    /// Restore a file from its backup
    Restore(RestoreArgs),
    /// Manage the saved-pattern library
    Library(LibraryArgs),
    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

impl Cli {
    /// Open the saved-pattern library named by flag, env, or default path.
    pub fn open_library(&self) -> Result<PatternLibrary> {
        let path = match &self.library {
            Some(path) => path.clone(),
            None => library::default_path()?,
        };
        Ok(PatternLibrary::load(path))
    }
}

/// Pattern source plus compilation flags, shared by every matching command.
#[derive(clap::Args)]
pub struct PatternArgs {
    /// Regex pattern (omit when using --saved or --builtin)
    #[arg(value_name = "PATTERN")]
    pub pattern: Option<String>,

    /// Use a saved pattern by name
    #[arg(long, value_name = "NAME", conflicts_with_all = ["pattern", "builtin"])]
    pub saved: Option<String>,

    /// Use a built-in common pattern by name
    #[arg(long, value_name = "NAME", conflicts_with = "pattern")]
    pub builtin: Option<String>,

    /// Match case-sensitively (default: insensitive)
    #[arg(long)]
    pub case_sensitive: bool,

    /// Let ^ and $ match line boundaries
    #[arg(long)]
    pub multiline: bool,

    /// Let . match newlines too
    #[arg(long)]
    pub dotall: bool,

    /// Highlight color for matches
    #[arg(long, value_name = "COLOR")]
    pub color: Option<HighlightColor>,
}

impl PatternArgs {
    /// Resolve to a [`Pattern`], consulting the library for `--saved` and
    /// the builtin table for `--builtin`.
    ///
    /// Boolean flags add to a saved pattern's stored flags; an explicit
    /// `--color` overrides the stored color. Also returns the saved
    /// replacement template when one exists.
    pub fn resolve(&self, library: &PatternLibrary) -> Result<(Pattern, Option<String>)> {
        if let Some(name) = &self.saved {
            let saved = library.get(name).ok_or_else(|| Error::Library {
                message: format!("no saved pattern named '{name}'"),
                path: Some(library.path().to_path_buf()),
            })?;
            let mut pattern = saved.to_pattern();
            pattern.case_sensitive |= self.case_sensitive;
            pattern.multiline |= self.multiline;
            pattern.dotall |= self.dotall;
            if let Some(color) = self.color {
                pattern.color = color;
            }
            return Ok((pattern, Some(saved.replace_with.clone())));
        }

        if let Some(name) = &self.builtin {
            let preset = library::builtin(name).ok_or_else(|| {
                Error::Argument(format!("no built-in pattern named '{name}'"))
            })?;
            return Ok((self.with_flags(preset.pattern), None));
        }

        match &self.pattern {
            Some(raw) => Ok((self.with_flags(raw), None)),
            None => Err(Error::Argument(
                "a pattern is required (positional, --saved, or --builtin)".into(),
            )),
        }
    }

    fn with_flags(&self, raw: &str) -> Pattern {
        Pattern {
            pattern: raw.to_string(),
            case_sensitive: self.case_sensitive,
            multiline: self.multiline,
            dotall: self.dotall,
            color: self.color.unwrap_or_default(),
        }
    }
}

#[derive(clap::Args)]
pub struct ExplainArgs {
    /// The pattern to explain
    #[arg(value_name = "PATTERN")]
    pub pattern: String,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Output compact JSON (single line)
    #[arg(long)]
    pub compact: bool,
}

#[derive(clap::Args)]
pub struct FindArgs {
    #[command(flatten)]
    pub pattern: PatternArgs,

    /// File to search (stdin when omitted)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// List matches as line:col rows instead of highlighting
    #[arg(long)]
    pub list: bool,

    /// Output compact JSON (single line)
    #[arg(long)]
    pub compact: bool,

    /// Force color output
    #[arg(long)]
    pub force_color: bool,

    /// Disable color output
    #[arg(long)]
    pub no_color: bool,
}

#[derive(clap::Args)]
pub struct ReplaceArgs {
    #[command(flatten)]
    pub pattern: PatternArgs,

    /// Replacement template; groups as $1, ${2} (defaults to the saved
    /// pattern's template, or empty)
    #[arg(value_name = "TEMPLATE")]
    pub template: Option<String>,

    /// File to rewrite (stdin when omitted)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Write back to FILE, backing it up to FILE.bak first
    #[arg(long, requires = "file")]
    pub in_place: bool,
}

#[derive(clap::Args)]
pub struct CaptureArgs {
    #[command(flatten)]
    pub pattern: PatternArgs,

    /// File to search (stdin when omitted)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Output format (text, csv, or json)
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Output compact JSON (single line)
    #[arg(long)]
    pub compact: bool,
}

#[derive(clap::Args)]
pub struct RestoreArgs {
    /// The original file whose .bak sibling should be restored
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(clap::Args)]
pub struct LibraryArgs {
    #[command(subcommand)]
    pub action: LibraryAction,
}

#[derive(Subcommand)]
pub enum LibraryAction {
    /// List saved patterns
    List,
    /// Save a pattern under a name
    Save(SaveArgs),
    /// Show one saved pattern
    Show {
        #[arg(value_name = "NAME")]
        name: String,
    },
    /// Delete a saved pattern by name
    Delete {
        #[arg(value_name = "NAME")]
        name: String,
    },
    /// List the built-in common patterns
    Builtins,
}

#[derive(clap::Args)]
pub struct SaveArgs {
    /// Name to save under
    #[arg(value_name = "NAME")]
    pub name: String,

    /// The pattern to save
    #[arg(value_name = "PATTERN")]
    pub pattern: String,

    /// Replacement template stored with the pattern
    #[arg(long, default_value = "")]
    pub replace_with: String,

    /// Match case-sensitively
    #[arg(long)]
    pub case_sensitive: bool,

    /// Let ^ and $ match line boundaries
    #[arg(long)]
    pub multiline: bool,

    /// Let . match newlines too
    #[arg(long)]
    pub dotall: bool,

    /// Highlight color stored with the pattern
    #[arg(long, default_value = "yellow")]
    pub color: HighlightColor,
}

#[derive(clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: clap_complete::Shell,
}

#[derive(Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Html,
    Csv,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
