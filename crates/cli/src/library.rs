// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Saved-pattern library.
//!
//! Patterns are persisted as a JSON array in a single file under the home
//! directory (`~/.rxpad_patterns.json` by default). A missing or corrupt
//! file is treated as an empty library, never an error; the file is
//! rewritten after every mutation.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::pattern::{HighlightColor, Pattern};

/// Default library filename under the home directory.
pub const LIBRARY_FILENAME: &str = ".rxpad_patterns.json";

/// A named, persisted pattern snapshot.
///
/// Identity is by name; uniqueness is not enforced and lookup returns the
/// first entry with a matching name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedPattern {
    pub name: String,
    pub pattern: String,
    #[serde(default)]
    pub case_sensitive: bool,
    #[serde(default)]
    pub multiline: bool,
    #[serde(default)]
    pub dotall: bool,
    #[serde(default)]
    pub color: HighlightColor,
    #[serde(default)]
    pub replace_with: String,
}

impl SavedPattern {
    /// The pattern plus flags, ready for compilation.
    pub fn to_pattern(&self) -> Pattern {
        Pattern {
            pattern: self.pattern.clone(),
            case_sensitive: self.case_sensitive,
            multiline: self.multiline,
            dotall: self.dotall,
            color: self.color,
        }
    }
}

/// The saved-pattern store, bound to one file on disk.
#[derive(Debug)]
pub struct PatternLibrary {
    path: PathBuf,
    entries: Vec<SavedPattern>,
}

/// Resolve the default library path under the user's home directory.
pub fn default_path() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(LIBRARY_FILENAME))
        .ok_or_else(|| Error::Library {
            message: "cannot determine home directory".into(),
            path: None,
        })
}

impl PatternLibrary {
    /// Load the library from `path`.
    ///
    /// A missing file, unreadable file, or malformed JSON all downgrade to
    /// an empty library.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(text) => match serde_json::from_str::<Vec<SavedPattern>>(&text) {
                Ok(entries) => entries,
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "library file is corrupt; treating as empty"
                    );
                    Vec::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "cannot read library file; treating as empty"
                );
                Vec::new()
            }
        };
        Self { path, entries }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn entries(&self) -> &[SavedPattern] {
        &self.entries
    }

    /// First entry with the given name.
    pub fn get(&self, name: &str) -> Option<&SavedPattern> {
        self.entries.iter().find(|p| p.name == name)
    }

    /// Append an entry and persist.
    pub fn add(&mut self, entry: SavedPattern) -> Result<()> {
        self.entries.push(entry);
        self.persist()
    }

    /// Remove the first entry with the given name and persist.
    ///
    /// Returns the removed entry, or `None` when nothing matched (the file
    /// is left untouched in that case).
    pub fn remove(&mut self, name: &str) -> Result<Option<SavedPattern>> {
        let Some(idx) = self.entries.iter().position(|p| p.name == name) else {
            return Ok(None);
        };
        let removed = self.entries.remove(idx);
        self.persist()?;
        Ok(Some(removed))
    }

    /// Write the entry list back to disk.
    fn persist(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.entries).map_err(|e| Error::Library {
            message: format!("cannot serialize library: {e}"),
            path: Some(self.path.clone()),
        })?;
        std::fs::write(&self.path, json).map_err(|e| Error::Io {
            path: self.path.clone(),
            source: e,
        })
    }
}

/// A built-in common pattern preset.
#[derive(Debug, Clone, Copy)]
pub struct BuiltinPattern {
    pub name: &'static str,
    pub pattern: &'static str,
}

/// Fixed table of common patterns.
///
/// All presets default to case-insensitive matching with an empty
/// replacement, matching their saved-pattern defaults.
pub const BUILTIN_PATTERNS: &[BuiltinPattern] = &[
    BuiltinPattern {
        name: "email",
        pattern: r"[\w\.\-]+@[\w\.\-]+\.\w+",
    },
    BuiltinPattern {
        name: "url",
        pattern: r"https?://[^\s/$.?#].[^\s]*",
    },
    BuiltinPattern {
        name: "phone-us",
        pattern: r"\(?\d{3}\)?[\s.-]?\d{3}[\s.-]?\d{4}",
    },
    BuiltinPattern {
        name: "date-iso",
        pattern: r"\d{4}-\d{2}-\d{2}",
    },
    BuiltinPattern {
        name: "ipv4",
        pattern: r"\b(?:\d{1,3}\.){3}\d{1,3}\b",
    },
    BuiltinPattern {
        name: "html-tag",
        pattern: r"<([a-z][a-z0-9]*)\b[^>]*>.*?</[a-z][a-z0-9]*>",
    },
];

/// Look up a builtin preset by name.
pub fn builtin(name: &str) -> Option<&'static BuiltinPattern> {
    BUILTIN_PATTERNS.iter().find(|b| b.name == name)
}

#[cfg(test)]
#[path = "library_tests.rs"]
mod tests;
