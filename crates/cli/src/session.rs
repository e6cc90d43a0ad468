// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Editing session state.
//!
//! All mutable state lives in one owned [`SessionState`] passed by
//! exclusive reference to each action handler. Actions run to completion
//! one at a time; there is no background work and no locking. Failed
//! actions leave the state untouched.

use std::path::{Path, PathBuf};

use crate::backup::{BackupPair, EditedFile};
use crate::error::Result;
use crate::pattern::{HighlightColor, Pattern};
use crate::reader::FileReader;
use crate::render::{self, Rendered};

/// Where the editor content came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOrigin {
    /// Loaded from a local filesystem path; can be saved back in place.
    Local,
    /// Provided as an in-memory upload; offered back as a download only.
    Upload,
}

/// Record of the file backing the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedFile {
    pub path: PathBuf,
    pub origin: FileOrigin,
}

/// Outcome of an undo request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UndoOutcome {
    Restored,
    NothingToUndo,
}

/// The complete per-session state.
#[derive(Debug, Default)]
pub struct SessionState {
    /// The active pattern and flags.
    pub pattern: Pattern,
    /// Replacement template for substitutions.
    pub replace_with: String,
    /// Current editor text.
    pub editor: String,
    /// Depth-1 undo snapshot of the editor text.
    undo_snapshot: Option<String>,
    /// The file backing the editor, if any.
    pub file: Option<LoadedFile>,
    /// The most recent backup taken by a save.
    pub last_backup: Option<BackupPair>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the active pattern string, keeping flags.
    pub fn set_pattern(&mut self, pattern: impl Into<String>) {
        self.pattern.pattern = pattern.into();
    }

    /// Load a local file into the editor, clearing the undo snapshot.
    pub fn load_file<F>(&mut self, path: &Path, origin: FileOrigin, progress: F) -> Result<()>
    where
        F: FnMut(u8),
    {
        let content = FileReader::new().read_to_string(path, progress)?;
        self.editor = content.text;
        self.undo_snapshot = None;
        self.file = Some(LoadedFile {
            path: path.to_path_buf(),
            origin,
        });
        Ok(())
    }

    /// Place text directly into the editor (the paste path).
    pub fn set_editor_text(&mut self, text: impl Into<String>) {
        self.editor = text.into();
        self.undo_snapshot = None;
    }

    /// Render the current pattern against the editor text as markup.
    ///
    /// Compile failures become error markup with count 0, never an error.
    pub fn highlight(&self, color: HighlightColor) -> Rendered {
        match self.pattern.compile() {
            Ok(matcher) => render::render_markup(&matcher, &self.editor, color),
            Err(e) => Rendered {
                markup: render::render_error_markup(&e.to_string()),
                count: 0,
            },
        }
    }

    /// Substitute every match in the editor with the replacement template.
    ///
    /// The pre-substitution text becomes the single undo snapshot. On
    /// compile failure the editor and snapshot are untouched.
    pub fn replace_in_editor(&mut self) -> Result<usize> {
        let matcher = self.pattern.compile()?;
        let count = matcher.find_all(&self.editor).len();
        let replaced = matcher.substitute(&self.editor, &self.replace_with);
        self.undo_snapshot = Some(std::mem::take(&mut self.editor));
        self.editor = replaced;
        Ok(count)
    }

    /// Restore the pre-substitution editor text, if any.
    ///
    /// The snapshot is consumed: a second undo with no intervening
    /// substitution reports [`UndoOutcome::NothingToUndo`].
    pub fn undo(&mut self) -> UndoOutcome {
        match self.undo_snapshot.take() {
            Some(snapshot) => {
                self.editor = snapshot;
                UndoOutcome::Restored
            }
            None => UndoOutcome::NothingToUndo,
        }
    }

    /// Save the editor text back to the loaded local file, backing the
    /// prior content up first. Records the backup pair for later restore.
    pub fn save_to_file(&mut self) -> Result<Option<BackupPair>> {
        let Some(loaded) = &self.file else {
            return Err(crate::error::Error::Argument(
                "no file loaded; load a local file before saving".into(),
            ));
        };
        let mut edited = EditedFile::new(&loaded.path);
        let pair = edited.save(&self.editor)?;
        self.last_backup = pair.clone();
        Ok(pair)
    }

    /// Copy the recorded backup back over its original.
    pub fn restore_backup(&mut self) -> Result<()> {
        let pair = self
            .last_backup
            .take()
            .ok_or_else(|| crate::error::Error::NoBackup {
                path: self
                    .file
                    .as_ref()
                    .map(|f| f.path.clone())
                    .unwrap_or_default(),
            })?;
        crate::backup::restore_pair(&pair)
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
