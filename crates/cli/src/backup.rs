// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Backup and restore of edited files.
//!
//! An edited file is a two-state resource: `Original` until the first save,
//! `BackedUp` afterwards. The association between the original path and its
//! `.bak` sibling is stored explicitly in a [`BackupPair`] rather than
//! re-derived by stripping the suffix, so a path that already ends in
//! `.bak` cannot be mis-resolved.
//!
//! Backups are best-effort copies, not atomic renames.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::error::{Error, Result};

/// Reserved suffix for backup siblings.
pub const BACKUP_SUFFIX: &str = ".bak";

/// Explicit association between an original file and its backup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupPair {
    pub original: PathBuf,
    pub backup: PathBuf,
    /// When the backup copy was taken.
    pub created_at: DateTime<Utc>,
}

/// A file being edited, tracking whether a backup exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditedFile {
    /// No backup taken yet.
    Original(PathBuf),
    /// A backup sibling exists; the pair records both paths.
    BackedUp(BackupPair),
}

impl EditedFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        EditedFile::Original(path.into())
    }

    /// The path being edited, in either state.
    pub fn path(&self) -> &Path {
        match self {
            EditedFile::Original(path) => path,
            EditedFile::BackedUp(pair) => &pair.original,
        }
    }

    /// The backup pair, if one has been taken.
    pub fn backup_pair(&self) -> Option<&BackupPair> {
        match self {
            EditedFile::Original(_) => None,
            EditedFile::BackedUp(pair) => Some(pair),
        }
    }

    /// Copy the file to its `.bak` sibling and transition to `BackedUp`.
    ///
    /// If the file does not exist yet there is nothing to preserve and the
    /// state is left unchanged.
    pub fn backup(&mut self) -> Result<Option<&BackupPair>> {
        let original = self.path().to_path_buf();
        if !original.exists() {
            return Ok(None);
        }

        let backup = backup_path_for(&original);
        std::fs::copy(&original, &backup).map_err(|e| Error::Io {
            path: backup.clone(),
            source: e,
        })?;
        tracing::debug!(
            original = %original.display(),
            backup = %backup.display(),
            "backup created"
        );

        *self = EditedFile::BackedUp(BackupPair {
            original,
            backup,
            created_at: Utc::now(),
        });
        Ok(self.backup_pair())
    }

    /// Overwrite the file with `content`, taking a backup first.
    ///
    /// Returns the backup pair when one was created. The backup is
    /// best-effort in the sense that nothing verifies the copy beyond the
    /// copy call itself succeeding.
    pub fn save(&mut self, content: &str) -> Result<Option<BackupPair>> {
        self.backup()?;
        let path = self.path().to_path_buf();
        std::fs::write(&path, content).map_err(|e| Error::Io {
            path: path.clone(),
            source: e,
        })?;
        Ok(self.backup_pair().cloned())
    }

    /// Copy the backup back over the original.
    ///
    /// Fails with [`Error::NoBackup`] when no backup has been taken or the
    /// backup file has since disappeared.
    pub fn restore(&self) -> Result<()> {
        let pair = self.backup_pair().ok_or_else(|| Error::NoBackup {
            path: self.path().to_path_buf(),
        })?;
        restore_pair(pair)
    }
}

/// Compute the backup sibling for a path.
pub fn backup_path_for(original: &Path) -> PathBuf {
    let mut name = original.as_os_str().to_os_string();
    name.push(BACKUP_SUFFIX);
    PathBuf::from(name)
}

/// Build the pair for an original path whose `.bak` sibling already exists
/// on disk, e.g. from a previous run.
///
/// Paths that themselves end in the reserved suffix are rejected instead of
/// guessing which file is the original.
pub fn pair_for_existing(original: &Path) -> Result<BackupPair> {
    if original
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("bak"))
    {
        return Err(Error::Argument(format!(
            "{} is a backup file; pass the original path instead",
            original.display()
        )));
    }

    let backup = backup_path_for(original);
    if !backup.exists() {
        return Err(Error::NoBackup {
            path: original.to_path_buf(),
        });
    }
    Ok(BackupPair {
        original: original.to_path_buf(),
        backup,
        created_at: Utc::now(),
    })
}

/// Copy `pair.backup` over `pair.original`.
pub fn restore_pair(pair: &BackupPair) -> Result<()> {
    if !pair.backup.exists() {
        return Err(Error::NoBackup {
            path: pair.original.clone(),
        });
    }
    std::fs::copy(&pair.backup, &pair.original).map_err(|e| Error::Io {
        path: pair.original.clone(),
        source: e,
    })?;
    tracing::debug!(
        original = %pair.original.display(),
        backup = %pair.backup.display(),
        "backup restored"
    );
    Ok(())
}

#[cfg(test)]
#[path = "backup_tests.rs"]
mod tests;
