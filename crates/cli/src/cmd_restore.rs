// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Restore command implementation.

use rxpad::backup;
use rxpad::cli::RestoreArgs;

/// Run the restore command: copy `<FILE>.bak` back over `<FILE>`.
pub fn run(args: &RestoreArgs) -> anyhow::Result<()> {
    let pair = backup::pair_for_existing(&args.file)?;
    backup::restore_pair(&pair)?;
    eprintln!(
        "rxpad: restored {} from {}",
        pair.original.display(),
        pair.backup.display()
    );
    Ok(())
}
