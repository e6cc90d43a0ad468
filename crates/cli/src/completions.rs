// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shell completion generation.

use clap::CommandFactory;
use clap_complete::{Shell, generate};

use crate::cli::Cli;

/// Write the completion script for `shell` to stdout.
pub fn generate_to_stdout(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "rxpad", &mut std::io::stdout());
}
