// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Streaming file reading with progress reporting.
//!
//! Files are read line by line through a buffered reader so memory stays
//! bounded by the longest line, and a progress callback fires as bytes
//! accumulate. There is no partial-failure recovery: any I/O error aborts
//! the read and is reported to the caller.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Error, Result};

/// Size at which to log large reads (1MB).
pub const LARGE_FILE_WARN: u64 = 1024 * 1024;

/// File content with metadata.
#[derive(Debug)]
pub struct FileContent {
    /// The decoded text.
    pub text: String,

    /// File size in bytes.
    pub size: u64,
}

/// Streaming file reader.
#[derive(Debug, Default)]
pub struct FileReader;

impl FileReader {
    pub fn new() -> Self {
        Self
    }

    /// Read a file to a string, invoking `progress` with percent complete.
    ///
    /// The callback receives values in `0..=100`; when the total size
    /// cannot be determined it fires once with 100 at the end.
    pub fn read_to_string<F>(&self, path: &Path, mut progress: F) -> Result<FileContent>
    where
        F: FnMut(u8),
    {
        let total_size = std::fs::metadata(path).ok().map(|m| m.len());

        if let Some(size) = total_size
            && size > LARGE_FILE_WARN
        {
            tracing::info!(
                path = %path.display(),
                size_mb = size as f64 / 1_000_000.0,
                "reading large file"
            );
        }

        let file = File::open(path).map_err(|e| Error::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let mut reader = BufReader::new(file);

        let mut text = String::new();
        let mut line = String::new();
        let mut bytes_read: u64 = 0;
        loop {
            line.clear();
            let n = reader.read_line(&mut line).map_err(|e| Error::Io {
                path: path.to_path_buf(),
                source: e,
            })?;
            if n == 0 {
                break;
            }
            bytes_read += n as u64;
            text.push_str(&line);
            if let Some(total) = total_size.filter(|&t| t > 0) {
                let pct = (bytes_read.saturating_mul(100) / total).min(100) as u8;
                progress(pct);
            }
        }
        progress(100);

        Ok(FileContent {
            text,
            size: total_size.unwrap_or(bytes_read),
        })
    }
}

/// Read from a file path, or stdin when no path is given.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => Ok(FileReader::new().read_to_string(path, |_| {})?.text),
        None => {
            let mut text = String::new();
            std::io::Read::read_to_string(&mut std::io::stdin().lock(), &mut text).map_err(
                |e| Error::Io {
                    path: "<stdin>".into(),
                    source: e,
                },
            )?;
            Ok(text)
        }
    }
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod tests;
