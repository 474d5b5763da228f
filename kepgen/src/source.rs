//! Implements capabilities to read export files from disk.
//!
//! This module handles source encodings. Controller symbol exports are
//! single-byte text (UTF-8 or the Windows-1250 code page the engineering
//! tools write on central-European systems). HMI exports are UTF-16 with
//! a byte-order mark; files without a mark are treated as big-endian.

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::{debug, trace};
use thiserror::Error;

/// Errors raised while reading inputs or writing outputs.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Cannot read file {path}. {message}")]
    CannotRead { path: PathBuf, message: String },

    #[error("File {path} is not UTF-8 or Windows-1250 text")]
    UnsupportedEncoding { path: PathBuf },

    #[error("Cannot write file {path}. {message}")]
    CannotWrite { path: PathBuf, message: String },
}

/// Reads a single-byte-encoded export into lines.
pub fn read_lines(path: &Path) -> Result<Vec<String>, SourceError> {
    debug!("Reading file {}", path.display());

    let bytes = fs::read(path).map_err(|e| SourceError::CannotRead {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    // We try different encoders and return the first one that matches.
    // Symbol tables exported on central-European Windows installations
    // use code page 1250; everything newer is UTF-8.
    let decoders: [&'static encoding_rs::Encoding; 2] =
        [encoding_rs::UTF_8, encoding_rs::WINDOWS_1250];

    let result = decoders.into_iter().find_map(move |d| {
        let (res, encoding_used, had_errors) = d.decode(&bytes);
        if had_errors {
            trace!(
                "Path {} did not match encoding {}",
                path.display(),
                encoding_used.name()
            );
            return None;
        }
        trace!(
            "Path {} matched encoding {}",
            path.display(),
            encoding_used.name()
        );
        Some(res.to_string())
    });

    match result {
        Some(text) => Ok(to_lines(&text)),
        None => Err(SourceError::UnsupportedEncoding {
            path: path.to_path_buf(),
        }),
    }
}

/// Reads a UTF-16 export into lines.
///
/// A byte-order mark selects the endianness (and passes UTF-8 through);
/// without one the file is decoded as UTF-16BE.
pub fn read_lines_utf16(path: &Path) -> Result<Vec<String>, SourceError> {
    debug!("Reading UTF-16 file {}", path.display());

    let bytes = fs::read(path).map_err(|e| SourceError::CannotRead {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let (text, encoding_used, _) = encoding_rs::UTF_16BE.decode(&bytes);
    trace!(
        "Path {} decoded as {}",
        path.display(),
        encoding_used.name()
    );
    Ok(to_lines(&text))
}

/// Writes lines to the given file, one per row with a trailing newline.
pub fn write_lines(lines: &[String], path: &Path) -> Result<(), SourceError> {
    let mut text = lines.join("\n");
    text.push('\n');
    write_text(&text, path)
}

pub fn write_text(text: &str, path: &Path) -> Result<(), SourceError> {
    debug!("Writing file {}", path.display());
    fs::write(path, text).map_err(|e| SourceError::CannotWrite {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

fn to_lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_string).collect()
}
