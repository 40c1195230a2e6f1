// SPDX-FileCopyrightText: 2025 Adventure Physics Swap Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::PathBuf;

use crate::character::AllCharacters;

/// Errors returned while loading, saving or querying physics and configuration files.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// None of the default physics file locations exist.
    ResourceNotFound {
        /// Every path that was tried, in search order.
        candidates: Vec<PathBuf>,
    },
    /// The physics buffer is not a whole number of records, or is too short for the roster.
    MalformedBuffer {
        /// Length of the rejected buffer in bytes.
        length: usize,
        /// Size of a single physics record in bytes.
        record_size: usize,
        /// How many records the buffer had to contain.
        expected_records: usize,
    },
    /// Physics data was requested before any file was imported.
    Unpopulated,
    /// A physics table was given profiles for some characters, but not all of them.
    IncompleteTable {
        /// The characters without a profile, in file order.
        missing: Vec<AllCharacters>,
    },
    /// A physics record could not be written back to binary.
    EncodingFailed {
        /// The character whose record failed.
        character: AllCharacters,
    },
    /// Reading or writing a file failed.
    Io {
        /// The file being accessed.
        path: PathBuf,
        /// The error reported by the operating system.
        message: String,
    },
    /// The configuration document could not be converted to or from json.
    Serialization {
        /// The configuration file being accessed.
        path: PathBuf,
        /// What was wrong with the document.
        message: String,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::ResourceNotFound { candidates } => {
                write!(f, "failed to find default physics binary file, tried:")?;
                for candidate in candidates {
                    write!(f, " {}", candidate.display())?;
                }
                Ok(())
            }
            Error::MalformedBuffer {
                length,
                record_size,
                expected_records,
            } => write!(
                f,
                "malformed physics buffer: {length} bytes, expected at least {expected_records} records of {record_size} bytes"
            ),
            Error::Unpopulated => write!(f, "physics data has not been loaded yet"),
            Error::IncompleteTable { missing } => {
                write!(f, "physics table is missing {} characters:", missing.len())?;
                for character in missing {
                    write!(f, " {character:?}")?;
                }
                Ok(())
            }
            Error::EncodingFailed { character } => {
                write!(f, "failed to encode physics for {character:?}")
            }
            Error::Io { path, message } => write!(f, "{}: {message}", path.display()),
            Error::Serialization { path, message } => {
                write!(f, "invalid configuration {}: {message}", path.display())
            }
        }
    }
}

impl std::error::Error for Error {}
