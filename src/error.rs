//! Error types for the INI store

use std::io;
use thiserror::Error;

/// Everything that can go wrong while loading, querying or saving INI data.
///
/// Each variant maps to exactly one violated precondition; parse failures
/// abort the whole load and leave the store untouched.
#[derive(Error, Debug)]
pub enum IniError {
    #[error("file does not have the .ini extension: {0}")]
    FileExtension(String),

    #[error("failed to open file: {0}")]
    OpeningFile(#[from] io::Error),

    #[error("invalid format at line {line}: {content}")]
    InvalidFormat { line: usize, content: String },

    #[error("empty section name at line {line}")]
    SectionNameEmpty { line: usize },

    #[error("invalid key format at line {line}: {content}")]
    InvalidKeyFormat { line: usize, content: String },

    #[error("key '{key}' redefined in section '{section}'")]
    RedefiningKey { section: String, key: String },

    #[error("section '{0}' not found")]
    SectionNotFound(String),

    #[error("key '{0}' not found")]
    KeyName(String),
}
