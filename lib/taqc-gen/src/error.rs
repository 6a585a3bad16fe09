//! Error types for the generator.

use std::path::PathBuf;

use derive_more::{Display, Error, From};

/// Errors raised while generating a `ToQueryParams` implementation.
#[derive(Debug, Display, Error, From)]
pub enum Error {
    /// No struct with the requested name was found in the inputs.
    #[display("type `{name}` not found")]
    #[from(skip)]
    TypeNotFound {
        /// The requested type name.
        #[error(not(source))]
        name: String,
    },

    /// A file or directory could not be read or written.
    #[display("I/O error on {}", path.display())]
    #[from(skip)]
    Io {
        /// The offending path.
        path: PathBuf,
        /// The underlying error.
        source: std::io::Error,
    },

    /// A source file is not valid Rust.
    #[display("failed to parse {}: {message}", path.display())]
    #[from(skip)]
    Parse {
        /// The offending file.
        path: PathBuf,
        /// The parser message.
        #[error(not(source))]
        message: String,
    },

    /// The struct cannot be converted: invalid tag or unsupported field type.
    #[display("failed to generate code: {_0}")]
    #[from]
    Generate(#[error(not(source))] syn::Error),

    /// The inputs could not be traversed.
    #[display("failed to scan inputs: {_0}")]
    #[from]
    Walk(#[error(not(source))] walkdir::Error),
}

impl Error {
    /// Wrap an I/O error with the path it relates to.
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for generator operations.
pub type Result<T> = std::result::Result<T, Error>;
