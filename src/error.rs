//! Error type shared by every lazypass command.
//!
//! Validation failures carry the exact message shown to the user, so the
//! command layer can print an error with `{}` and nothing else.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// One of the three credential form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Website,
    Username,
    Password,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Website => "Website",
            Field::Username => "Username",
            Field::Password => "Password",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0} cannot be empty!")]
    EmptyField(Field),

    #[error("Please enter a website")]
    MissingWebsite,

    #[error("Website not found")]
    NotFound,

    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse data file {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    #[error("clipboard error: {0}")]
    Clipboard(String),

    #[error("failed to read input: {0}")]
    Prompt(#[source] io::Error),

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
