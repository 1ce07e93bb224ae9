use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for tmpl-core operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("'{filename}' has no file extension")]
    #[diagnostic(
        code(tmpl::missing_extension),
        help("supported extensions are: c, cpp, h, java")
    )]
    MissingExtension { filename: String },

    #[error("error opening file '{path}'")]
    #[diagnostic(
        code(tmpl::open_failed),
        help("check that the parent directory exists and is writable")
    )]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error writing file '{path}'")]
    #[diagnostic(code(tmpl::write_failed))]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn missing_extension(filename: impl Into<String>) -> Box<Self> {
        Box::new(Self::MissingExtension {
            filename: filename.into(),
        })
    }

    pub(crate) fn open(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Self::Open {
            path: path.into(),
            source,
        })
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Self::Write {
            path: path.into(),
            source,
        })
    }
}
