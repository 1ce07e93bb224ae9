//! Target filename and the names derived from it.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use crate::{
    Error, FileKind, Result,
    utils::{split_first_dot, to_guard_token},
};

/// The filename given on the command line.
///
/// The raw string is used verbatim as the output path. Derived names
/// (extension, base name, guard token) come from the last path component,
/// split at its first `.`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filename {
    raw: String,
}

impl Filename {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// The output path.
    pub fn path(&self) -> PathBuf {
        PathBuf::from(&self.raw)
    }

    /// The last path component, or the raw string if there is none.
    pub fn file_name(&self) -> &str {
        Path::new(&self.raw)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(&self.raw)
    }

    /// Everything after the first `.` of the file name.
    ///
    /// A name without any `.` is rejected with [`Error::MissingExtension`].
    pub fn extension(&self) -> Result<&str> {
        split_first_dot(self.file_name())
            .map(|(_, ext)| ext)
            .ok_or_else(|| Error::missing_extension(&self.raw))
    }

    /// Everything before the first `.` of the file name.
    pub fn base_name(&self) -> &str {
        let name = self.file_name();
        split_first_dot(name).map_or(name, |(base, _)| base)
    }

    /// Header guard token, e.g. `Foo.h` -> `FOO_H`.
    pub fn guard_token(&self) -> String {
        to_guard_token(self.base_name())
    }

    /// Classify the file from its extension.
    pub fn kind(&self) -> Result<FileKind> {
        self.extension().map(FileKind::from_extension)
    }
}

impl fmt::Display for Filename {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for Filename {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Filename {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}
