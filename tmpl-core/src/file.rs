use std::{
    fs,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::{Error, Result};

/// Write each line followed by `\n`, in order.
///
/// The destination is created or truncated. Parent directories are not
/// created; a missing parent is reported as [`Error::Open`].
pub fn write_lines(path: &Path, lines: &[String]) -> Result<()> {
    let file = fs::File::create(path).map_err(|e| Error::open(path, e))?;
    let mut out = BufWriter::new(file);

    for line in lines {
        writeln!(out, "{}", line).map_err(|e| Error::write(path, e))?;
    }
    out.flush().map_err(|e| Error::write(path, e))?;

    tracing::debug!(path = %path.display(), lines = lines.len(), "wrote file");
    Ok(())
}

/// A file to be generated
#[derive(Debug)]
pub struct File {
    path: PathBuf,
    lines: Vec<String>,
}

impl File {
    /// Create a new file with the given path and lines
    pub fn new(path: impl Into<PathBuf>, lines: Vec<String>) -> Self {
        Self {
            path: path.into(),
            lines,
        }
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the file, truncating any existing content
    pub fn write(&self) -> Result<()> {
        write_lines(&self.path, &self.lines)
    }
}
