use tmpl_core::{File, FileKind, Filename, Result};

use crate::{
    builder::LineBuffer,
    generation::{build_body, guard_open, push_dependencies},
};

/// Generates a boilerplate source file from a filename and dependency list.
///
/// The file kind is classified once, on construction.
#[derive(Debug, Clone)]
pub struct Generator {
    filename: Filename,
    kind: FileKind,
    dependencies: Vec<String>,
}

impl Generator {
    /// Classify `filename` and capture the dependencies in order.
    ///
    /// Fails only when the filename has no extension.
    pub fn new<I, S>(filename: impl Into<Filename>, dependencies: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let filename = filename.into();
        let kind = filename.kind()?;
        tracing::debug!(filename = %filename, %kind, "classified file");

        Ok(Self {
            filename,
            kind,
            dependencies: dependencies.into_iter().map(Into::into).collect(),
        })
    }

    pub fn filename(&self) -> &Filename {
        &self.filename
    }

    pub fn kind(&self) -> FileKind {
        self.kind
    }

    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }

    /// Render the file content without touching the filesystem.
    pub fn preview(&self) -> Vec<String> {
        let buf = LineBuffer::new();
        let buf = if self.kind == FileKind::Header {
            guard_open(buf, &self.filename.guard_token())
        } else {
            buf
        };
        let buf = push_dependencies(buf, self.kind, &self.dependencies);

        build_body(buf, self.kind, &self.filename).build()
    }

    /// Build the file to be written.
    pub fn file(&self) -> File {
        File::new(self.filename.path(), self.preview())
    }

    /// Render and write the file, truncating any existing content.
    pub fn generate(&self) -> Result<File> {
        let file = self.file();
        file.write()?;
        tracing::info!(path = %self.filename, kind = %self.kind, "generated file");
        Ok(file)
    }
}
