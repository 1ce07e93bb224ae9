//! Generate command report data structures.

use tmpl_codegen::Generator;
use tmpl_core::FileKind;

use super::output::{Output, Report};

/// Report data from generating a template file.
#[derive(Debug)]
pub struct GenerateReport {
    /// Output path as given on the command line.
    pub path: String,
    /// Classified file kind.
    pub kind: FileKind,
    /// Number of dependency arguments.
    pub dependencies: usize,
    /// Opener program, if the file was handed to one.
    pub opened_with: Option<String>,
    /// Rendered lines for a dry run; `None` when the file was written.
    pub preview: Option<Vec<String>>,
    /// Warning messages.
    pub warnings: Vec<String>,
}

impl GenerateReport {
    /// Report for a file that was written to disk.
    pub fn written(generator: &Generator, opened_with: Option<String>) -> Self {
        Self::new(generator, opened_with, None)
    }

    /// Report for a dry run.
    pub fn preview(generator: &Generator, lines: Vec<String>) -> Self {
        Self::new(generator, None, Some(lines))
    }

    fn new(
        generator: &Generator,
        opened_with: Option<String>,
        preview: Option<Vec<String>>,
    ) -> Self {
        let mut warnings = Vec::new();
        if !generator.kind().is_recognized() {
            let ext = generator.filename().extension().unwrap_or_default();
            warnings.push(format!(
                "no template for extension '{}'; the file is left empty",
                ext
            ));
        }

        Self {
            path: generator.filename().to_string(),
            kind: generator.kind(),
            dependencies: generator.dependencies().len(),
            opened_with,
            preview,
            warnings,
        }
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        if let Some(lines) = &self.preview {
            for line in lines {
                out.preformatted(line);
            }
            return;
        }

        let noun = if self.dependencies == 1 { "dependency" } else { "dependencies" };
        out.added_item(&format!(
            "{} ({}, {} {})",
            self.path, self.kind, self.dependencies, noun
        ));
        if let Some(program) = &self.opened_with {
            out.key_value_indented("opened with", program);
        }
    }
}
