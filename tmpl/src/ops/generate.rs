//! Generate operation - write a template file and open it.

use tmpl_codegen::Generator;
use tmpl_core::Result;

use super::Launcher;
use crate::reports::GenerateReport;

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Target filename, used verbatim as the output path.
    pub filename: &'a str,
    /// Dependency tokens in the order given.
    pub dependencies: &'a [String],
    /// Render to the report instead of writing.
    pub dry_run: bool,
    /// Opener to run after a successful write, if any.
    pub launcher: Option<&'a Launcher>,
}

/// Execute the generate operation.
///
/// The launcher only runs once the file has been written.
pub fn generate(opts: GenerateOptions) -> Result<GenerateReport> {
    let generator = Generator::new(opts.filename, opts.dependencies.iter().cloned())?;

    if opts.dry_run {
        return Ok(GenerateReport::preview(&generator, generator.preview()));
    }

    let file = generator.generate()?;

    let opened_with = opts.launcher.map(|launcher| {
        launcher.launch(file.path());
        launcher.program().to_string()
    });

    Ok(GenerateReport::written(&generator, opened_with))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;
    use tmpl_core::{Error, FileKind};

    use super::*;

    fn deps(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_generate_writes_without_launcher() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("foo.cpp");
        let filename = path.to_string_lossy().into_owned();
        let dependencies = deps(&["iostream", "vector"]);

        let report = generate(GenerateOptions {
            filename: &filename,
            dependencies: &dependencies,
            dry_run: false,
            launcher: None,
        })
        .unwrap();

        assert_eq!(report.kind, FileKind::Cpp);
        assert_eq!(report.dependencies, 2);
        assert!(report.opened_with.is_none());
        assert!(
            fs::read_to_string(&path)
                .unwrap()
                .starts_with("#include <iostream>\n#include <vector>\n\nusing namespace std;\n")
        );
    }

    #[test]
    fn test_dry_run_does_not_write() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Foo.h");
        let filename = path.to_string_lossy().into_owned();

        let report = generate(GenerateOptions {
            filename: &filename,
            dependencies: &deps(&["string"]),
            dry_run: true,
            launcher: None,
        })
        .unwrap();

        assert!(!path.exists());
        assert_eq!(
            report.preview.as_deref().unwrap(),
            [
                "#ifndef FOO_H",
                "#def FOO_H",
                "",
                "#include <string>",
                "",
                "#endif // FOO_H"
            ]
        );
    }

    #[test]
    fn test_open_failure_skips_launcher() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing").join("foo.c");
        let filename = path.to_string_lossy().into_owned();
        let launcher = Launcher::new("definitely-not-a-real-opener-binary", []);

        let err = generate(GenerateOptions {
            filename: &filename,
            dependencies: &[],
            dry_run: false,
            launcher: Some(&launcher),
        })
        .unwrap_err();

        assert!(matches!(*err, Error::Open { .. }));
    }

    #[test]
    fn test_unrecognized_writes_empty_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("notes.txt");
        let filename = path.to_string_lossy().into_owned();

        let report = generate(GenerateOptions {
            filename: &filename,
            dependencies: &deps(&["a"]),
            dry_run: false,
            launcher: None,
        })
        .unwrap();

        assert_eq!(report.kind, FileKind::Unrecognized);
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }
}
