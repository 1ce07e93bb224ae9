//! Opening the generated file with an external program.

use std::{
    path::Path,
    process::{Command, Stdio},
};

/// An external command that opens a file, e.g. `xdg-open`.
///
/// The file path is appended as the final argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Launcher {
    program: String,
    args: Vec<String>,
}

impl Launcher {
    /// The desktop opener for the current platform.
    pub fn platform_default() -> Self {
        if cfg!(target_os = "macos") {
            Self::new("open", [])
        } else if cfg!(windows) {
            Self::new("cmd", ["/C", "start", ""])
        } else {
            Self::new("xdg-open", [])
        }
    }

    pub fn new<const N: usize>(program: &str, args: [&str; N]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// Parse a shell-style command line such as `code --wait`.
    ///
    /// Returns `None` for unbalanced quotes or an empty command.
    pub fn parse(cmd: &str) -> Option<Self> {
        let mut words = shlex::split(cmd)?.into_iter();
        let program = words.next()?;
        Some(Self {
            program,
            args: words.collect(),
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Build the command for `path` without running it.
    pub fn command(&self, path: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        cmd
    }

    /// Spawn the opener and return immediately.
    ///
    /// The child is never waited on and its outcome is not reported.
    pub fn launch(&self, path: &Path) {
        match self.command(path).spawn() {
            Ok(child) => {
                tracing::debug!(program = %self.program, pid = child.id(), "launched opener")
            }
            Err(e) => {
                tracing::debug!(program = %self.program, error = %e, "failed to launch opener")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let launcher = Launcher::parse("xdg-open").unwrap();
        assert_eq!(launcher, Launcher::new("xdg-open", []));
    }

    #[test]
    fn test_parse_with_quoted_args() {
        let launcher = Launcher::parse(r#"code --wait "--profile=my setup""#).unwrap();
        assert_eq!(launcher.program(), "code");
        assert_eq!(launcher.args, ["--wait", "--profile=my setup"]);
    }

    #[test]
    fn test_parse_rejects_empty_and_unbalanced() {
        assert!(Launcher::parse("").is_none());
        assert!(Launcher::parse("   ").is_none());
        assert!(Launcher::parse("code \"unterminated").is_none());
    }

    #[test]
    fn test_command_appends_path_last() {
        let launcher = Launcher::new("code", ["--wait"]);
        let cmd = launcher.command(Path::new("foo.cpp"));

        assert_eq!(cmd.get_program(), "code");
        let args: Vec<_> = cmd.get_args().collect();
        assert_eq!(args, ["--wait", "foo.cpp"]);
    }

    #[test]
    fn test_launch_missing_program_is_silent() {
        Launcher::new("definitely-not-a-real-opener-binary", []).launch(Path::new("x.c"));
    }
}
