use clap::Args;
use eyre::{Result, eyre};

use super::UnwrapOrExit;
use crate::{
    ops::{self, GenerateOptions, Launcher},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// File to generate; its extension selects the template (c, cpp, h, java)
    pub filename: Option<String>,

    /// Headers or packages to #include / import, in order
    #[arg(allow_hyphen_values = true)]
    pub dependencies: Vec<String>,

    /// Do not open the file after writing it
    #[arg(long)]
    pub no_open: bool,

    /// Print the generated lines instead of writing the file
    #[arg(long)]
    pub dry_run: bool,

    /// Command used to open the generated file (defaults to the platform opener)
    #[arg(long, env = "TEMPLATE_OPENER", value_name = "CMD")]
    pub opener: Option<String>,
}

impl GenerateCommand {
    /// Run the generate command.
    ///
    /// Returns `Ok(false)` when no filename was given so the caller can
    /// show usage instead.
    pub fn run(&self) -> Result<bool> {
        let Some(filename) = self.filename.as_deref() else {
            return Ok(false);
        };

        let launcher = self.launcher()?;
        let report = ops::generate(GenerateOptions {
            filename,
            dependencies: &self.dependencies,
            dry_run: self.dry_run,
            launcher: launcher.as_ref(),
        })
        .unwrap_or_exit();

        report.render(&mut TerminalOutput::new());
        Ok(true)
    }

    fn launcher(&self) -> Result<Option<Launcher>> {
        if self.no_open || self.dry_run {
            return Ok(None);
        }
        match &self.opener {
            Some(cmd) => Launcher::parse(cmd)
                .map(Some)
                .ok_or_else(|| eyre!("invalid opener command '{}'", cmd)),
            None => Ok(Some(Launcher::platform_default())),
        }
    }
}
