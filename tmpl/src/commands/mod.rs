mod generate;

use clap::{ArgAction, CommandFactory, Parser};
use eyre::Result;
use generate::GenerateCommand;

/// Extension trait for exiting on core errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for tmpl_core::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "template")]
#[command(version)]
#[command(about = "Generate a boilerplate .c, .cpp, .h or .java file and open it")]
pub(crate) struct Cli {
    #[command(flatten)]
    generate: GenerateCommand,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    pub fn verbose(&self) -> u8 {
        self.verbose
    }

    pub fn run(&self) -> Result<()> {
        if !self.generate.run()? {
            println!("{}", Self::command().render_usage());
            println!();
            println!("Example: template awesome.cpp iostream vector string");
        }
        Ok(())
    }
}
