mod generate;

use clap::{ArgAction, CommandFactory, Parser};
use eyre::Result;
use generate::GenerateCommand;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for classgen_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => exit_with_diagnostic(*e),
        }
    }
}

/// Print a manifest diagnostic and exit with status 1.
pub(crate) fn exit_with_diagnostic(error: classgen_manifest::Error) -> ! {
    eprintln!("{:?}", miette::Report::new(error));
    std::process::exit(1);
}

#[derive(Parser)]
#[command(name = "classgen")]
#[command(version)]
#[command(about = "Generate PHP classes from a YAML model definition")]
#[command(disable_help_flag = true)]
pub(crate) struct Cli {
    #[command(flatten)]
    generate: GenerateCommand,

    /// Print usage
    #[arg(short, long, action = ArgAction::SetTrue)]
    help: bool,
}

impl Cli {
    /// Parse arguments; usage errors exit with status 1, `--version` with 0.
    pub fn parse_or_exit() -> Self {
        Self::try_parse().unwrap_or_else(|err| {
            let _ = err.print();
            std::process::exit(if err.use_stderr() { 1 } else { 0 });
        })
    }

    pub fn run(&self) -> Result<()> {
        if self.help {
            exit_with_usage();
        }

        self.generate.run()
    }
}

/// Print usage to stderr and exit with status 1.
fn exit_with_usage() -> ! {
    eprintln!("{}", Cli::command().render_help());
    std::process::exit(1);
}

/// Print an error line followed by usage, then exit with status 1.
pub(crate) fn exit_usage_error(message: &str) -> ! {
    eprintln!("Error: {}", message);
    eprintln!();
    exit_with_usage();
}
