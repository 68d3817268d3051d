use std::path::PathBuf;

use classgen_codegen_php::{GenerateConfig, Generator};
use classgen_manifest::ModelFile;
use clap::Args;
use eyre::Result;

use super::{UnwrapOrExit, exit_usage_error, exit_with_diagnostic};
use crate::{
    ops::{self, GenerateOptions},
    reports::{BatchFailure, Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Model definition file (YAML, TOML or JSON)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Overwrite classes that already exist
    #[arg(short, long)]
    pub force: bool,

    /// Base directory for generated classes (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Print generated classes without writing them
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let Some(config) = self.config.as_deref().filter(|path| path.is_file()) else {
            exit_usage_error("model definition file not passed or does not exist");
        };

        let model = ModelFile::open(config).unwrap_or_exit();
        let generator = Generator::new(GenerateConfig::default());

        let report = ops::generate(
            &model,
            &generator,
            GenerateOptions {
                output_dir: &self.output,
                force: self.force,
                dry_run: self.dry_run,
            },
        );
        report.render(&mut TerminalOutput::new());

        match report.into_failure() {
            Some(BatchFailure::InvalidEntry(error)) => exit_with_diagnostic(*error),
            Some(BatchFailure::Write(error)) => Err(error),
            None => Ok(()),
        }
    }
}
