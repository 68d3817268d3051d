mod commands;
mod ops;
mod reports;

use eyre::Result;

use crate::commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;

    Cli::parse_or_exit().run()
}
