use super::print::ConsoleReporter;
use super::setup::Cli;
use archi_import::api::{ImportApi, Silent};
use archi_import::error::Result;
use archi_import::model::{ImportOptions, ImportOutcome};
use clap::Parser;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    execute(cli)?;
    Ok(())
}

fn execute(cli: Cli) -> Result<ImportOutcome> {
    let verbose = cli.verbose;
    let options = import_options(cli);

    if verbose {
        ImportApi::new(ConsoleReporter).import(&options)
    } else {
        ImportApi::new(Silent).import(&options)
    }
}

fn import_options(cli: Cli) -> ImportOptions {
    ImportOptions::new(cli.element_type, cli.input)
        .with_output(cli.output)
        .with_specialization(cli.specialization)
        .with_trim(cli.trim)
}
