//! `bertqa` command-line interface.

mod commands;
mod io_args;
mod logging;
mod vocab_args;

use clap::Parser;
use commands::Commands;

/// bertqa
#[derive(clap::Parser, Debug)]
pub struct Args {
    #[command(flatten)]
    logging: logging::LogArgs,

    /// Subcommand to run.
    #[clap(subcommand)]
    pub command: Commands,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    args.logging.init()?;

    args.command.run()
}
