use std::path::Path;

use clap::Parser;
use cutpath::cli::{Cli, Commands};
use cutpath::output::Printer;
use cutpath::Config;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let printer = if cli.quiet {
        Printer::quiet()
    } else {
        Printer::new()
    };
    let load_config = || Config::discover(cli.config.as_deref(), Path::new("."));

    match cli.command {
        Commands::Star(args) => cutpath::cli::star::run(args, &load_config()?, &printer)?,
        Commands::Amoeba(args) => cutpath::cli::amoeba::run(args, &load_config()?, &printer)?,
        Commands::Pegboard(args) => {
            cutpath::cli::pegboard::run(args, &load_config()?, &printer)?
        }
        Commands::Completions(args) => cutpath::cli::completions::run(args)?,
    }

    Ok(())
}
