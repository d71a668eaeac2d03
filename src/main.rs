use anyhow::Result;
use clap::Parser;

use envedit::cli_bin::args::{Cli, Commands};
use envedit::cli_bin::commands;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Files(args) => commands::files_command(args),
        Commands::Get(args) => commands::get_command(args),
        Commands::Set(args) => commands::set_command(args),
        Commands::Upsert(args) => commands::upsert_command(args),
        Commands::Apply(args) => commands::apply_command(args),
    }
}

fn init_logger(verbose: bool, quiet: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    } else if quiet {
        builder.filter_level(log::LevelFilter::Error);
    }
    builder.init();
}
