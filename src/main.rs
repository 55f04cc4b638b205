mod adapters;
mod cli;
mod config;
mod core;

use clap::Parser;

use cli::{Cli, Commands};

fn main() {
    let args = Cli::parse();

    cli::context::init(args.config.as_deref());

    let result = match &args.command {
        Commands::Init => cli::commands::init::execute(args.verbose),
        Commands::Inject {
            output,
            format,
            strict,
        } => cli::commands::inject::execute(
            output.as_deref(),
            format.as_deref(),
            *strict,
            args.verbose,
        ),
        Commands::Check => cli::commands::check::execute(),
        Commands::Status => cli::commands::status::execute(),
    };

    if let Err(e) = result {
        cli::output::error(&format!("Error: {e}"));
        std::process::exit(1);
    }
}
