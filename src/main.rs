use clap::Parser;
use miette::Result;
use tracing_subscriber::EnvFilter;
use worldmap::cli::{Cli, Commands};
use worldmap::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let printer = Printer::new();

    match cli.command {
        Commands::Build(args) => worldmap::cli::build::run(args, &printer)?,
        Commands::Validate(args) => worldmap::cli::validate::run(args, &printer)?,
        Commands::List(args) => worldmap::cli::list::run(args, &printer)?,
        Commands::Inspect(args) => worldmap::cli::inspect::run(args, &printer)?,
        Commands::Init(args) => worldmap::cli::init::run(args, &printer)?,
        Commands::Completions(args) => worldmap::cli::completions::run(args)?,
    }

    Ok(())
}

/// `RUST_LOG` wins; otherwise `-v` raises the default level.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "worldmap=warn",
        1 => "worldmap=debug",
        _ => "worldmap=trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
