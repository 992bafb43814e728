//! assetsync - installs package transforms into a search engine

use clap::Parser;
use tracing_subscriber::EnvFilter;

use assetsync::cli::{Cli, Commands};
use assetsync::commands::{self, GlobalOptions};

/// Environment variable overriding the log filter
const LOG_ENV: &str = "ASSETSYNC_LOG";

fn init_logging(verbose: bool) {
    let default = if verbose {
        "assetsync=debug"
    } else {
        "assetsync=warn"
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = GlobalOptions::from(&cli);
    let result = match cli.command {
        Commands::Install(args) => commands::install::run(&options, args),
        Commands::Plan(args) => commands::plan::run(&options, args),
        Commands::Remove(args) => commands::remove::run(&options, args),
        Commands::List(args) => commands::list::run(&options, args),
        Commands::Nest(args) => commands::nest::run(&args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
