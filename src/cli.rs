//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// assetsync - package asset installer
///
/// Installs the transforms bundled with an integration package into a search
/// engine and keeps the package record's asset inventory in sync.
#[derive(Parser, Debug)]
#[command(
    name = "assetsync",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Installs package transforms into a search engine",
    long_about = "assetsync reconciles the transform jobs bundled with an integration package \
                  against the ones a previous version installed: outdated transforms are stopped \
                  and deleted, new ones are created and started, and the package record's \
                  inventory is updated to match.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  assetsync install ./endpoint-0.16.0\n    \
                  assetsync plan ./endpoint-0.16.0\n    \
                  assetsync remove endpoint\n    \
                  assetsync list"
)]
pub struct Cli {
    /// Configuration file (defaults to the user config directory)
    #[arg(long, short = 'c', global = true, env = "ASSETSYNC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Engine base URL, overriding the configuration
    #[arg(long, global = true, env = "ASSETSYNC_ENGINE_URL")]
    pub engine_url: Option<String>,

    /// Store directory, overriding the configuration
    #[arg(long, global = true, env = "ASSETSYNC_STORE")]
    pub store: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install a package's transforms and update its record
    Install(InstallArgs),

    /// Show what installing a package would change
    Plan(PlanArgs),

    /// Tear down every transform a package installed
    Remove(RemoveArgs),

    /// List package records and their inventories
    List(ListArgs),

    /// Reorder grouped columns by nesting one under another
    Nest(NestArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the install command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Install from an unpacked package:\n    assetsync install ./endpoint-0.16.0\n\n\
                   Preview without touching the engine:\n    assetsync install ./endpoint-0.16.0 --dry-run\n\n\
                   Install against another engine:\n    assetsync install ./endpoint --engine-url http://es:9200")]
pub struct InstallArgs {
    /// Unpacked package directory containing manifest.yml
    pub package: PathBuf,

    /// Print the plan without calling the engine or writing the record
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the plan command
#[derive(Parser, Debug)]
pub struct PlanArgs {
    /// Unpacked package directory containing manifest.yml
    pub package: PathBuf,
}

/// Arguments for the remove command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Remove a package's transforms:\n    assetsync remove endpoint\n\n\
                  Remove without confirmation:\n    assetsync remove endpoint -y")]
pub struct RemoveArgs {
    /// Package name
    pub name: String,

    /// Skip confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

/// Arguments for the list command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Only show this package
    pub name: Option<String>,
}

/// Arguments for the nest command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Nest column c under a:\n    assetsync nest --order a,b,c --outer a --inner c\n\n\
                  Move column b to the top level:\n    assetsync nest --order a,b,c --inner b")]
pub struct NestArgs {
    /// Current column order, comma separated
    #[arg(long, value_delimiter = ',', required = true)]
    pub order: Vec<String>,

    /// Column to nest under; omit for the top level
    #[arg(long, default_value = "")]
    pub outer: String,

    /// Column to move
    #[arg(long)]
    pub inner: String,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    assetsync completions --shell bash > ~/.bash_completion.d/assetsync\n\n\
                  Generate zsh completions:\n    assetsync completions --shell zsh > ~/.zfunc/_assetsync")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}
