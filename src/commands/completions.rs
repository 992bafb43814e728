//! Shell completions command

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::{Cli, CompletionsArgs};
use crate::error::{Result, invalid_argument};

fn parse_shell(name: &str) -> Option<Shell> {
    match name.to_lowercase().as_str() {
        "bash" => Some(Shell::Bash),
        "elvish" => Some(Shell::Elvish),
        "fish" => Some(Shell::Fish),
        "powershell" | "pwsh" => Some(Shell::PowerShell),
        "zsh" => Some(Shell::Zsh),
        _ => None,
    }
}

/// Generate shell completions
pub fn run(args: CompletionsArgs) -> Result<()> {
    let shell = parse_shell(&args.shell).ok_or_else(|| {
        invalid_argument(format!(
            "unknown shell '{}' (supported: bash, elvish, fish, powershell, zsh)",
            args.shell
        ))
    })?;

    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "assetsync", &mut std::io::stdout().lock());

    Ok(())
}
