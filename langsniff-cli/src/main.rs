//! langsniff command-line entry point

use clap::Parser;
use langsniff_cli::commands::Commands;

/// Guess the natural language of text
#[derive(Debug, Parser)]
#[command(name = "langsniff", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_detect() {
        let cli = Cli::try_parse_from(["langsniff", "detect", "-t", "Hello World", "-a", "en"])
            .unwrap();
        assert!(matches!(cli.command, Commands::Detect(_)));
    }
}
