//! tidytok command-line entry point

use clap::Parser;
use tidytok_cli::commands::Commands;
use tidytok_cli::CliResult;

/// Tokenize tabular text with adjacency-aware row collapsing
#[derive(Debug, Parser)]
#[command(name = "tidytok", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> CliResult<()> {
    Cli::parse().command.execute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_subcommands() {
        let cli = Cli::parse_from(["tidytok", "validate", "-c", "tidytok.toml"]);
        assert!(matches!(cli.command, Commands::Validate(_)));

        let cli = Cli::parse_from(["tidytok", "generate-config", "-o", "tidytok.toml"]);
        assert!(matches!(cli.command, Commands::GenerateConfig(_)));

        let cli = Cli::parse_from(["tidytok", "tokenize", "-i", "a.csv", "--token", "ngrams"]);
        assert!(matches!(cli.command, Commands::Tokenize(_)));
    }
}
