//! engtok command-line entry point

use clap::Parser;
use engtok_cli::commands::{Commands, ListCommands};

#[derive(Debug, Parser)]
#[command(name = "engtok", version, about = "Dictionary-aware English word tokenizer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Tokenize(args) => args.execute(),
        Commands::Validate(args) => args.execute(),
        Commands::GenerateConfig(args) => args.execute(),
        Commands::List { subcommand } => match subcommand {
            ListCommands::Formats => engtok_cli::commands::list_formats(),
            ListCommands::Delimiters => engtok_cli::commands::list_delimiters(),
        },
    }
}
