//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use engtok_core::{DelimiterSet, EnglishWordTokenizer, WordTokenizer};

pub mod generate_config;
pub mod tokenize;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Tokenize text files into words, punctuation and clitics
    Tokenize(tokenize::TokenizeArgs),

    /// Validate a tokenizer configuration file
    Validate(validate::ValidateArgs),

    /// Write a commented configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,

    /// List the English tokenizing characters
    Delimiters,
}

/// Print the supported output formats
pub fn list_formats() -> Result<()> {
    println!("Available output formats:");
    println!("  text      - One token per line");
    println!("  json      - JSON documents with token offsets and lengths");
    println!("  markdown  - Numbered token list with a total");
    Ok(())
}

/// Print every English tokenizing character with its code point
pub fn list_delimiters() -> Result<()> {
    let tokenizer = EnglishWordTokenizer::new();
    print!("{}", describe_delimiters(tokenizer.tokenizing_characters()));
    Ok(())
}

fn describe_delimiters(delimiters: &DelimiterSet) -> String {
    let mut listing = format!("Tokenizing characters ({}):\n", delimiters.len());
    for ch in delimiters.iter() {
        listing.push_str(&format!("  U+{:04X}  {}\n", ch as u32, ch.escape_debug()));
    }
    listing
}
