//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

const TEMPLATE: &str = r#"# engtok tokenizer configuration

# Word lists consulted when deciding whether hyphenated or apostrophed
# words stay whole. One entry per line: word[<TAB>lemma[<TAB>POS]]
[lexicon]
# Include the embedded English lexicon
builtin = true

# Extra lexicon files, relative to this file
files = [
    # "domain-words.tsv",
]

# Characters that split words in addition to whitespace, punctuation and
# the en-dash. Hyphens, apostrophes and letters are not allowed here.
[delimiters]
extra = [
    # "|",
]

# Re-join email addresses and URLs that punctuation splitting broke apart
[joiner]
emails = true
urls = true
"#;

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        if self.output.exists() && !self.force {
            anyhow::bail!(
                "{} already exists (use --force to overwrite)",
                self.output.display()
            );
        }

        println!("Generating tokenizer configuration template...");
        println!("  Output file: {}", self.output.display());

        std::fs::write(&self.output, TEMPLATE)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the configuration file to add lexicon files or delimiters");
        println!("2. Validate your configuration:");
        println!("   engtok validate --config {}", self.output.display());
        println!("3. Use it for tokenizing:");
        println!(
            "   engtok tokenize -i input.txt --config {}",
            self.output.display()
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engtok_core::TokenizerConfig;
    use tempfile::TempDir;

    #[test]
    fn test_template_is_default_config() {
        let config = TokenizerConfig::from_toml_str(TEMPLATE).unwrap();
        assert_eq!(config, TokenizerConfig::default());
    }

    #[test]
    fn test_execute_success() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("engtok.toml");

        let args = GenerateConfigArgs {
            output: output_path.clone(),
            force: false,
        };

        assert!(args.execute().is_ok());
        let content = std::fs::read_to_string(&output_path).unwrap();
        assert!(content.contains("[lexicon]"));
        assert!(content.contains("[joiner]"));
    }

    #[test]
    fn test_refuses_to_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("engtok.toml");
        std::fs::write(&output_path, "keep me").unwrap();

        let args = GenerateConfigArgs {
            output: output_path.clone(),
            force: false,
        };
        assert!(args.execute().is_err());
        assert_eq!(std::fs::read_to_string(&output_path).unwrap(), "keep me");

        let forced = GenerateConfigArgs {
            output: output_path.clone(),
            force: true,
        };
        assert!(forced.execute().is_ok());
    }
}
