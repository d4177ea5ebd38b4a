//! Validate command implementation

use anyhow::{Context, Result};
use clap::Args;
use engtok_core::{EnglishWordTokenizer, TokenizerConfig, WordTokenizer};
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the tokenizer configuration file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub config: PathBuf,

    /// Print the effective configuration after validation
    #[arg(long)]
    pub show: bool,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating tokenizer configuration: {}", self.config.display());

        // Building the tokenizer also loads every lexicon file
        let loaded = TokenizerConfig::from_file(&self.config).and_then(|config| {
            EnglishWordTokenizer::from_config(&config).map(|tokenizer| (config, tokenizer))
        });

        match loaded {
            Ok((config, tokenizer)) => {
                println!("✓ Configuration is valid!");
                println!("  Builtin lexicon: {}", config.lexicon.builtin);
                println!("  Lexicon files: {}", config.lexicon.files.len());
                println!(
                    "  Tokenizing characters: {}",
                    tokenizer.tokenizing_characters().len()
                );
                println!(
                    "  Join emails/URLs: {}/{}",
                    config.joiner.emails, config.joiner.urls
                );

                if self.show {
                    let effective = toml::to_string_pretty(&config)
                        .context("Failed to serialize configuration")?;
                    println!();
                    print!("{effective}");
                }
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_validate_args_debug() {
        let args = ValidateArgs {
            config: PathBuf::from("test.toml"),
            show: false,
        };

        let debug_str = format!("{args:?}");
        assert!(debug_str.contains("ValidateArgs"));
        assert!(debug_str.contains("test.toml"));
    }

    #[test]
    fn test_validate_valid_config() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("words.tsv"), "foo'bar\n").unwrap();
        let path = dir.path().join("engtok.toml");
        fs::write(
            &path,
            "[lexicon]\nfiles = [\"words.tsv\"]\n\n[delimiters]\nextra = [\"|\"]\n",
        )
        .unwrap();

        let args = ValidateArgs {
            config: path,
            show: true,
        };

        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_validate_invalid_delimiter() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "[delimiters]\nextra = [\"'\"]\n").unwrap();

        let args = ValidateArgs {
            config: temp_file.path().to_path_buf(),
            show: false,
        };

        assert!(args.execute().is_err());
    }

    #[test]
    fn test_validate_missing_lexicon_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "[lexicon]\nfiles = [\"/nonexistent/words.tsv\"]\n").unwrap();

        let args = ValidateArgs {
            config: temp_file.path().to_path_buf(),
            show: false,
        };

        assert!(args.execute().is_err());
    }
}
