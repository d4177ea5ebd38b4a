//! Tokenize command implementation

use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use engtok_core::{EnglishWordTokenizer, Token, TokenizerConfig, WordTokenizer};
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Arguments for the tokenize command
#[derive(Debug, Args)]
pub struct TokenizeArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Tokenizer configuration file
    #[arg(short, long, value_name = "FILE", env = "ENGTOK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Extra lexicon file merged on top of the configured lexicon
    #[arg(short, long, value_name = "FILE")]
    pub lexicon: Vec<PathBuf>,

    /// Leave email addresses and URLs split
    #[arg(long)]
    pub no_join: bool,

    /// Include whitespace tokens in the output
    #[arg(long)]
    pub keep_whitespace: bool,

    /// Tokenize input files in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Worker threads for parallel mode (default: number of CPUs)
    #[arg(short, long, value_name = "N", requires = "parallel")]
    pub threads: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text with one token per line
    Text,
    /// JSON documents with token offsets and lengths
    Json,
    /// Markdown numbered list
    Markdown,
}

impl TokenizeArgs {
    /// Execute the tokenize command
    pub fn execute(&self) -> Result<()> {
        self.init_logging()?;

        log::info!("Starting tokenization");
        log::debug!("Arguments: {self:?}");

        let tokenizer = EnglishWordTokenizer::from_config(&self.tokenizer_config()?)
            .context("Failed to build tokenizer")?;

        let files = resolve_patterns(&self.input)?;
        log::info!("Found {} file(s) to tokenize", files.len());

        let mut documents = Vec::with_capacity(files.len());
        for path in &files {
            documents.push((path.as_path(), FileReader::read_text(path)?));
        }

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(documents.len() as u64);

        let tokenized = if self.parallel {
            self.tokenize_parallel(&tokenizer, &documents, &progress)?
        } else {
            documents
                .iter()
                .map(|(path, text)| tokenize_document(&tokenizer, path, text, &progress))
                .collect()
        };
        progress.finish();

        let mut formatter = self.create_formatter()?;
        for ((path, _), tokens) in documents.iter().zip(&tokenized) {
            formatter.begin_document(&path.display().to_string())?;
            for token in tokens {
                if self.keep_whitespace || !token.is_whitespace() {
                    formatter.format_token(token.as_str(), token.offset())?;
                }
            }
        }
        formatter.finish()?;

        log::info!(
            "Tokenized {} file(s) into {} tokens",
            documents.len(),
            tokenized.iter().map(Vec::len).sum::<usize>()
        );
        Ok(())
    }

    /// Configuration from `--config` with command-line overrides applied
    fn tokenizer_config(&self) -> Result<TokenizerConfig> {
        let mut config = match &self.config {
            Some(path) => TokenizerConfig::from_file(path)
                .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?,
            None => TokenizerConfig::default(),
        };

        config.lexicon.files.extend(self.lexicon.iter().cloned());
        if self.no_join {
            config.joiner.emails = false;
            config.joiner.urls = false;
        }

        Ok(config)
    }

    fn tokenize_parallel<'a>(
        &self,
        tokenizer: &EnglishWordTokenizer,
        documents: &'a [(&Path, String)],
        progress: &ProgressReporter,
    ) -> Result<Vec<Vec<Token<'a>>>> {
        let threads = self.threads.filter(|&n| n > 0).unwrap_or_else(num_cpus::get);
        log::debug!("Tokenizing on {threads} worker thread(s)");

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .context("Failed to build thread pool")?;

        Ok(pool.install(|| {
            documents
                .par_iter()
                .map(|(path, text)| tokenize_document(tokenizer, path, text, progress))
                .collect()
        }))
    }

    fn create_formatter(&self) -> Result<Box<dyn OutputFormatter>> {
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(io::stdout()),
        };

        Ok(match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        })
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // Tests may have installed a logger already
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }

        Ok(())
    }
}

fn tokenize_document<'a>(
    tokenizer: &EnglishWordTokenizer,
    path: &Path,
    text: &'a str,
    progress: &ProgressReporter,
) -> Vec<Token<'a>> {
    let tokens = tokenizer.tokenize(text);
    log::debug!("{}: {} tokens", path.display(), tokens.len());
    progress.file_completed(&path.display().to_string());
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(input: &Path, output: &Path) -> TokenizeArgs {
        TokenizeArgs {
            input: vec![input.display().to_string()],
            output: Some(output.to_path_buf()),
            format: OutputFormat::Text,
            config: None,
            lexicon: Vec::new(),
            no_join: false,
            keep_whitespace: false,
            parallel: false,
            threads: None,
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_execute_writes_tokens() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("in.txt");
        let output = dir.path().join("out.txt");
        fs::write(&input, "We couldn't stay.").unwrap();

        args(&input, &output).execute().unwrap();

        let content = fs::read_to_string(&output).unwrap();
        assert_eq!(content, "We\ncould\nn't\nstay\n.\n");
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let dir = TempDir::new().unwrap();
        for (name, text) in [("a.txt", "it's well-known"), ("b.txt", "'twas 1990–2000")] {
            fs::write(dir.path().join(name), text).unwrap();
        }
        let pattern = dir.path().join("*.txt");
        let sequential_out = dir.path().join("seq.out");
        let parallel_out = dir.path().join("par.out");

        args(&pattern, &sequential_out).execute().unwrap();
        let mut parallel = args(&pattern, &parallel_out);
        parallel.parallel = true;
        parallel.threads = Some(2);
        parallel.execute().unwrap();

        assert_eq!(
            fs::read_to_string(sequential_out).unwrap(),
            fs::read_to_string(parallel_out).unwrap()
        );
    }

    #[test]
    fn test_config_overrides() {
        let dir = TempDir::new().unwrap();
        let mut tokenize = args(dir.path(), dir.path());
        tokenize.no_join = true;
        tokenize.lexicon = vec![PathBuf::from("extra.tsv")];

        let config = tokenize.tokenizer_config().unwrap();
        assert!(!config.joiner.emails);
        assert!(!config.joiner.urls);
        assert_eq!(config.lexicon.files, vec![PathBuf::from("extra.tsv")]);
    }

    #[test]
    fn test_invalid_config_file() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("bad.toml");
        fs::write(&config, "[delimiters]\nextra = [\"-\"]\n").unwrap();

        let mut tokenize = args(dir.path(), dir.path());
        tokenize.config = Some(config);

        let err = tokenize.tokenizer_config().unwrap_err();
        assert!(err.to_string().starts_with("Configuration error:"));
    }
}
