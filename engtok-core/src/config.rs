//! Tokenizer configuration
//!
//! Configurations are plain TOML:
//!
//! ```toml
//! [lexicon]
//! builtin = true
//! files = ["domain-words.tsv"]
//!
//! [delimiters]
//! extra = ["|"]
//!
//! [joiner]
//! emails = true
//! urls = true
//! ```

use crate::error::{Result, TokenizerError};
use crate::splitter::reject_extra_delimiter;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

fn default_true() -> bool {
    true
}

/// Complete tokenizer configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TokenizerConfig {
    /// Lexicon sources
    #[serde(default)]
    pub lexicon: LexiconConfig,

    /// Additional tokenizing characters
    #[serde(default)]
    pub delimiters: DelimiterConfig,

    /// Email and URL joining
    #[serde(default)]
    pub joiner: JoinerConfig,
}

/// Where lexicon entries come from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LexiconConfig {
    /// Include the embedded English lexicon
    #[serde(default = "default_true")]
    pub builtin: bool,

    /// Extra lexicon files merged on top
    #[serde(default)]
    pub files: Vec<PathBuf>,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            builtin: true,
            files: Vec::new(),
        }
    }
}

/// Characters added to the English tokenizing set
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DelimiterConfig {
    #[serde(default)]
    pub extra: Vec<char>,
}

/// Which kinds of tokens the joiner re-merges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JoinerConfig {
    #[serde(default = "default_true")]
    pub emails: bool,
    #[serde(default = "default_true")]
    pub urls: bool,
}

impl Default for JoinerConfig {
    fn default() -> Self {
        Self {
            emails: true,
            urls: true,
        }
    }
}

impl TokenizerConfig {
    /// Create a configuration builder
    pub fn builder() -> TokenizerConfigBuilder {
        TokenizerConfigBuilder::default()
    }

    /// Parse and validate TOML text
    ///
    /// Relative lexicon paths are kept as written.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: TokenizerConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file
    ///
    /// Relative lexicon paths are resolved against the file's directory.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| TokenizerError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config = Self::from_toml_str(&content)?;
        if let Some(base) = path.parent() {
            for file in &mut config.lexicon.files {
                if file.is_relative() {
                    *file = base.join(&*file);
                }
            }
        }

        log::debug!("Loaded tokenizer configuration from {}", path.display());
        Ok(config)
    }

    /// Serialize to TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| TokenizerError::Configuration(format!("Failed to serialize: {e}")))
    }

    /// Check every value is usable
    pub fn validate(&self) -> Result<()> {
        for &ch in &self.delimiters.extra {
            if let Some(reason) = reject_extra_delimiter(ch) {
                return Err(TokenizerError::Configuration(format!(
                    "invalid extra delimiter {ch:?}: {reason}"
                )));
            }
        }

        if self.lexicon.files.iter().any(|file| file.as_os_str().is_empty()) {
            return Err(TokenizerError::Configuration(
                "lexicon file paths must not be empty".into(),
            ));
        }

        Ok(())
    }
}

/// Fluent builder for [`TokenizerConfig`]
#[derive(Debug, Default)]
pub struct TokenizerConfigBuilder {
    config: TokenizerConfig,
}

impl TokenizerConfigBuilder {
    /// Create a builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Include or exclude the builtin English lexicon
    pub fn builtin_lexicon(mut self, enabled: bool) -> Self {
        self.config.lexicon.builtin = enabled;
        self
    }

    /// Merge an extra lexicon file
    pub fn lexicon_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.lexicon.files.push(path.into());
        self
    }

    /// Add a tokenizing character
    pub fn extra_delimiter(mut self, ch: char) -> Self {
        self.config.delimiters.extra.push(ch);
        self
    }

    /// Enable or disable email joining
    pub fn join_emails(mut self, enabled: bool) -> Self {
        self.config.joiner.emails = enabled;
        self
    }

    /// Enable or disable URL joining
    pub fn join_urls(mut self, enabled: bool) -> Self {
        self.config.joiner.urls = enabled;
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<TokenizerConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
