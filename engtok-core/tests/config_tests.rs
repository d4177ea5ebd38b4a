//! Building tokenizers from configuration files

use engtok_core::{EnglishWordTokenizer, Token, TokenizerConfig, TokenizerError, WordTokenizer};
use std::fs;
use tempfile::TempDir;

fn texts<'a>(tokens: &[Token<'a>]) -> Vec<&'a str> {
    tokens.iter().map(Token::as_str).collect()
}

#[test]
fn test_extra_lexicon_file_keeps_words_whole() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("domain.tsv"), "# domain words\nfoo'bar\tfoo'bar\tNN\n").unwrap();
    fs::write(
        dir.path().join("engtok.toml"),
        "[lexicon]\nfiles = [\"domain.tsv\"]\n",
    )
    .unwrap();

    let config = TokenizerConfig::from_file(&dir.path().join("engtok.toml")).unwrap();
    let tokenizer = EnglishWordTokenizer::from_config(&config).unwrap();

    assert_eq!(texts(&tokenizer.tokenize("foo'bar")), vec!["foo'bar"]);
    // Builtin entries are still there
    assert_eq!(texts(&tokenizer.tokenize("o'clock")), vec!["o'clock"]);
}

#[test]
fn test_without_builtin_lexicon_clitics_are_split() {
    let config = TokenizerConfig::builder()
        .builtin_lexicon(false)
        .build()
        .unwrap();
    let tokenizer = EnglishWordTokenizer::from_config(&config).unwrap();

    assert_eq!(texts(&tokenizer.tokenize("o'clock")), vec!["o", "'", "clock"]);
    // Protected forms are kept whole only when the lexicon knows them
    assert_eq!(texts(&tokenizer.tokenize("rec'd")), vec!["rec", "'", "d"]);
}

#[test]
fn test_extra_delimiter() {
    let config = TokenizerConfig::builder()
        .extra_delimiter('@')
        .build()
        .unwrap();
    let tokenizer = EnglishWordTokenizer::from_config(&config).unwrap();

    // The joiner still rebuilds the address afterwards
    assert_eq!(texts(&tokenizer.tokenize("a@b.com")), vec!["a@b.com"]);
    assert_eq!(texts(&tokenizer.tokenize("x@y")), vec!["x", "@", "y"]);
}

#[test]
fn test_joiner_can_be_disabled() {
    let config = TokenizerConfig::from_toml_str("[joiner]\nemails = false\nurls = false\n").unwrap();
    let tokenizer = EnglishWordTokenizer::from_config(&config).unwrap();

    assert_eq!(
        texts(&tokenizer.tokenize("www.example.org")),
        vec!["www", ".", "example", ".", "org"]
    );
}

#[test]
fn test_missing_lexicon_file_is_reported() {
    let config = TokenizerConfig::builder()
        .lexicon_file("/nonexistent/words.tsv")
        .build()
        .unwrap();

    match EnglishWordTokenizer::from_config(&config) {
        Err(TokenizerError::Io { path, .. }) => {
            assert!(path.ends_with("words.tsv"));
        }
        other => panic!("Expected I/O error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_malformed_lexicon_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let lexicon = dir.path().join("bad.tsv");
    fs::write(&lexicon, "fine\n\tno-word\n").unwrap();

    let config = TokenizerConfig::builder().lexicon_file(&lexicon).build().unwrap();
    match EnglishWordTokenizer::from_config(&config) {
        Err(TokenizerError::Lexicon { line, .. }) => assert_eq!(line, 2),
        other => panic!("Expected lexicon error, got {:?}", other.map(|_| ())),
    }
}
