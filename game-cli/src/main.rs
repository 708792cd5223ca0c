use anyhow::{Context, Result};
use std::io;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use game_cli::{config::Config, presentation::Locale, repl};
use game_core::{CachedDictionary, GameSession, WordListDictionary, WordListRootSource, WordValidator};

fn main() -> Result<()> {
    // Logs go to stderr so they never mix with the game on stdout
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let config = Config::from_env().context("Invalid configuration")?;
    info!("Starting Word Scramble in {}", config.language);

    let root_source = match WordListRootSource::from_file(&config.root_words_file) {
        Ok(source) => source,
        Err(e) => {
            warn!("Could not load root words: {}", e);
            WordListRootSource::empty()
        }
    };
    let root_source = match config.root_word_seed {
        Some(seed) => root_source.with_seed(seed),
        None => root_source,
    };

    let dictionary = match WordListDictionary::from_directory(&config.dictionary_directory) {
        Ok(dictionary) => dictionary,
        Err(e) => {
            error!("Failed to load dictionaries: {}", e);
            error!("Set DICTIONARY_DIRECTORY to a directory containing <language>.txt word lists.");
            std::process::exit(1);
        }
    };
    if !dictionary.has_language(&config.language) {
        error!(
            "No dictionary for {} (available: {})",
            config.language,
            dictionary.languages().join(", ")
        );
        std::process::exit(1);
    }

    let validator = WordValidator::new(CachedDictionary::new(dictionary), config.language.clone());
    let mut session = GameSession::new(root_source, validator);
    let locale = Locale::from_language(&config.language);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    repl::run(&mut session, locale, stdin.lock(), &mut stdout).context("Terminal I/O failed")?;

    info!("Goodbye");
    Ok(())
}
