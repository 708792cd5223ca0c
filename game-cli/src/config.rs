use std::env;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub root_words_file: PathBuf,
    pub dictionary_directory: PathBuf,
    pub language: String,
    pub root_word_seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup, falling back to defaults for
    /// missing keys
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let root_word_seed = match lookup("ROOT_WORD_SEED") {
            Some(value) => Some(value.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: "ROOT_WORD_SEED",
                value,
            })?),
            None => None,
        };

        let language = lookup("WORD_LANGUAGE").unwrap_or_else(|| "en_US".to_string());
        if language.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "WORD_LANGUAGE",
                value: language,
            });
        }

        Ok(Self {
            root_words_file: lookup("ROOT_WORDS_FILE")
                .unwrap_or_else(|| "./words/start.txt".to_string())
                .into(),
            dictionary_directory: lookup("DICTIONARY_DIRECTORY")
                .unwrap_or_else(|| "./words/dictionaries".to_string())
                .into(),
            language: language.trim().to_string(),
            root_word_seed,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root_words_file: "./words/start.txt".into(),
            dictionary_directory: "./words/dictionaries".into(),
            language: "en_US".to_string(),
            root_word_seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("ROOT_WORDS_FILE", "/tmp/start.txt"),
            ("DICTIONARY_DIRECTORY", "/usr/share/word-scramble"),
            ("WORD_LANGUAGE", "es_ES"),
            ("ROOT_WORD_SEED", " 42 "),
        ]))
        .unwrap();

        assert_eq!(config.root_words_file, PathBuf::from("/tmp/start.txt"));
        assert_eq!(
            config.dictionary_directory,
            PathBuf::from("/usr/share/word-scramble")
        );
        assert_eq!(config.language, "es_ES");
        assert_eq!(config.root_word_seed, Some(42));
    }

    #[test]
    fn test_invalid_seed() {
        let result = Config::from_lookup(lookup_from(&[("ROOT_WORD_SEED", "forty-two")]));
        assert_eq!(
            result,
            Err(ConfigError::InvalidValue {
                key: "ROOT_WORD_SEED",
                value: "forty-two".to_string(),
            })
        );
    }

    #[test]
    fn test_blank_language() {
        let result = Config::from_lookup(lookup_from(&[("WORD_LANGUAGE", "  ")]));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue {
                key: "WORD_LANGUAGE",
                ..
            })
        ));
    }
}
