use std::env;
use std::str::FromStr;
use std::time::Duration;

use dictionary::DICTIONARY_API_URL;

use crate::quiz::MIN_QUIZ_WORDS;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://wordbook.db";
pub const DEFAULT_STORAGE_KEY: &str = "englishVocabulary";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub dictionary_url: String,
    pub database_url: String,
    /// Key the saved word list lives under
    pub storage_key: String,
    pub timeout: Duration,
    /// How many definitions per meaning a lookup shows
    pub definitions_shown: usize,
    /// Saved words needed before a quiz can start
    pub min_quiz_words: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl Config {
    /// Reads `WORDBOOK_*` variables from the environment (and a `.env` file if there is one).
    pub fn new() -> Self {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "loaded .env");
        }
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a config from any variable source; missing or unparseable values use the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let parsed = |name: &str| lookup(name).and_then(|value| parse::<u64>(name, &value));

        let timeout_seconds = parsed("WORDBOOK_TIMEOUT_SECONDS").unwrap_or(10);
        let definitions_shown = parsed("WORDBOOK_DEFINITIONS_SHOWN").unwrap_or(3) as usize;
        let min_quiz_words = parsed("WORDBOOK_MIN_QUIZ_WORDS")
            .map(|value| value as usize)
            .unwrap_or(MIN_QUIZ_WORDS)
            .max(MIN_QUIZ_WORDS);

        Config {
            dictionary_url: lookup("WORDBOOK_DICTIONARY_URL")
                .unwrap_or_else(|| DICTIONARY_API_URL.to_string()),
            database_url: lookup("WORDBOOK_DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            storage_key: lookup("WORDBOOK_STORAGE_KEY")
                .unwrap_or_else(|| DEFAULT_STORAGE_KEY.to_string()),
            timeout: Duration::from_secs(timeout_seconds),
            definitions_shown,
            min_quiz_words,
        }
    }
}

fn parse<T: FromStr>(name: &str, value: &str) -> Option<T> {
    let parsed = value.trim().parse().ok();
    if parsed.is_none() {
        tracing::warn!(name, value, "ignoring unparseable setting");
    }
    parsed
}
