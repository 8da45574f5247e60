use dictionary::WordRecord;

use crate::storage::{KeyValueStore, StorageError};

#[derive(Debug, thiserror::Error)]
pub enum VocabularyError {
    #[error("\"{0}\" is already in your vocabulary.")]
    DuplicateSave(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("the saved vocabulary couldn't be read: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// The saved word list, kept as one JSON array under a single storage key.
pub struct Vocabulary<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> Vocabulary<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub async fn list(&self) -> Result<Vec<WordRecord>, VocabularyError> {
        match self.store.get(&self.key).await? {
            Some(value) => Ok(serde_json::from_str(&value)?),
            None => Ok(Vec::new()),
        }
    }

    pub async fn contains(&self, word: &str) -> Result<bool, VocabularyError> {
        Ok(self.list().await?.iter().any(|record| record.word == word))
    }

    /// Appends a record unless its headword is already saved.
    pub async fn save(&self, record: WordRecord) -> Result<(), VocabularyError> {
        let mut words = self.list().await?;
        if words.iter().any(|saved| saved.word == record.word) {
            return Err(VocabularyError::DuplicateSave(record.word));
        }
        tracing::info!(word = %record.word, "saving word");
        words.push(record);
        self.write(&words).await
    }

    /// Attempt to remove a word, returns true if the word was removed
    pub async fn remove(&self, word: &str) -> Result<bool, VocabularyError> {
        let mut words = self.list().await?;
        let before = words.len();
        words.retain(|record| record.word != word);
        if words.len() == before {
            return Ok(false);
        }
        tracing::info!(word, "removing word");
        self.write(&words).await?;
        Ok(true)
    }

    pub async fn clear(&self) -> Result<(), VocabularyError> {
        tracing::info!("clearing vocabulary");
        self.store.remove(&self.key).await?;
        Ok(())
    }

    async fn write(&self, words: &[WordRecord]) -> Result<(), VocabularyError> {
        let value = serde_json::to_string(words)?;
        self.store.set(&self.key, &value).await?;
        Ok(())
    }
}
