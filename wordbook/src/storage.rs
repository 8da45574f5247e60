use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::{migrate::MigrateDatabase, query, query_scalar, Pool, Sqlite, SqlitePool};
use tokio::sync::Mutex;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("failed to prepare the database: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// A flat string key-value store. Every `set` replaces the whole value.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}

pub struct SqliteStore {
    pool: Pool<Sqlite>,
}

impl SqliteStore {
    pub async fn initialize(db_url: &str) -> Result<Self, StorageError> {
        if !Sqlite::database_exists(db_url).await.unwrap_or(false) {
            tracing::info!(db_url, "creating database");
            Sqlite::create_database(db_url).await?;
        }
        let pool = SqlitePool::connect(db_url).await?;
        sqlx::migrate!().run(&pool).await?;
        Ok(Self { pool })
    }
}

#[async_trait]
impl KeyValueStore for SqliteStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let value = query_scalar::<_, String>("SELECT value FROM storage WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        query(
            "INSERT INTO storage(key, value) VALUES(?, ?)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        query("DELETE FROM storage WHERE key = ?")
            .bind(key)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

/// Process-local store, gone when the program exits.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .lock()
            .await
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.lock().await.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn exercise(store: &impl KeyValueStore) {
        assert_eq!(store.get("words").await.unwrap(), None);

        store.set("words", "[]").await.unwrap();
        assert_eq!(store.get("words").await.unwrap().as_deref(), Some("[]"));

        store.set("words", r#"[{"word":"cat"}]"#).await.unwrap();
        assert_eq!(
            store.get("words").await.unwrap().as_deref(),
            Some(r#"[{"word":"cat"}]"#)
        );
        assert_eq!(store.get("other").await.unwrap(), None);

        store.remove("words").await.unwrap();
        assert_eq!(store.get("words").await.unwrap(), None);
        // removing a missing key is fine
        store.remove("words").await.unwrap();
    }

    #[tokio::test]
    async fn memory_store() {
        exercise(&MemoryStore::default()).await;
    }

    #[tokio::test]
    async fn sqlite_store() {
        let dir = tempfile::tempdir().unwrap();
        let db_url = format!("sqlite://{}", dir.path().join("wordbook.db").display());
        let store = SqliteStore::initialize(&db_url).await.unwrap();
        exercise(&store).await;
    }

    #[tokio::test]
    async fn sqlite_store_survives_reopening() {
        let dir = tempfile::tempdir().unwrap();
        let db_url = format!("sqlite://{}", dir.path().join("wordbook.db").display());
        {
            let store = SqliteStore::initialize(&db_url).await.unwrap();
            store.set("englishVocabulary", "[1]").await.unwrap();
            store.pool.close().await;
        }
        let store = SqliteStore::initialize(&db_url).await.unwrap();
        assert_eq!(
            store.get("englishVocabulary").await.unwrap().as_deref(),
            Some("[1]")
        );
    }
}
