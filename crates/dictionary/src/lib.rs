use std::time::Duration;

use async_trait::async_trait;
use dictionary_api::get_definition;
use reqwest::{StatusCode, Url};

mod dictionary;
mod dictionary_api;

pub use dictionary::{Phonetic, WordDefinition, WordMeaning, WordRecord};
pub use dictionary_api::DICTIONARY_API_URL;

#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("Couldn't reach the dictionary: {0}")]
    Fetch(#[source] reqwest::Error),
    #[error("The dictionary sent a response that couldn't be read: {0}")]
    Deserialize(#[source] reqwest::Error),
    #[error("{0}")]
    NotFound(NotFoundError),
    #[error("The dictionary answered with status {0}")]
    Status(StatusCode),
    #[error("Invalid dictionary url {0:?}")]
    InvalidUrl(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct NotFoundError {
    pub word: String,
    pub message: String,
}

impl NotFoundError {
    fn new(word: &str) -> Self {
        Self {
            word: word.to_owned(),
            message: format!("Couldn't find a definition for \"{word}\"."),
        }
    }
}

/// Something that can turn a headword into a dictionary entry.
#[async_trait]
pub trait Lookup: Send + Sync {
    async fn lookup(&self, word: &str) -> Result<WordRecord, DictionaryError>;
}

pub struct Dictionary {
    client: reqwest::Client,
    base_url: Url,
}

impl Dictionary {
    pub fn with_endpoint(base_url: &str, timeout: Duration) -> Result<Self, DictionaryError> {
        let base_url = Url::parse(base_url)
            .map_err(|error| DictionaryError::InvalidUrl(format!("{base_url}: {error}")))?;
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(DictionaryError::Fetch)?;
        Ok(Self { client, base_url })
    }

    pub async fn get_definition(&self, word: &str) -> Result<WordRecord, DictionaryError> {
        get_definition(&self.client, &self.base_url, word).await
    }
}

#[async_trait]
impl Lookup for Dictionary {
    async fn lookup(&self, word: &str) -> Result<WordRecord, DictionaryError> {
        let result = self.get_definition(word).await;
        if let Err(error) = &result {
            tracing::warn!(word, %error, "lookup failed");
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    use super::*;

    /// Serves one canned HTTP response and hands back the request line it received.
    async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buffer = vec![0u8; 4096];
            let read = socket.read(&mut buffer).await.unwrap();
            let request = String::from_utf8_lossy(&buffer[..read]).to_string();
            let response = format!(
                "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
            request.lines().next().unwrap_or_default().to_owned()
        });
        (format!("http://{address}/api/v2/entries/en"), handle)
    }

    fn dictionary(url: &str) -> Dictionary {
        Dictionary::with_endpoint(url, Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn returns_first_entry() {
        let (url, server) = serve_once(
            "200 OK",
            r#"[{"word":"cat","meanings":[{"partOfSpeech":"noun","definitions":[{"definition":"A feline."}]}]},{"word":"cat","meanings":[]}]"#,
        )
        .await;
        let record = dictionary(&url).lookup("cat").await.unwrap();
        assert_eq!(record.word, "cat");
        assert_eq!(record.meanings.len(), 1);
        assert_eq!(server.await.unwrap(), "GET /api/v2/entries/en/cat HTTP/1.1");
    }

    #[tokio::test]
    async fn not_found_status() {
        let (url, _server) = serve_once(
            "404 Not Found",
            r#"{"title":"No Definitions Found","message":"Sorry pal.","resolution":"Try again."}"#,
        )
        .await;
        match dictionary(&url).lookup("qwzx").await {
            Err(DictionaryError::NotFound(error)) => assert_eq!(error.message, "Sorry pal."),
            other => panic!("expected not found, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn other_failure_status() {
        let (url, _server) = serve_once("500 Internal Server Error", "{}").await;
        assert!(matches!(
            dictionary(&url).lookup("cat").await,
            Err(DictionaryError::Status(status)) if status == StatusCode::INTERNAL_SERVER_ERROR
        ));
    }

    #[tokio::test]
    async fn malformed_body() {
        let (url, _server) = serve_once("200 OK", r#"{"word":"cat"}"#).await;
        assert!(matches!(
            dictionary(&url).lookup("cat").await,
            Err(DictionaryError::Deserialize(_))
        ));
    }

    #[tokio::test]
    async fn unreachable_server() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        drop(listener);
        let result = dictionary(&format!("http://{address}/")).lookup("cat").await;
        assert!(matches!(result, Err(DictionaryError::Fetch(_))));
    }

    #[test]
    fn rejects_invalid_endpoint() {
        assert!(matches!(
            Dictionary::with_endpoint("not a url", Duration::from_secs(1)),
            Err(DictionaryError::InvalidUrl(_))
        ));
    }
}
