// https://dictionaryapi.dev/ - free dictionary api, answers with an array of entries or a 404 message

use reqwest::{StatusCode, Url};
use serde::Deserialize;

use crate::{DictionaryError, NotFoundError, WordRecord};

pub const DICTIONARY_API_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

/// Body of the 404 answer, `{ title, message, resolution }`.
#[derive(Debug, Deserialize)]
struct ServiceMessage {
    message: String,
}

pub(crate) fn entry_url(base: &Url, word: &str) -> Result<Url, DictionaryError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| DictionaryError::InvalidUrl(base.to_string()))?
        .pop_if_empty()
        .push(word);
    Ok(url)
}

pub(crate) async fn get_definition(
    client: &reqwest::Client,
    base: &Url,
    word: &str,
) -> Result<WordRecord, DictionaryError> {
    let url = entry_url(base, word)?;
    tracing::debug!(%url, "looking up word");
    let res = client.get(url).send().await.map_err(DictionaryError::Fetch)?;
    let status = res.status();
    if status == StatusCode::NOT_FOUND {
        let body = res.text().await.unwrap_or_default();
        return Err(DictionaryError::NotFound(not_found(word, &body)));
    }
    if !status.is_success() {
        return Err(DictionaryError::Status(status));
    }
    let entries = res
        .json::<Vec<WordRecord>>()
        .await
        .map_err(DictionaryError::Deserialize)?;
    first_entry(word, entries)
}

fn not_found(word: &str, body: &str) -> NotFoundError {
    match serde_json::from_str::<ServiceMessage>(body) {
        Ok(service) => NotFoundError {
            word: word.to_owned(),
            message: service.message,
        },
        Err(_) => NotFoundError::new(word),
    }
}

fn first_entry(word: &str, entries: Vec<WordRecord>) -> Result<WordRecord, DictionaryError> {
    entries
        .into_iter()
        .next()
        .ok_or_else(|| DictionaryError::NotFound(NotFoundError::new(word)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_word_as_path_segment() {
        let base = Url::parse(DICTIONARY_API_URL).unwrap();
        let url = entry_url(&base, "cat").unwrap();
        assert_eq!(url.as_str(), "https://api.dictionaryapi.dev/api/v2/entries/en/cat");
    }

    #[test]
    fn trailing_slash_and_spaces() {
        let base = Url::parse("http://localhost:8080/entries/en/").unwrap();
        let url = entry_url(&base, "ice cream").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/entries/en/ice%20cream");
    }

    #[test]
    fn cannot_be_a_base_url_is_rejected() {
        let base = Url::parse("mailto:someone@example.org").unwrap();
        assert!(matches!(
            entry_url(&base, "cat"),
            Err(DictionaryError::InvalidUrl(_))
        ));
    }

    #[test]
    fn not_found_keeps_service_message() {
        let body = r#"{"title":"No Definitions Found","message":"Sorry pal, we couldn't find definitions for the word you were looking for.","resolution":"You can try the search again at later time or head to the web instead."}"#;
        let error = not_found("qwzx", body);
        assert_eq!(error.word, "qwzx");
        assert!(error.message.starts_with("Sorry pal"));
    }

    #[test]
    fn not_found_with_unreadable_body() {
        let error = not_found("qwzx", "<html>gone</html>");
        assert_eq!(error.message, NotFoundError::new("qwzx").message);
    }

    #[test]
    fn empty_entry_list_is_not_found() {
        assert!(matches!(
            first_entry("cat", vec![]),
            Err(DictionaryError::NotFound(_))
        ));
    }
}
