use serde::{Deserialize, Serialize};

/// A dictionary entry, kept in the same JSON shape the dictionary service returns
/// so saved records can be written back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordRecord {
    pub word: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phonetic: Option<String>,
    #[serde(default)]
    pub phonetics: Vec<Phonetic>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(default)]
    pub meanings: Vec<WordMeaning>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phonetic {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordMeaning {
    pub part_of_speech: String,
    #[serde(default)]
    pub definitions: Vec<WordDefinition>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordDefinition {
    pub definition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
}

impl WordRecord {
    /// The first phonetic spelling that has text, falling back to the top level one.
    pub fn phonetic_text(&self) -> Option<&str> {
        self.phonetics
            .iter()
            .find_map(|phonetic| phonetic.text.as_deref().filter(|text| !text.is_empty()))
            .or(self.phonetic.as_deref())
    }

    /// The first definition of the first meaning, which is what the saved list
    /// and the quiz show for a word.
    pub fn first_definition(&self) -> Option<(&WordMeaning, &WordDefinition)> {
        let meaning = self.meanings.first()?;
        let definition = meaning.definitions.first()?;
        Some((meaning, definition))
    }
}
