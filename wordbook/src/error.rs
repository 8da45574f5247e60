use dictionary::DictionaryError;

use crate::quiz::QuizError;
use crate::vocabulary::VocabularyError;

/// What can go wrong while handling one user action. None of these end the program.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Please enter a word.")]
    EmptyWord,
    #[error("Look up a word before saving it.")]
    NothingToSave,
    #[error("There is no quiz running.")]
    NoQuiz,
    #[error(transparent)]
    Lookup(#[from] DictionaryError),
    #[error(transparent)]
    Vocabulary(#[from] VocabularyError),
    #[error(transparent)]
    Quiz(#[from] QuizError),
}

impl AppError {
    /// Errors that block the action with a warning rather than an inline message.
    pub fn is_alert(&self) -> bool {
        matches!(
            self,
            AppError::EmptyWord
                | AppError::Vocabulary(VocabularyError::DuplicateSave(_))
                | AppError::Quiz(QuizError::InsufficientVocabulary { .. })
        )
    }
}

#[cfg(test)]
mod tests {
    use dictionary::NotFoundError;

    use super::*;

    #[test]
    fn alerts() {
        assert!(AppError::EmptyWord.is_alert());
        assert!(AppError::from(VocabularyError::DuplicateSave("cat".into())).is_alert());
        assert!(AppError::from(QuizError::InsufficientVocabulary {
            required: 2,
            available: 1
        })
        .is_alert());

        let not_found = AppError::from(DictionaryError::NotFound(NotFoundError {
            word: "qwzx".into(),
            message: "Sorry pal.".into(),
        }));
        assert!(!not_found.is_alert());
        assert_eq!(not_found.to_string(), "Sorry pal.");
        assert!(!AppError::NoQuiz.is_alert());
    }
}
