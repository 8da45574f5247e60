use dictionary::{Lookup, WordRecord};
use rand::{rngs::StdRng, SeedableRng};

use crate::config::Config;
use crate::error::AppError;
use crate::quiz::QuizSession;
use crate::storage::KeyValueStore;
use crate::utilities::Confirm;
use crate::view::{lookup_view, question_view, result_view, vocabulary_view, Notice, View};
use crate::vocabulary::Vocabulary;

/// Holds everything one user session touches and turns user actions into views.
pub struct Controller<L, S> {
    lookup: L,
    vocabulary: Vocabulary<S>,
    definitions_shown: usize,
    min_quiz_words: usize,
    /// Result of the last successful lookup, the word `save` stores
    current: Option<WordRecord>,
    show_vocabulary: bool,
    quiz: Option<QuizSession>,
    rng: StdRng,
}

impl<L: Lookup, S: KeyValueStore> Controller<L, S> {
    pub fn new(lookup: L, vocabulary: Vocabulary<S>, config: &Config) -> Self {
        Self {
            lookup,
            vocabulary,
            definitions_shown: config.definitions_shown,
            min_quiz_words: config.min_quiz_words,
            current: None,
            show_vocabulary: false,
            quiz: None,
            rng: StdRng::from_entropy(),
        }
    }

    pub async fn search(&mut self, input: &str) -> Result<View, AppError> {
        let word = input.trim().to_lowercase();
        if word.is_empty() {
            return Err(AppError::EmptyWord);
        }
        let record = match self.lookup.lookup(&word).await {
            Ok(record) => record,
            Err(error) => {
                self.current = None;
                return Err(error.into());
            }
        };
        let saved = self.vocabulary.contains(&record.word).await?;
        let view = lookup_view(&record, saved, self.definitions_shown);
        self.current = Some(record);
        Ok(View::Lookup(view))
    }

    pub async fn save_current(&mut self) -> Result<View, AppError> {
        let record = self.current.clone().ok_or(AppError::NothingToSave)?;
        let word = record.word.clone();
        self.vocabulary.save(record).await?;
        Ok(View::Notice(Notice::Saved(word)))
    }

    pub async fn remove(
        &mut self,
        word: &str,
        confirm: &mut impl Confirm,
    ) -> Result<View, AppError> {
        let word = word.trim();
        if word.is_empty() {
            return Err(AppError::EmptyWord);
        }
        if !self.vocabulary.contains(word).await? {
            return Ok(View::Notice(Notice::NotSaved(word.to_owned())));
        }
        if !confirm.confirm(&format!("Remove \"{word}\" from your vocabulary?")) {
            return Ok(View::Notice(Notice::Cancelled));
        }
        let notice = if self.vocabulary.remove(word).await? {
            Notice::Removed(word.to_owned())
        } else {
            Notice::NotSaved(word.to_owned())
        };
        Ok(View::Notice(notice))
    }

    pub async fn clear(&mut self, confirm: &mut impl Confirm) -> Result<View, AppError> {
        if !confirm.confirm("Remove every saved word?") {
            return Ok(View::Notice(Notice::Cancelled));
        }
        self.vocabulary.clear().await?;
        Ok(View::Notice(Notice::Cleared))
    }

    pub async fn toggle_vocabulary(&mut self) -> Result<View, AppError> {
        self.show_vocabulary = !self.show_vocabulary;
        if self.show_vocabulary {
            self.list_view().await
        } else {
            Ok(View::Notice(Notice::VocabularyHidden))
        }
    }

    async fn list_view(&self) -> Result<View, AppError> {
        let words = self.vocabulary.list().await?;
        Ok(View::Vocabulary(vocabulary_view(&words, self.min_quiz_words)))
    }

    /// The saved list, if it is currently shown.
    pub async fn visible_vocabulary(&self) -> Result<Option<View>, AppError> {
        if !self.show_vocabulary {
            return Ok(None);
        }
        self.list_view().await.map(Some)
    }

    /// Starts a new quiz, dropping any quiz in progress.
    pub async fn start_quiz(&mut self) -> Result<View, AppError> {
        let words = self.vocabulary.list().await?;
        let mut session = QuizSession::new(self.min_quiz_words);
        let question = session.start(&words, &mut self.rng)?;
        tracing::info!(words = words.len(), "quiz started");
        self.show_vocabulary = false;
        let view = question_view(&question, session.score());
        self.quiz = Some(session);
        Ok(View::Question(view))
    }

    pub fn answer(&mut self, answer: &str) -> Result<View, AppError> {
        let session = self.quiz.as_mut().ok_or(AppError::NoQuiz)?;
        let outcome = session.submit(answer)?;
        Ok(View::Result(result_view(&outcome)))
    }

    pub async fn next_question(&mut self) -> Result<View, AppError> {
        let words = self.vocabulary.list().await?;
        let session = self.quiz.as_mut().ok_or(AppError::NoQuiz)?;
        let question = session.next(&words, &mut self.rng)?;
        Ok(View::Question(question_view(&question, session.score())))
    }

    pub fn end_quiz(&mut self) -> Result<View, AppError> {
        let mut session = self.quiz.take().ok_or(AppError::NoQuiz)?;
        let summary = session.end();
        tracing::info!(
            correct = summary.correct,
            total = summary.total,
            accuracy = summary.accuracy,
            "quiz ended"
        );
        Ok(View::Summary(summary))
    }
}
