use dictionary::WordRecord;
use rand::{seq::SliceRandom, Rng};

pub const MIN_QUIZ_WORDS: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuizError {
    #[error("A quiz needs at least {required} saved words, you have {available}.")]
    InsufficientVocabulary { required: usize, available: usize },
    #[error("Can't {action} right now.")]
    InvalidPhase { action: &'static str },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub correct: u32,
    pub total: u32,
}

impl Score {
    /// Percentage of correct answers rounded to the nearest integer, 0 before any answer.
    pub fn accuracy(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (f64::from(self.correct) * 100.0 / f64::from(self.total)).round() as u32
    }
}

/// Prompt for one round: the definition is shown, the headword is expected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub word: String,
    pub part_of_speech: String,
    pub definition: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub expected: String,
    pub given: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizSummary {
    pub correct: u32,
    pub total: u32,
    pub accuracy: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizPhase {
    Idle,
    AwaitingAnswer(Question),
    ShowingResult,
    Ended(QuizSummary),
}

/// One quiz run. Build a new session for every quiz.
#[derive(Debug)]
pub struct QuizSession {
    phase: QuizPhase,
    score: Score,
    min_words: usize,
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new(MIN_QUIZ_WORDS)
    }
}

impl QuizSession {
    pub fn new(min_words: usize) -> Self {
        Self {
            phase: QuizPhase::Idle,
            score: Score::default(),
            min_words: min_words.max(MIN_QUIZ_WORDS),
        }
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn start<R: Rng + ?Sized>(
        &mut self,
        words: &[WordRecord],
        rng: &mut R,
    ) -> Result<Question, QuizError> {
        if self.phase != QuizPhase::Idle {
            return Err(QuizError::InvalidPhase {
                action: "start a quiz",
            });
        }
        self.ask(words, rng)
    }

    pub fn submit(&mut self, answer: &str) -> Result<AnswerOutcome, QuizError> {
        let QuizPhase::AwaitingAnswer(question) = &self.phase else {
            return Err(QuizError::InvalidPhase {
                action: "answer",
            });
        };
        let given = answer.trim().to_lowercase();
        let correct = given == question.word.to_lowercase();
        let outcome = AnswerOutcome {
            correct,
            expected: question.word.clone(),
            given,
        };
        self.score.total += 1;
        if correct {
            self.score.correct += 1;
        }
        tracing::debug!(word = %outcome.expected, correct, "answer checked");
        self.phase = QuizPhase::ShowingResult;
        Ok(outcome)
    }

    pub fn next<R: Rng + ?Sized>(
        &mut self,
        words: &[WordRecord],
        rng: &mut R,
    ) -> Result<Question, QuizError> {
        if self.phase != QuizPhase::ShowingResult {
            return Err(QuizError::InvalidPhase {
                action: "move to the next question",
            });
        }
        self.ask(words, rng)
    }

    /// Ends the quiz; ending again reports the same summary.
    pub fn end(&mut self) -> QuizSummary {
        if let QuizPhase::Ended(summary) = self.phase {
            return summary;
        }
        let summary = QuizSummary {
            correct: self.score.correct,
            total: self.score.total,
            accuracy: self.score.accuracy(),
        };
        self.phase = QuizPhase::Ended(summary);
        summary
    }

    fn ask<R: Rng + ?Sized>(
        &mut self,
        words: &[WordRecord],
        rng: &mut R,
    ) -> Result<Question, QuizError> {
        let candidates = words
            .iter()
            .filter_map(|record| {
                let (meaning, definition) = record.first_definition()?;
                Some(Question {
                    word: record.word.clone(),
                    part_of_speech: meaning.part_of_speech.clone(),
                    definition: definition.definition.clone(),
                })
            })
            .collect::<Vec<Question>>();
        // only words with a definition can be asked
        if candidates.len() < self.min_words {
            return Err(QuizError::InsufficientVocabulary {
                required: self.min_words,
                available: candidates.len(),
            });
        }
        let question = candidates
            .choose(rng)
            .cloned()
            .ok_or(QuizError::InsufficientVocabulary {
                required: self.min_words,
                available: 0,
            })?;
        self.phase = QuizPhase::AwaitingAnswer(question.clone());
        Ok(question)
    }
}
