use std::fmt;

use dictionary::WordRecord;

use crate::quiz::{AnswerOutcome, Question, QuizSummary, Score};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupView {
    pub word: String,
    pub phonetic: Option<String>,
    pub meanings: Vec<MeaningView>,
    pub saved: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeaningView {
    pub part_of_speech: String,
    pub definitions: Vec<DefinitionView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionView {
    pub definition: String,
    pub example: Option<String>,
}

pub fn lookup_view(record: &WordRecord, saved: bool, definitions_shown: usize) -> LookupView {
    LookupView {
        word: record.word.clone(),
        phonetic: record.phonetic_text().map(str::to_owned),
        meanings: record
            .meanings
            .iter()
            .map(|meaning| MeaningView {
                part_of_speech: meaning.part_of_speech.clone(),
                definitions: meaning
                    .definitions
                    .iter()
                    .take(definitions_shown)
                    .map(|definition| DefinitionView {
                        definition: definition.definition.clone(),
                        example: definition.example.clone(),
                    })
                    .collect(),
            })
            .collect(),
        saved,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizAvailability {
    NoWords,
    NeedsMore { available: usize, required: usize },
    Ready,
}

impl QuizAvailability {
    pub fn for_count(available: usize, required: usize) -> Self {
        match available {
            0 => QuizAvailability::NoWords,
            n if n < required => QuizAvailability::NeedsMore {
                available: n,
                required,
            },
            _ => QuizAvailability::Ready,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabularyEntry {
    pub word: String,
    pub phonetic: Option<String>,
    pub part_of_speech: Option<String>,
    pub definition: Option<String>,
    pub example: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabularyView {
    pub entries: Vec<VocabularyEntry>,
    pub quiz: QuizAvailability,
}

pub fn vocabulary_view(words: &[WordRecord], min_quiz_words: usize) -> VocabularyView {
    let entries = words
        .iter()
        .map(|record| {
            let first = record.first_definition();
            VocabularyEntry {
                word: record.word.clone(),
                phonetic: record.phonetic_text().map(str::to_owned),
                part_of_speech: first.map(|(meaning, _)| meaning.part_of_speech.clone()),
                definition: first.map(|(_, definition)| definition.definition.clone()),
                example: first.and_then(|(_, definition)| definition.example.clone()),
            }
        })
        .collect();
    VocabularyView {
        entries,
        quiz: QuizAvailability::for_count(words.len(), min_quiz_words),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView {
    pub score: Score,
    pub part_of_speech: String,
    pub definition: String,
}

pub fn question_view(question: &Question, score: Score) -> QuestionView {
    QuestionView {
        score,
        part_of_speech: question.part_of_speech.clone(),
        definition: question.definition.clone(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    pub correct: bool,
    pub expected: String,
    /// Left out when nothing was typed
    pub given: Option<String>,
}

pub fn result_view(outcome: &AnswerOutcome) -> ResultView {
    ResultView {
        correct: outcome.correct,
        expected: outcome.expected.clone(),
        given: Some(outcome.given.clone()).filter(|given| !given.is_empty()),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Saved(String),
    Removed(String),
    NotSaved(String),
    Cleared,
    Cancelled,
    VocabularyHidden,
}

/// Everything the controller can hand back to be drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Lookup(LookupView),
    Vocabulary(VocabularyView),
    Question(QuestionView),
    Result(ResultView),
    Summary(QuizSummary),
    Notice(Notice),
}

impl fmt::Display for LookupView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.word)?;
        if let Some(phonetic) = &self.phonetic {
            writeln!(f, "  {phonetic}")?;
        }
        for meaning in &self.meanings {
            writeln!(f, "    {}:", meaning.part_of_speech)?;
            for definition in &meaning.definitions {
                writeln!(f, "        • {}", definition.definition)?;
                if let Some(example) = &definition.example {
                    writeln!(f, "          example: {example}")?;
                }
            }
        }
        if self.saved {
            write!(f, "Already saved.")
        } else {
            write!(f, "Type `save` to add it to your vocabulary.")
        }
    }
}

impl fmt::Display for QuizAvailability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizAvailability::NoWords => write!(f, "Quiz: save some words first"),
            QuizAvailability::NeedsMore {
                available,
                required,
            } => write!(f, "Quiz: needs at least {required} words, you have {available}"),
            QuizAvailability::Ready => write!(f, "Quiz: ready, type `quiz` to start"),
        }
    }
}

impl fmt::Display for VocabularyView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.entries.is_empty() {
            writeln!(f, "No saved words.")?;
        }
        for entry in &self.entries {
            write!(f, "{}", entry.word)?;
            if let Some(phonetic) = &entry.phonetic {
                write!(f, "  {phonetic}")?;
            }
            writeln!(f)?;
            if let (Some(part_of_speech), Some(definition)) = (&entry.part_of_speech, &entry.definition) {
                writeln!(f, "    {part_of_speech}: {definition}")?;
            }
            if let Some(example) = &entry.example {
                writeln!(f, "      example: {example}")?;
            }
        }
        write!(f, "{}", self.quiz)
    }
}

impl fmt::Display for QuestionView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Score: {}/{}", self.score.correct, self.score.total)?;
        writeln!(f, "{}", self.part_of_speech)?;
        writeln!(f, "{:?}", self.definition)?;
        write!(f, "Which English word has this meaning?")
    }
}

impl fmt::Display for ResultView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.correct {
            return write!(f, "Correct! {:?}", self.expected);
        }
        write!(f, "Wrong. The answer is {:?}.", self.expected)?;
        if let Some(given) = &self.given {
            write!(f, " You answered {given:?}.")?;
        }
        Ok(())
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Saved(word) => write!(f, "Saved \"{word}\" to your vocabulary."),
            Notice::Removed(word) => write!(f, "Removed \"{word}\"."),
            Notice::NotSaved(word) => write!(f, "\"{word}\" is not saved."),
            Notice::Cleared => write!(f, "Cleared your vocabulary."),
            Notice::Cancelled => write!(f, "Cancelled."),
            Notice::VocabularyHidden => write!(f, "Vocabulary hidden."),
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::Lookup(view) => fmt::Display::fmt(view, f),
            View::Vocabulary(view) => fmt::Display::fmt(view, f),
            View::Question(view) => fmt::Display::fmt(view, f),
            View::Result(view) => fmt::Display::fmt(view, f),
            View::Summary(summary) => write!(
                f,
                "Quiz over! {} of {} correct, accuracy {}%.",
                summary.correct, summary.total, summary.accuracy
            ),
            View::Notice(notice) => fmt::Display::fmt(notice, f),
        }
    }
}
