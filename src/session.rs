use crate::error::{ParseError, Result};
use crate::model::{QuizQuestion, StudyKind, StudySession};
use crate::parser::parse_quiz_document;
use crate::study::{FlashcardDeck, QuizRun};
use serde_json::Value;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// What a study page shows for a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StudyView {
    Quiz(QuizRun),
    Flashcards(FlashcardDeck),
    Summary(String),
    Empty,
}

/// Decode a session store response. The store answers row queries with a
/// JSON array; only the first row is used. An empty array yields `None`.
pub fn parse_session_response<R: Read>(mut r: R) -> Result<Option<StudySession>> {
    let mut s = String::new();
    r.read_to_string(&mut s)?;
    let v: Value = serde_json::from_str(&s)?;
    let rows = match v {
        Value::Array(rows) => rows,
        other => {
            return Err(ParseError::Unexpected(format!(
                "session response is not an array: {}",
                json_type_name(&other)
            )));
        }
    };
    match rows.into_iter().next() {
        Some(row) => Ok(Some(serde_json::from_value(row)?)),
        None => Ok(None),
    }
}

pub fn parse_session_from_file(path: &Path) -> Result<Option<StudySession>> {
    let f = File::open(path)?;
    parse_session_response(f)
}

fn json_type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl StudySession {
    /// Quiz questions for this session: the stored structured list if there is
    /// one, otherwise whatever can be parsed out of the raw result text.
    pub fn quiz_questions(&self) -> Vec<QuizQuestion> {
        if let Some(questions) = &self.questions {
            return questions.clone();
        }
        match self.result.as_ref().and_then(|r| r.text.as_deref()) {
            Some(text) => {
                debug!("no structured questions, parsing result text");
                parse_quiz_document(text)
            }
            None => Vec::new(),
        }
    }

    pub fn display_title(&self, kind: StudyKind) -> String {
        match self.title.as_deref() {
            Some(t) if !t.is_empty() => t.to_string(),
            _ => kind.as_str().to_uppercase(),
        }
    }

    pub fn view(&self, kind: StudyKind) -> StudyView {
        match kind {
            StudyKind::Quiz => QuizRun::new(self.quiz_questions())
                .map(StudyView::Quiz)
                .unwrap_or(StudyView::Empty),
            StudyKind::Flashcards => FlashcardDeck::new(self.flashcards.clone())
                .map(StudyView::Flashcards)
                .unwrap_or(StudyView::Empty),
            StudyKind::Summarize => match &self.summary {
                Some(s) if !s.is_empty() => StudyView::Summary(s.clone()),
                _ => StudyView::Empty,
            },
        }
    }
}
