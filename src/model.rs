use crate::error::ParseError;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub answer: String,
}

impl QuizQuestion {
    pub fn new(question: impl Into<String>, options: Vec<String>, answer: impl Into<String>) -> Self {
        QuizQuestion {
            question: question.into(),
            options,
            answer: answer.into(),
        }
    }

    /// Index of the option named by `answer`, see [`crate::resolver`].
    pub fn correct_option_index(&self) -> Option<usize> {
        crate::resolver::resolve_correct_option_index(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    pub front: String,
    pub back: String,
}

/// Raw generated output attached to a session when no structured data was stored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionResult {
    #[serde(default, deserialize_with = "string_if_string")]
    pub text: Option<String>,
}

/// One row of the `study_sessions` table as returned by the session store.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StudySession {
    #[serde(rename = "type", default, deserialize_with = "string_or_empty")]
    pub kind: String,
    #[serde(default, deserialize_with = "string_if_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "questions_if_array")]
    pub questions: Option<Vec<QuizQuestion>>,
    #[serde(default, deserialize_with = "string_if_string")]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "flashcards_if_array")]
    pub flashcards: Vec<Flashcard>,
    #[serde(default, deserialize_with = "result_if_object")]
    pub result: Option<SessionResult>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StudyKind {
    Quiz,
    Flashcards,
    Summarize,
}

impl StudyKind {
    pub fn as_str(self) -> &'static str {
        match self {
            StudyKind::Quiz => "quiz",
            StudyKind::Flashcards => "flashcards",
            StudyKind::Summarize => "summarize",
        }
    }
}

impl fmt::Display for StudyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StudyKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "quiz" => Ok(StudyKind::Quiz),
            "flashcards" => Ok(StudyKind::Flashcards),
            "summarize" => Ok(StudyKind::Summarize),
            other => Err(ParseError::UnknownStudyKind(other.to_string())),
        }
    }
}

// The store holds loosely typed JSON; a field only counts when it has the
// expected shape, anything else reads as absent.

fn questions_if_array<'de, D>(deserializer: D) -> Result<Option<Vec<QuizQuestion>>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = serde_json::Value::deserialize(deserializer)?;
    match v {
        serde_json::Value::Array(_) => serde_json::from_value(v)
            .map(Some)
            .map_err(de::Error::custom),
        _ => Ok(None),
    }
}

fn flashcards_if_array<'de, D>(deserializer: D) -> Result<Vec<Flashcard>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = serde_json::Value::deserialize(deserializer)?;
    match v {
        serde_json::Value::Array(_) => serde_json::from_value(v).map_err(de::Error::custom),
        _ => Ok(Vec::new()),
    }
}

fn result_if_object<'de, D>(deserializer: D) -> Result<Option<SessionResult>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = serde_json::Value::deserialize(deserializer)?;
    match v {
        serde_json::Value::Object(_) => serde_json::from_value(v)
            .map(Some)
            .map_err(de::Error::custom),
        _ => Ok(None),
    }
}

fn string_if_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = serde_json::Value::deserialize(deserializer)?;
    match v {
        serde_json::Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}

fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    string_if_string(deserializer).map(Option::unwrap_or_default)
}
