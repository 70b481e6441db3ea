//! study_quiz — structured quizzes and flashcards from generated study material
//!
//! The study assistant's AI service answers quiz requests with loosely
//! formatted Markdown: numbered prompts, `A)`..`D)` option lines and an
//! `Answers:` key at the end. This crate turns that text into
//! [`QuizQuestion`]s, resolves each stated answer to an option index, and
//! decodes the session store's records (structured or raw) into quiz and
//! flashcard walk-throughs.
//!
//! Basic example:
//!
//! ```rust
//! use study_quiz::parse_quiz_document;
//!
//! let quiz = parse_quiz_document("1. **What is TCP?**\nA) A protocol\nB) A fruit\n\nAnswers:\n1. A");
//! assert_eq!(quiz[0].question, "What is TCP?");
//! assert_eq!(quiz[0].correct_option_index(), Some(0));
//! ```

pub mod error;
pub mod line_kind;
pub mod model;
pub mod parser;
pub mod resolver;
pub mod session;
pub mod study;

pub use crate::error::*;
pub use crate::model::*;
pub use crate::parser::{parse_quiz_document, parse_quiz_from_file, parse_quiz_from_reader};
pub use crate::resolver::resolve_correct_option_index;
pub use crate::session::{StudyView, parse_session_from_file, parse_session_response};
pub use crate::study::{FlashcardDeck, QuizRun, Verdict};
