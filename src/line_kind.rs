//! Line classification for quiz Markdown.
//!
//! Every line of a quiz document is one of four things: blank, an option of
//! the current question (`A)`, `- b.`, `C:` ...), the answer-key header
//! (`**Answers:**`, `Svarnøkkel`), or the start of a new question. Only the
//! letters A to D are option markers.
//!
//! The Norwegian header is also accepted in its double-encoded form
//! `SvarnÃ¸kkel` (UTF-8 read back as Latin-1), which generated answer keys
//! sometimes carry.

use regex::Regex;
use std::sync::LazyLock;

static ANSWER_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(\*\*\s*)?(Answers|Svarnøkkel|SvarnÃ¸kkel)\s*:?\s*(\*\*)?$").expect("valid pattern")
});

static OPTION_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*-)?\s*[A-Da-d][).:]\s*").expect("valid pattern"));

static ORDINAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.\s*").expect("valid pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Blank,
    AnswerHeader,
    /// Option text with the letter marker removed.
    OptionLine(&'a str),
    /// Prompt text with ordinal and emphasis removed.
    QuestionStart(&'a str),
}

/// Classify a single line. Checks run in order and the first match wins.
pub fn classify(line: &str) -> LineKind<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        LineKind::Blank
    } else if let Some(text) = option_text(trimmed) {
        LineKind::OptionLine(text)
    } else if is_answer_header(trimmed) {
        LineKind::AnswerHeader
    } else {
        LineKind::QuestionStart(question_text(trimmed))
    }
}

pub fn is_answer_header(line: &str) -> bool {
    ANSWER_HEADER.is_match(line.trim())
}

/// The text after an option marker, or `None` if `line` is not an option line.
pub fn option_text(line: &str) -> Option<&str> {
    OPTION_MARKER.find(line).map(|m| line[m.end()..].trim())
}

/// Strip a leading `12.` style ordinal and the whitespace after it.
pub fn strip_ordinal(line: &str) -> &str {
    match ORDINAL.find(line) {
        Some(m) => &line[m.end()..],
        None => line,
    }
}

fn question_text(line: &str) -> &str {
    let text = strip_ordinal(line);
    let text = text.strip_prefix("**").unwrap_or(text);
    let text = text.strip_suffix("**").unwrap_or(text);
    let text = text.strip_prefix("__").unwrap_or(text);
    let text = text.strip_suffix("__").unwrap_or(text);
    text.trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_markers() {
        assert_eq!(classify("A) Red"), LineKind::OptionLine("Red"));
        assert_eq!(classify("  - b. Green "), LineKind::OptionLine("Green"));
        assert_eq!(classify("-C:Blue"), LineKind::OptionLine("Blue"));
        assert_eq!(classify("d)"), LineKind::OptionLine(""));
        // E is not an option letter
        assert_eq!(classify("E) Purple"), LineKind::QuestionStart("E) Purple"));
        // a letter without delimiter is ordinary text
        assert_eq!(classify("Also consider"), LineKind::QuestionStart("Also consider"));
    }

    #[test]
    fn answer_headers() {
        for line in [
            "Answers",
            "answers:",
            "**Answers:**",
            "** Answers **",
            "  SVARNØKKEL: ",
            "Svarnøkkel",
            "SvarnÃ¸kkel:",
            "**svarnÃ¸kkel**",
        ] {
            assert_eq!(classify(line), LineKind::AnswerHeader, "{line:?}");
        }
        assert!(!is_answer_header("Answers to the exercises"));
        assert!(!is_answer_header("## Answers"));
    }

    #[test]
    fn question_prompts() {
        assert_eq!(
            classify("**What is TCP?**"),
            LineKind::QuestionStart("What is TCP?")
        );
        assert_eq!(
            classify("3. __Define latency__\r"),
            LineKind::QuestionStart("Define latency")
        );
        assert_eq!(
            classify("12.What is UDP?"),
            LineKind::QuestionStart("What is UDP?")
        );
        // only one layer of emphasis is removed
        assert_eq!(classify("****"), LineKind::QuestionStart(""));
        assert_eq!(classify("***x***"), LineKind::QuestionStart("*x*"));
        assert_eq!(classify("   \t\r"), LineKind::Blank);
    }

    #[test]
    fn ordinal_needs_digits_and_dot() {
        assert_eq!(strip_ordinal("1. b"), "b");
        assert_eq!(strip_ordinal("1) b"), "1) b");
        assert_eq!(strip_ordinal(". b"), ". b");
    }
}
