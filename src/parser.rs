use crate::error::Result;
use crate::line_kind::{LineKind, classify, is_answer_header, strip_ordinal};
use crate::model::QuizQuestion;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

pub fn parse_quiz_from_reader<R: Read>(mut r: R) -> Result<Vec<QuizQuestion>> {
    let mut s = String::new();
    r.read_to_string(&mut s)?;
    Ok(parse_quiz_document(&s))
}

pub fn parse_quiz_from_file(path: &Path) -> Result<Vec<QuizQuestion>> {
    let f = File::open(path)?;
    parse_quiz_from_reader(f)
}

/// Parse a Markdown quiz with an optional trailing answer key.
///
/// Questions are prompt lines followed by `A)`..`D)` option lines. The answer
/// key starts at the first `Answers` / `Svarnøkkel` header and lists one answer
/// per line; the n-th answer belongs to the n-th question. Questions without a
/// matching answer line get an empty answer, surplus answers are dropped.
///
/// Never fails: text that does not fit the format is skipped or ends up as a
/// question without options.
pub fn parse_quiz_document(markdown: &str) -> Vec<QuizQuestion> {
    let markdown = markdown.strip_prefix('\u{feff}').unwrap_or(markdown);
    let lines: Vec<&str> = markdown.split('\n').collect();

    let (question_lines, answer_lines) = match lines.iter().position(|l| is_answer_header(l)) {
        Some(k) => {
            debug!(line = k, "answer key header found");
            (&lines[..k], &lines[k + 1..])
        }
        None => (&lines[..], &lines[lines.len()..]),
    };

    let answers = parse_answer_key(answer_lines);
    let questions = parse_questions(question_lines, &answers);

    if !answers.is_empty() && answers.len() != questions.len() {
        warn!(
            questions = questions.len(),
            answers = answers.len(),
            "answer key does not match question count"
        );
    }
    debug!(
        questions = questions.len(),
        answers = answers.len(),
        "parsed quiz document"
    );
    questions
}

/// Normalise answer-key lines: blank lines are dropped, `1.` ordinals
/// stripped and a bare letter becomes `letter)`.
pub fn parse_answer_key(lines: &[&str]) -> Vec<String> {
    lines
        .iter()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .map(|l| {
            let ans = strip_ordinal(l);
            if is_option_letter(ans) {
                format!("{ans})")
            } else {
                ans.to_string()
            }
        })
        .collect()
}

fn is_option_letter(s: &str) -> bool {
    matches!(s, "A" | "B" | "C" | "D" | "a" | "b" | "c" | "d")
}

fn parse_questions(lines: &[&str], answers: &[String]) -> Vec<QuizQuestion> {
    let mut questions: Vec<QuizQuestion> = Vec::new();
    let mut i = 0;
    while i < lines.len() {
        let prompt = match classify(lines[i]) {
            LineKind::QuestionStart(prompt) => prompt,
            // stray options, blank lines and headers outside a question block
            _ => {
                i += 1;
                continue;
            }
        };
        i += 1;

        let mut options = Vec::new();
        while let Some(LineKind::OptionLine(text)) = lines.get(i).map(|l| classify(l)) {
            options.push(text.to_string());
            i += 1;
        }

        let answer = answers.get(questions.len()).cloned().unwrap_or_default();
        questions.push(QuizQuestion::new(prompt, options, answer));
    }
    questions
}
