use crate::model::QuizQuestion;

/// Find which option a question's `answer` points at.
///
/// Tried in order:
/// - `answer` starts with `a)`..`d)` (any case): that letter's position;
/// - `answer` is just a letter `a`..`d`: that letter's position;
/// - otherwise the answer text (minus an `x)` prefix) compared against each
///   option, trimmed and case-insensitive.
///
/// A letter pointing past the last option falls through to the next rule.
/// Returns `None` when nothing matches.
pub fn resolve_correct_option_index(q: &QuizQuestion) -> Option<usize> {
    if let Some(idx) = letter_prefix(&q.answer).and_then(letter_index) {
        if idx < q.options.len() {
            return Some(idx);
        }
    }

    let single = q.answer.trim().to_lowercase();
    if let Some(idx) = single.chars().next().filter(|_| single.len() == 1).and_then(letter_index) {
        if idx < q.options.len() {
            return Some(idx);
        }
    }

    let answer_text = strip_letter_prefix(&q.answer).trim().to_lowercase();
    q.options
        .iter()
        .position(|opt| opt.trim().to_lowercase() == answer_text)
}

/// The letter of an `x)` prefix.
fn letter_prefix(answer: &str) -> Option<char> {
    let mut chars = answer.chars();
    let letter = chars.next()?;
    (chars.next() == Some(')')).then_some(letter)
}

fn strip_letter_prefix(answer: &str) -> &str {
    match letter_prefix(answer).and_then(letter_index) {
        // both the letter and ')' are ASCII
        Some(_) => answer[2..].trim_start(),
        None => answer,
    }
}

fn letter_index(c: char) -> Option<usize> {
    match c.to_ascii_lowercase() {
        'a' => Some(0),
        'b' => Some(1),
        'c' => Some(2),
        'd' => Some(3),
        _ => None,
    }
}
