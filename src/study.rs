//! Walk-throughs for a study session: one question or card at a time.

use crate::model::{Flashcard, QuizQuestion};
use serde::Serialize;

/// Outcome of checking the selected option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub correct: bool,
    pub correct_index: Option<usize>,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizRun {
    questions: Vec<QuizQuestion>,
    current: usize,
    selected: Option<usize>,
    revealed: bool,
}

impl QuizRun {
    /// `None` for an empty question list.
    pub fn new(questions: Vec<QuizQuestion>) -> Option<Self> {
        if questions.is_empty() {
            return None;
        }
        Some(QuizRun {
            questions,
            current: 0,
            selected: None,
            revealed: false,
        })
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn current_question(&self) -> &QuizQuestion {
        &self.questions[self.current]
    }

    /// One-based position and total, as in "Question 2 of 5".
    pub fn position(&self) -> (usize, usize) {
        (self.current + 1, self.questions.len())
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 == self.questions.len()
    }

    /// Select an option of the current question. Locked once revealed.
    pub fn select(&mut self, index: usize) -> bool {
        if self.revealed || index >= self.current_question().options.len() {
            return false;
        }
        self.selected = Some(index);
        true
    }

    /// Reveal the answer for the current selection.
    pub fn check(&mut self) -> Option<Verdict> {
        let selected = self.selected?;
        self.revealed = true;
        let q = self.current_question();
        let correct_index = q.correct_option_index();
        Some(Verdict {
            correct: correct_index == Some(selected),
            correct_index,
            answer: q.answer.clone(),
        })
    }

    /// Move to the next question after the current one was checked.
    pub fn next(&mut self) -> bool {
        if !self.revealed || self.is_last() {
            return false;
        }
        self.current += 1;
        self.selected = None;
        self.revealed = false;
        true
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashcardDeck {
    cards: Vec<Flashcard>,
    current: usize,
    show_back: bool,
}

impl FlashcardDeck {
    /// `None` for an empty deck.
    pub fn new(cards: Vec<Flashcard>) -> Option<Self> {
        if cards.is_empty() {
            return None;
        }
        Some(FlashcardDeck {
            cards,
            current: 0,
            show_back: false,
        })
    }

    pub fn current_card(&self) -> &Flashcard {
        &self.cards[self.current]
    }

    pub fn position(&self) -> (usize, usize) {
        (self.current + 1, self.cards.len())
    }

    pub fn face(&self) -> &str {
        let card = self.current_card();
        if self.show_back { &card.back } else { &card.front }
    }

    pub fn is_showing_back(&self) -> bool {
        self.show_back
    }

    pub fn flip(&mut self) {
        self.show_back = !self.show_back;
    }

    pub fn next(&mut self) -> bool {
        if self.current + 1 >= self.cards.len() {
            return false;
        }
        self.current += 1;
        self.show_back = false;
        true
    }

    pub fn previous(&mut self) -> bool {
        if self.current == 0 {
            return false;
        }
        self.current -= 1;
        self.show_back = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_questions() -> Vec<QuizQuestion> {
        vec![
            QuizQuestion::new("2+2?", vec!["3".into(), "4".into()], "b)"),
            QuizQuestion::new("Sky colour?", vec!["Blue".into(), "Green".into()], "Blue"),
        ]
    }

    #[test]
    fn empty_inputs_have_no_run() {
        assert!(QuizRun::new(vec![]).is_none());
        assert!(FlashcardDeck::new(vec![]).is_none());
    }

    #[test]
    fn quiz_walkthrough() {
        let mut run = QuizRun::new(two_questions()).expect("run");
        assert_eq!(run.position(), (1, 2));
        assert_eq!(run.check(), None);
        assert!(!run.next());

        assert!(!run.select(2));
        assert!(run.select(0));
        let verdict = run.check().expect("verdict");
        assert!(!verdict.correct);
        assert_eq!(verdict.correct_index, Some(1));
        assert_eq!(verdict.answer, "b)");
        // locked after reveal
        assert!(!run.select(1));
        assert_eq!(run.selected(), Some(0));

        assert!(run.next());
        assert_eq!(run.position(), (2, 2));
        assert_eq!(run.selected(), None);
        assert!(!run.is_revealed());
        assert!(run.select(0));
        assert!(run.check().expect("verdict").correct);
        assert!(run.is_last());
        assert!(!run.next());
        assert_eq!(run.position(), (2, 2));
    }

    #[test]
    fn unresolved_answer_is_never_correct() {
        let q = QuizQuestion::new("?", vec!["x".into()], "Purple");
        let mut run = QuizRun::new(vec![q]).expect("run");
        run.select(0);
        let verdict = run.check().expect("verdict");
        assert!(!verdict.correct);
        assert_eq!(verdict.correct_index, None);
    }

    #[test]
    fn option_less_question_cannot_be_answered() {
        let q = QuizQuestion::new("Explain DNS", vec![], "");
        let mut run = QuizRun::new(vec![q]).expect("run");
        assert!(!run.select(0));
        assert_eq!(run.check(), None);
    }

    #[test]
    fn deck_walkthrough() {
        let cards = vec![
            Flashcard { front: "CPU".into(), back: "Central processing unit".into() },
            Flashcard { front: "GPU".into(), back: "Graphics processing unit".into() },
        ];
        let mut deck = FlashcardDeck::new(cards).expect("deck");
        assert_eq!(deck.face(), "CPU");
        assert!(!deck.previous());
        deck.flip();
        assert_eq!(deck.face(), "Central processing unit");
        assert!(deck.next());
        assert_eq!(deck.face(), "GPU");
        assert!(!deck.is_showing_back());
        assert!(!deck.next());
        deck.flip();
        assert!(deck.previous());
        assert_eq!(deck.face(), "CPU");
        assert_eq!(deck.position(), (1, 2));
    }
}
