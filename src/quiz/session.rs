//! Quiz progress for one page load.
//!
//! The session is deliberately free of any browser types: the page component
//! owns it, feeds it user actions and performs the side effects (pixel events,
//! sounds, timers) based on what each transition reports back.

use super::pricing;
use super::questions::Question;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Intro,
    InProgress,
    Completed,
}

/// An answer the session accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Answered {
    /// 1-based, as shown to the user and reported to the pixel.
    pub question_number: usize,
    pub total_questions: usize,
    pub discount: u32,
}

/// Result of moving past an accepted answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Next { index: usize },
    Completed { discount: u32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuizSession {
    questions: &'static [Question],
    screen: Screen,
    current: usize,
    answered: usize,
    selected: Option<usize>,
    processing: bool,
}

impl QuizSession {
    pub fn new(questions: &'static [Question]) -> Self {
        Self {
            questions,
            screen: Screen::Intro,
            current: 0,
            answered: 0,
            selected: None,
            processing: false,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_question(&self) -> Option<&'static Question> {
        match self.screen {
            Screen::InProgress => self.questions.get(self.current),
            _ => None,
        }
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn answered(&self) -> usize {
        self.answered
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_processing(&self) -> bool {
        self.processing
    }

    pub fn can_submit(&self) -> bool {
        self.screen == Screen::InProgress && self.selected.is_some() && !self.processing
    }

    pub fn discount(&self) -> u32 {
        pricing::discount_for(self.answered)
    }

    pub fn max_discount(&self) -> u32 {
        pricing::max_discount(self.questions.len())
    }

    pub fn final_price(&self) -> u32 {
        pricing::final_price(self.discount())
    }

    /// Intro -> InProgress. Returns false when the quiz was already started
    /// or there is nothing to ask.
    pub fn start(&mut self) -> bool {
        if self.screen != Screen::Intro || self.questions.is_empty() {
            return false;
        }
        self.screen = Screen::InProgress;
        true
    }

    pub fn select(&mut self, option: usize) -> bool {
        if self.processing {
            return false;
        }
        match self.current_question() {
            Some(question) if option < question.options.len() => {
                self.selected = Some(option);
                true
            }
            _ => false,
        }
    }

    /// Accepts the selected option. Every answer earns the discount unit,
    /// whether or not it matches the nominal correct option.
    ///
    /// Returns `None` without touching state when nothing is selected or an
    /// earlier submission is still waiting for [`QuizSession::advance`].
    pub fn submit(&mut self) -> Option<Answered> {
        if !self.can_submit() {
            return None;
        }
        self.processing = true;
        self.answered += 1;
        Some(Answered {
            question_number: self.current + 1,
            total_questions: self.questions.len(),
            discount: self.discount(),
        })
    }

    /// Moves past the answer accepted by the last [`QuizSession::submit`].
    pub fn advance(&mut self) -> Option<Advance> {
        if self.screen != Screen::InProgress || !self.processing {
            return None;
        }
        self.processing = false;
        self.selected = None;
        if self.current + 1 < self.questions.len() {
            self.current += 1;
            Some(Advance::Next { index: self.current })
        } else {
            self.screen = Screen::Completed;
            Some(Advance::Completed { discount: self.discount() })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::pricing::{DISCOUNT_UNIT_CENTS, FLOOR_PRICE_CENTS, ORIGINAL_PRICE_CENTS};
    use crate::quiz::questions::QUESTIONS;

    const TWO: &[Question] = &[
        Question { id: 1, prompt: "a?", options: &["x", "y"], correct: 1, explanation: "" },
        Question { id: 2, prompt: "b?", options: &["x", "y", "z"], correct: 2, explanation: "" },
    ];

    fn answer(session: &mut QuizSession, option: usize) -> Option<Advance> {
        assert!(session.select(option));
        session.submit().expect("answer accepted");
        session.advance()
    }

    #[test]
    fn starts_on_intro_with_no_progress() {
        let session = QuizSession::new(QUESTIONS);
        assert_eq!(session.screen(), Screen::Intro);
        assert_eq!(session.discount(), 0);
        assert!(session.current_question().is_none());
    }

    #[test]
    fn start_only_leaves_intro_once() {
        let mut session = QuizSession::new(QUESTIONS);
        assert!(session.start());
        assert!(!session.start());
        assert_eq!(session.screen(), Screen::InProgress);
        assert_eq!(session.current_question().map(|q| q.id), Some(1));
    }

    #[test]
    fn empty_quiz_cannot_start() {
        let mut session = QuizSession::new(&[]);
        assert!(!session.start());
        assert_eq!(session.screen(), Screen::Intro);
    }

    #[test]
    fn submit_without_selection_is_a_no_op() {
        let mut session = QuizSession::new(QUESTIONS);
        session.start();
        let before = session.clone();
        assert_eq!(session.submit(), None);
        assert_eq!(session, before);
    }

    #[test]
    fn select_rejects_out_of_range_and_pre_start() {
        let mut session = QuizSession::new(TWO);
        assert!(!session.select(0));
        session.start();
        assert!(!session.select(2));
        assert!(session.select(1));
        assert_eq!(session.selected(), Some(1));
    }

    #[test]
    fn double_submit_does_not_double_count() {
        let mut session = QuizSession::new(QUESTIONS);
        session.start();
        session.select(2);
        let first = session.submit();
        assert_eq!(first.map(|a| a.discount), Some(DISCOUNT_UNIT_CENTS));
        assert_eq!(session.submit(), None);
        assert!(!session.select(1));
        assert_eq!(session.discount(), DISCOUNT_UNIT_CENTS);
        assert_eq!(session.answered(), 1);
    }

    #[test]
    fn advance_requires_an_accepted_answer() {
        let mut session = QuizSession::new(QUESTIONS);
        session.start();
        assert_eq!(session.advance(), None);
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn advance_clears_selection_and_guard() {
        let mut session = QuizSession::new(QUESTIONS);
        session.start();
        assert_eq!(answer(&mut session, 0), Some(Advance::Next { index: 1 }));
        assert_eq!(session.selected(), None);
        assert!(!session.is_processing());
        assert!(!session.can_submit());
    }

    #[test]
    fn any_option_earns_the_unit() {
        for option in 0..4 {
            let mut session = QuizSession::new(QUESTIONS);
            session.start();
            for _ in 0..QUESTIONS.len() {
                answer(&mut session, option);
            }
            assert_eq!(session.discount(), QUESTIONS.len() as u32 * DISCOUNT_UNIT_CENTS);
        }
    }

    #[test]
    fn discount_tracks_answered_count() {
        let mut session = QuizSession::new(QUESTIONS);
        session.start();
        for n in 1..=QUESTIONS.len() {
            answer(&mut session, n % 4);
            assert_eq!(session.discount(), n as u32 * DISCOUNT_UNIT_CENTS);
            assert_eq!(session.answered(), n);
        }
    }

    #[test]
    fn four_questions_complete_with_hundred_off() {
        let mut session = QuizSession::new(QUESTIONS);
        session.start();
        let mut last = None;
        for _ in 0..QUESTIONS.len() {
            last = answer(&mut session, 1);
        }
        assert_eq!(last, Some(Advance::Completed { discount: 10_000 }));
        assert_eq!(session.screen(), Screen::Completed);
        assert_eq!(session.discount(), session.max_discount());
        assert_eq!(
            session.final_price(),
            ORIGINAL_PRICE_CENTS.saturating_sub(10_000).max(FLOOR_PRICE_CENTS)
        );
    }

    #[test]
    fn completed_is_terminal() {
        let mut session = QuizSession::new(TWO);
        session.start();
        answer(&mut session, 0);
        answer(&mut session, 0);
        assert_eq!(session.screen(), Screen::Completed);

        assert!(!session.start());
        assert!(!session.select(0));
        assert_eq!(session.submit(), None);
        assert_eq!(session.advance(), None);
        assert_eq!(session.screen(), Screen::Completed);
        assert_eq!(session.discount(), 2 * DISCOUNT_UNIT_CENTS);
    }

    #[test]
    fn index_stays_in_bounds() {
        let mut session = QuizSession::new(TWO);
        session.start();
        while session.screen() == Screen::InProgress {
            assert!(session.current_index() < session.question_count());
            answer(&mut session, 0);
        }
        assert!(session.answered() <= session.question_count());
    }

    #[test]
    fn answered_reports_position() {
        let mut session = QuizSession::new(TWO);
        session.start();
        session.select(0);
        let answered = session.submit().expect("accepted");
        assert_eq!(answered.question_number, 1);
        assert_eq!(answered.total_questions, 2);
    }
}
