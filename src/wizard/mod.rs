//! The validation wizard state machine.
//!
//! A [`Wizard`] owns one session: the user's idea, the answers collected so
//! far, and the computed score. It moves through three screens:
//!
//! ```text
//! [Input] --submit_idea(non-empty)--> [Validation, index=0]
//! [Validation, index<4] --submit_answer(non-empty)--> [Validation, index+1]
//! [Validation, index=4] --submit_answer(non-empty)--> [Results, score computed]
//! [any] --reset()--> [Input]
//! ```
//!
//! Empty (after trimming) input to either submit operation is a silent
//! no-op; that guarded-input contract is deliberate and callers should
//! re-read state rather than expect an error.

pub mod reveal;

use std::time::Duration;

use tracing::debug;

use crate::questions::{questions, Answers, Question};
use crate::scoring;

use reveal::RevealTimer;

/// Delay before the email-capture prompt is revealed on the results screen.
pub const REVEAL_DELAY: Duration = Duration::from_millis(2000);

/// Minimum score that makes a session eligible for email capture.
pub const EMAIL_CAPTURE_THRESHOLD: u8 = 40;

/// Current screen of the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Step {
    /// Collecting the idea text.
    #[default]
    Input,
    /// Walking through the five validation questions.
    Validation,
    /// Showing the computed score.
    Results,
}

/// One interactive validation session.
///
/// Exclusively owns its state; rendering layers read snapshots through the
/// accessor methods and feed user actions into [`Wizard::submit_idea`],
/// [`Wizard::submit_answer`], and [`Wizard::reset`].
#[derive(Debug)]
pub struct Wizard {
    step: Step,
    idea: String,
    current_index: usize,
    answers: Answers,
    score: Option<u8>,
    reveal_delay: Duration,
    reveal: Option<RevealTimer>,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    /// Create a fresh session at the Input step.
    pub fn new() -> Self {
        Self::with_reveal_delay(REVEAL_DELAY)
    }

    /// Create a session with a custom email-capture reveal delay.
    ///
    /// Tests use short delays; production code should stick with
    /// [`Wizard::new`].
    pub fn with_reveal_delay(reveal_delay: Duration) -> Self {
        Self {
            step: Step::Input,
            idea: String::new(),
            current_index: 0,
            answers: Answers::new(),
            score: None,
            reveal_delay,
            reveal: None,
        }
    }

    /// Submit the idea text and advance to the validation step.
    ///
    /// No-op unless the session is at the Input step and `text` is non-empty
    /// after trimming. The idea is stored as provided, untrimmed.
    pub fn submit_idea(&mut self, text: &str) {
        if self.step != Step::Input || text.trim().is_empty() {
            debug!(step = ?self.step, "ignoring idea submission");
            return;
        }
        self.idea = text.to_string();
        self.current_index = 0;
        self.step = Step::Validation;
        debug!("idea accepted, entering validation");
    }

    /// Submit an answer for the current question.
    ///
    /// No-op unless the session is at the Validation step and `text` is
    /// non-empty after trimming. The answer is stored as provided, untrimmed.
    /// The final answer triggers scoring and the transition to Results; a
    /// score at or above [`EMAIL_CAPTURE_THRESHOLD`] arms the reveal timer.
    pub fn submit_answer(&mut self, text: &str) {
        if self.step != Step::Validation || text.trim().is_empty() {
            debug!(step = ?self.step, "ignoring answer submission");
            return;
        }

        let question = &questions()[self.current_index];
        self.answers.insert(question.id, text.to_string());

        if self.current_index + 1 < questions().len() {
            self.current_index += 1;
            debug!(index = self.current_index, "advancing to next question");
            return;
        }

        let score = scoring::compute(&self.answers);
        self.score = Some(score);
        self.step = Step::Results;
        debug!(score, "all answers collected");

        if score >= EMAIL_CAPTURE_THRESHOLD {
            self.reveal = Some(RevealTimer::arm(self.reveal_delay));
        }
    }

    /// Restore the session to a fresh Input-step state.
    ///
    /// Always succeeds and is idempotent. Cancels any pending email-capture
    /// reveal, so a timer armed by the previous run never affects the new
    /// session.
    pub fn reset(&mut self) {
        // Dropping the old handle cancels the timer.
        self.reveal = None;
        self.step = Step::Input;
        self.idea.clear();
        self.current_index = 0;
        self.answers = Answers::new();
        self.score = None;
        debug!("session reset");
    }

    /// Current screen.
    pub fn step(&self) -> Step {
        self.step
    }

    /// The submitted idea text (empty at the Input step).
    pub fn idea(&self) -> &str {
        &self.idea
    }

    /// Index of the question currently being asked, in [0, 5).
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The question currently being asked, if the session is validating.
    pub fn current_question(&self) -> Option<&'static Question> {
        match self.step {
            Step::Validation => questions().get(self.current_index),
            _ => None,
        }
    }

    /// Answers collected so far, in question order.
    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    /// The computed score, present only at the Results step.
    pub fn score(&self) -> Option<u8> {
        self.score
    }

    /// Whether the email-capture prompt should be visible.
    ///
    /// True only at the Results step, only for eligible scores, and only
    /// once the reveal delay has elapsed.
    pub fn show_email_capture(&self) -> bool {
        self.step == Step::Results && self.reveal.as_ref().is_some_and(RevealTimer::has_fired)
    }

    /// Whether a reveal timer is armed (eligible score, delay maybe pending).
    pub fn email_capture_pending(&self) -> bool {
        self.step == Step::Results && self.reveal.is_some() && !self.show_email_capture()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questions::QuestionId;
    use std::thread;

    const SHORT_DELAY: Duration = Duration::from_millis(10);

    fn high_scoring_answers() -> [&'static str; 5] {
        [
            "1000+ dog owners in my city struggle with this",
            "$50/month for a gym membership",
            "existing tools are too expensive",
            "Yes - I can build a simple website",
            "10 years experience in this industry",
        ]
    }

    fn complete_session(wizard: &mut Wizard) {
        wizard.submit_idea("Dog walking marketplace");
        for answer in high_scoring_answers() {
            wizard.submit_answer(answer);
        }
    }

    #[test]
    fn fresh_session_starts_at_input() {
        let wizard = Wizard::new();
        assert_eq!(wizard.step(), Step::Input);
        assert_eq!(wizard.idea(), "");
        assert_eq!(wizard.current_index(), 0);
        assert!(wizard.answers().is_empty());
        assert_eq!(wizard.score(), None);
        assert!(!wizard.show_email_capture());
    }

    #[test]
    fn empty_idea_is_a_no_op() {
        let mut wizard = Wizard::new();
        wizard.submit_idea("");
        wizard.submit_idea("   \t  ");
        assert_eq!(wizard.step(), Step::Input);
    }

    #[test]
    fn non_empty_idea_enters_validation() {
        let mut wizard = Wizard::new();
        wizard.submit_idea("x");
        assert_eq!(wizard.step(), Step::Validation);
        assert_eq!(wizard.current_index(), 0);
        assert_eq!(wizard.idea(), "x");
    }

    #[test]
    fn idea_is_stored_untrimmed() {
        let mut wizard = Wizard::new();
        wizard.submit_idea("  padded idea  ");
        assert_eq!(wizard.idea(), "  padded idea  ");
    }

    #[test]
    fn idea_submission_outside_input_step_is_ignored() {
        let mut wizard = Wizard::new();
        wizard.submit_idea("first");
        wizard.submit_idea("second");
        assert_eq!(wizard.idea(), "first");
    }

    #[test]
    fn answers_advance_through_every_question() {
        let mut wizard = Wizard::new();
        wizard.submit_idea("idea");
        for (i, answer) in high_scoring_answers().iter().enumerate() {
            assert_eq!(wizard.step(), Step::Validation);
            assert_eq!(wizard.current_index(), i);
            wizard.submit_answer(answer);
        }
        assert_eq!(wizard.step(), Step::Results);
        assert_eq!(wizard.answers().len(), 5);
    }

    #[test]
    fn empty_answer_does_not_advance() {
        let mut wizard = Wizard::new();
        wizard.submit_idea("idea");
        wizard.submit_answer("   ");
        assert_eq!(wizard.current_index(), 0);
        assert!(wizard.answers().is_empty());
    }

    #[test]
    fn answer_outside_validation_step_is_ignored() {
        let mut wizard = Wizard::new();
        wizard.submit_answer("too early");
        assert_eq!(wizard.step(), Step::Input);
        assert!(wizard.answers().is_empty());
    }

    #[test]
    fn answers_are_keyed_by_question_id_in_order() {
        let mut wizard = Wizard::new();
        complete_session(&mut wizard);
        let keys: Vec<_> = wizard.answers().iter().map(|(k, _)| k).collect();
        assert_eq!(keys, QuestionId::ALL);
        assert_eq!(
            wizard.answers().get(QuestionId::PaymentWillingness),
            Some("$50/month for a gym membership")
        );
    }

    #[test]
    fn final_answer_computes_the_score() {
        let mut wizard = Wizard::new();
        complete_session(&mut wizard);
        assert_eq!(wizard.step(), Step::Results);
        assert_eq!(wizard.score(), Some(100));
    }

    #[test]
    fn low_score_does_not_arm_the_reveal() {
        let mut wizard = Wizard::with_reveal_delay(SHORT_DELAY);
        wizard.submit_idea("idea");
        for _ in 0..5 {
            wizard.submit_answer("meh");
        }
        assert_eq!(wizard.score(), Some(0));
        assert!(!wizard.email_capture_pending());
        thread::sleep(Duration::from_millis(60));
        assert!(!wizard.show_email_capture());
    }

    #[test]
    fn email_capture_reveals_only_after_the_delay() {
        let mut wizard = Wizard::with_reveal_delay(Duration::from_millis(50));
        complete_session(&mut wizard);
        assert!(wizard.email_capture_pending());
        assert!(!wizard.show_email_capture());
        thread::sleep(Duration::from_millis(150));
        assert!(wizard.show_email_capture());
        assert!(!wizard.email_capture_pending());
    }

    #[test]
    fn reset_within_the_reveal_window_cancels_it() {
        let mut wizard = Wizard::with_reveal_delay(Duration::from_millis(30));
        complete_session(&mut wizard);
        wizard.reset();
        thread::sleep(Duration::from_millis(120));
        assert!(!wizard.show_email_capture());
        assert_eq!(wizard.step(), Step::Input);
    }

    #[test]
    fn reset_restores_input_defaults() {
        let mut wizard = Wizard::new();
        complete_session(&mut wizard);
        wizard.reset();
        assert_eq!(wizard.step(), Step::Input);
        assert_eq!(wizard.idea(), "");
        assert_eq!(wizard.current_index(), 0);
        assert!(wizard.answers().is_empty());
        assert_eq!(wizard.score(), None);
        assert!(!wizard.show_email_capture());
    }

    #[test]
    fn reset_is_idempotent() {
        let mut wizard = Wizard::new();
        complete_session(&mut wizard);
        wizard.reset();
        wizard.reset();
        assert_eq!(wizard.step(), Step::Input);
        assert!(wizard.answers().is_empty());
    }

    #[test]
    fn current_question_tracks_the_index() {
        let mut wizard = Wizard::new();
        assert!(wizard.current_question().is_none());
        wizard.submit_idea("idea");
        assert_eq!(
            wizard.current_question().map(|q| q.id),
            Some(QuestionId::MarketSize)
        );
        wizard.submit_answer("lots of people");
        assert_eq!(
            wizard.current_question().map(|q| q.id),
            Some(QuestionId::PaymentWillingness)
        );
    }

    #[test]
    fn session_is_repeatable_after_reset() {
        let mut wizard = Wizard::new();
        complete_session(&mut wizard);
        wizard.reset();
        complete_session(&mut wizard);
        assert_eq!(wizard.step(), Step::Results);
        assert_eq!(wizard.score(), Some(100));
    }
}
