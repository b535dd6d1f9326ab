//! Quiz state machine: one question at a time, a lives counter and a
//! one-second countdown per question.
//!
//! All mutation goes through the three transition methods (`select_option`,
//! `tick`, `advance`); each returns a [`QuizFeedback`] value for the
//! presentation layer to narrate. The countdown itself lives in the quiz
//! screen as a scoped resource; this module only tracks remaining seconds.

use bevy::prelude::*;

use super::config::QuizConfig;

/// One multiple-choice question. Fixed at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizQuestion {
    pub id: u32,
    /// Prompt illustration, relative to the asset root.
    pub image: &'static str,
    /// Pronunciation clip of the correct answer.
    pub audio: &'static str,
    /// Exact option string counted as the right answer.
    pub correct: &'static str,
    /// Display order is fixed; `correct` appears exactly once.
    pub options: [&'static str; 4],
}

const DECK: [QuizQuestion; 5] = [
    QuizQuestion {
        id: 1,
        image: "images/red.png",
        audio: "audio/red.ogg",
        correct: "Red",
        options: ["Red", "Green", "Blue", "Yellow"],
    },
    QuizQuestion {
        id: 2,
        image: "images/blue.png",
        audio: "audio/blue.ogg",
        correct: "Blue",
        options: ["Green", "Blue", "Red", "Orange"],
    },
    QuizQuestion {
        id: 3,
        image: "images/yellow.png",
        audio: "audio/yellow.ogg",
        correct: "Yellow",
        options: ["Orange", "White", "Yellow", "Green"],
    },
    QuizQuestion {
        id: 4,
        image: "images/green.png",
        audio: "audio/green.ogg",
        correct: "Green",
        options: ["Blue", "Green", "Black", "Red"],
    },
    QuizQuestion {
        id: 5,
        image: "images/orange.png",
        audio: "audio/orange.ogg",
        correct: "Orange",
        options: ["Yellow", "Red", "White", "Orange"],
    },
];

/// The fixed question deck.
pub fn question_deck() -> &'static [QuizQuestion] {
    &DECK
}

/// Tunables lifted out of `GameConfig` so the state machine stays plain
/// data-in, data-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizRules {
    /// Seconds on the countdown when a question becomes active.
    pub initial_time: u32,
    /// Wrong answers allowed before game over.
    pub lives: u8,
}

impl Default for QuizRules {
    fn default() -> Self {
        Self {
            initial_time: 20,
            lives: 3,
        }
    }
}

impl From<&QuizConfig> for QuizRules {
    fn from(cfg: &QuizConfig) -> Self {
        Self {
            initial_time: cfg.initial_time_secs,
            lives: cfg.lives,
        }
    }
}

/// Outcome of a transition, for the presentation layer to narrate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizFeedback {
    /// Right answer; the question is settled and the countdown stops.
    Correct,
    /// Wrong answer with lives to spare.
    Incorrect { lives_left: u8 },
    /// Wrong answer spent the last life.
    GameOver,
    /// Countdown reached zero; costs no life, blocks until answered.
    TimedOut,
    /// `advance` called before a correct answer.
    MustAnswerFirst,
    /// Moved to the next question; `wrapped` marks a deck restart.
    Advanced { wrapped: bool },
    /// Fresh start after game over: lives refilled, deck moves on.
    Restarted,
    /// Input arrived in a state where it has no effect.
    Ignored,
}

/// Everything the quiz screen renders. Mutated only by the transition
/// methods; fully reset on restart.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct QuizState {
    deck: &'static [QuizQuestion],
    rules: QuizRules,
    current: usize,
    answered: bool,
    timed_out: bool,
    game_over: bool,
    lives: u8,
    time_remaining: u32,
}

impl QuizState {
    pub fn new(rules: QuizRules) -> Self {
        Self::with_deck(&DECK, rules)
    }

    /// Start a game over an arbitrary non-empty deck.
    pub fn with_deck(deck: &'static [QuizQuestion], rules: QuizRules) -> Self {
        assert!(!deck.is_empty(), "quiz deck must not be empty");
        Self {
            deck,
            rules,
            current: 0,
            answered: false,
            timed_out: false,
            game_over: false,
            lives: rules.lives,
            time_remaining: rules.initial_time,
        }
    }

    pub fn current_question(&self) -> &'static QuizQuestion {
        &self.deck[self.current]
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn lives(&self) -> u8 {
        self.lives
    }

    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    pub fn answered(&self) -> bool {
        self.answered
    }

    pub fn timed_out(&self) -> bool {
        self.timed_out
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// True while the active question still accepts the countdown.
    pub fn awaiting_answer(&self) -> bool {
        !self.answered && !self.timed_out && !self.game_over
    }

    /// Apply a picked option. Settled questions and finished games ignore
    /// further picks.
    pub fn select_option(&mut self, picked: &str) -> QuizFeedback {
        if self.answered || self.game_over {
            return QuizFeedback::Ignored;
        }
        if picked == self.current_question().correct {
            self.answered = true;
            return QuizFeedback::Correct;
        }
        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 {
            self.game_over = true;
            QuizFeedback::GameOver
        } else {
            QuizFeedback::Incorrect {
                lives_left: self.lives,
            }
        }
    }

    /// One countdown second. Returns `Some(TimedOut)` exactly when the floor
    /// is hit; a settled, timed-out or finished question ticks to `None`.
    pub fn tick(&mut self) -> Option<QuizFeedback> {
        if !self.awaiting_answer() {
            return None;
        }
        self.time_remaining = self.time_remaining.saturating_sub(1);
        if self.time_remaining == 0 {
            self.timed_out = true;
            Some(QuizFeedback::TimedOut)
        } else {
            None
        }
    }

    /// Move to the next question. Requires a settled question, except after
    /// game over where it doubles as the restart (lives refilled first).
    /// Wrapping past the end restarts the deck and also refills lives.
    pub fn advance(&mut self) -> QuizFeedback {
        if self.game_over {
            self.lives = self.rules.lives;
            self.game_over = false;
            self.next_question();
            return QuizFeedback::Restarted;
        }
        if !self.answered {
            return QuizFeedback::MustAnswerFirst;
        }
        let wrapped = self.next_question();
        if wrapped {
            self.lives = self.rules.lives;
        }
        QuizFeedback::Advanced { wrapped }
    }

    fn next_question(&mut self) -> bool {
        let wrapped = self.current + 1 >= self.deck.len();
        self.current = if wrapped { 0 } else { self.current + 1 };
        self.answered = false;
        self.timed_out = false;
        self.time_remaining = self.rules.initial_time;
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules(initial_time: u32, lives: u8) -> QuizRules {
        QuizRules {
            initial_time,
            lives,
        }
    }

    fn wrong_option(state: &QuizState) -> &'static str {
        let q = state.current_question();
        q.options
            .iter()
            .copied()
            .find(|o| *o != q.correct)
            .expect("deck options always include a wrong answer")
    }

    #[test]
    fn correct_answer_settles_regardless_of_time() {
        let mut quiz = QuizState::new(rules(5, 3));
        assert_eq!(quiz.tick(), None);
        assert_eq!(quiz.tick(), None);
        let correct = quiz.current_question().correct;
        assert_eq!(quiz.select_option(correct), QuizFeedback::Correct);
        assert!(quiz.answered());
        // settled question no longer counts down
        assert_eq!(quiz.tick(), None);
        assert_eq!(quiz.time_remaining(), 3);
    }

    #[test]
    fn picks_after_settling_are_ignored() {
        let mut quiz = QuizState::new(rules(10, 3));
        let correct = quiz.current_question().correct;
        quiz.select_option(correct);
        assert_eq!(quiz.select_option(wrong_option(&quiz)), QuizFeedback::Ignored);
        assert_eq!(quiz.lives(), 3);
    }

    #[test]
    fn timeout_blocks_without_costing_a_life() {
        let mut quiz = QuizState::new(rules(2, 3));
        assert_eq!(quiz.tick(), None);
        assert_eq!(quiz.tick(), Some(QuizFeedback::TimedOut));
        assert!(quiz.timed_out());
        assert_eq!(quiz.lives(), 3);
        // stays blocked, further ticks are inert
        assert_eq!(quiz.tick(), None);
        assert_eq!(quiz.advance(), QuizFeedback::MustAnswerFirst);
        // a correct answer still unblocks the question
        let correct = quiz.current_question().correct;
        assert_eq!(quiz.select_option(correct), QuizFeedback::Correct);
        assert!(matches!(quiz.advance(), QuizFeedback::Advanced { .. }));
    }

    #[test]
    fn game_over_then_advance_restarts_with_full_lives() {
        let mut quiz = QuizState::new(rules(10, 2));
        let wrong = wrong_option(&quiz);
        assert_eq!(
            quiz.select_option(wrong),
            QuizFeedback::Incorrect { lives_left: 1 }
        );
        assert_eq!(quiz.select_option(wrong), QuizFeedback::GameOver);
        assert!(quiz.game_over());
        assert_eq!(quiz.select_option(wrong), QuizFeedback::Ignored);

        assert_eq!(quiz.advance(), QuizFeedback::Restarted);
        assert!(!quiz.game_over());
        assert_eq!(quiz.lives(), 2);
        assert_eq!(quiz.current_index(), 1);
        assert_eq!(quiz.time_remaining(), 10);
    }

    #[test]
    fn zero_initial_time_times_out_on_first_tick() {
        let mut quiz = QuizState::new(rules(0, 3));
        assert_eq!(quiz.tick(), Some(QuizFeedback::TimedOut));
    }
}
