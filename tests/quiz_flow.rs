use std::time::Duration;

use bevy::prelude::*;

use rainbow_learners::app::feedback::Toast;
use rainbow_learners::app::quiz::{countdown_system, QuestionTimer};
use rainbow_learners::core::quiz::{question_deck, QuizFeedback, QuizRules, QuizState};

fn rules(initial_time: u32, lives: u8) -> QuizRules {
    QuizRules {
        initial_time,
        lives,
    }
}

fn wrong_option(quiz: &QuizState) -> &'static str {
    let q = quiz.current_question();
    q.options
        .iter()
        .copied()
        .find(|o| *o != q.correct)
        .expect("every question has a wrong option")
}

#[test]
fn three_wrong_answers_walk_lives_down_to_game_over() {
    let mut quiz = QuizState::new(rules(20, 3));
    let wrong = wrong_option(&quiz);
    assert_eq!(
        quiz.select_option(wrong),
        QuizFeedback::Incorrect { lives_left: 2 }
    );
    assert_eq!(
        quiz.select_option(wrong),
        QuizFeedback::Incorrect { lives_left: 1 }
    );
    assert_eq!(quiz.select_option(wrong), QuizFeedback::GameOver);
    assert!(quiz.game_over());
    assert_eq!(quiz.lives(), 0);
}

#[test]
fn premature_advance_changes_nothing() {
    let mut quiz = QuizState::new(rules(20, 3));
    quiz.tick();
    let time_before = quiz.time_remaining();
    assert_eq!(quiz.advance(), QuizFeedback::MustAnswerFirst);
    assert_eq!(quiz.current_index(), 0);
    assert_eq!(quiz.time_remaining(), time_before);
}

#[test]
fn advancing_past_the_last_question_wraps_and_refills_lives() {
    let mut quiz = QuizState::new(rules(20, 3));
    let deck_len = question_deck().len();

    // lose one life early so the wrap-refill is observable
    let wrong = wrong_option(&quiz);
    quiz.select_option(wrong);
    assert_eq!(quiz.lives(), 2);

    for i in 0..deck_len {
        let correct = quiz.current_question().correct;
        assert_eq!(quiz.select_option(correct), QuizFeedback::Correct);
        let expected_wrap = i == deck_len - 1;
        assert_eq!(
            quiz.advance(),
            QuizFeedback::Advanced {
                wrapped: expected_wrap
            }
        );
    }

    assert_eq!(quiz.current_index(), 0);
    assert_eq!(quiz.lives(), 3);
    assert_eq!(quiz.time_remaining(), 20);
    assert!(!quiz.answered());
}

#[test]
fn countdown_system_ticks_once_per_second() {
    let mut app = App::new();
    app.add_event::<Toast>();
    app.init_resource::<Time>();
    app.insert_resource(QuizState::new(rules(5, 3)));
    app.insert_resource(QuestionTimer::default());
    app.add_systems(Update, countdown_system);

    advance_clock(&mut app, 1.0);
    assert_eq!(app.world().resource::<QuizState>().time_remaining(), 4);

    // half a second is not a tick
    advance_clock(&mut app, 0.5);
    assert_eq!(app.world().resource::<QuizState>().time_remaining(), 4);

    advance_clock(&mut app, 0.5);
    assert_eq!(app.world().resource::<QuizState>().time_remaining(), 3);
    assert!(app.world().contains_resource::<QuestionTimer>());
}

#[test]
fn countdown_cancels_itself_at_the_floor() {
    let mut app = App::new();
    app.add_event::<Toast>();
    app.init_resource::<Time>();
    app.insert_resource(QuizState::new(rules(2, 3)));
    app.insert_resource(QuestionTimer::default());
    app.add_systems(Update, countdown_system);

    advance_clock(&mut app, 1.0);
    assert!(app.world().contains_resource::<QuestionTimer>());

    advance_clock(&mut app, 1.0);
    let quiz = app.world().resource::<QuizState>();
    assert_eq!(quiz.time_remaining(), 0);
    assert!(quiz.timed_out());
    assert!(quiz.lives() == 3, "timeout must not cost a life");
    assert!(
        !app.world().contains_resource::<QuestionTimer>(),
        "countdown must cancel at the floor"
    );
}

#[test]
fn settled_question_ignores_a_still_running_countdown() {
    let mut app = App::new();
    app.add_event::<Toast>();
    app.init_resource::<Time>();
    app.insert_resource(QuizState::new(rules(10, 3)));
    app.insert_resource(QuestionTimer::default());
    app.add_systems(Update, countdown_system);

    advance_clock(&mut app, 1.0);
    {
        let mut quiz = app.world_mut().resource_mut::<QuizState>();
        let correct = quiz.current_question().correct;
        assert_eq!(quiz.select_option(correct), QuizFeedback::Correct);
    }
    // even if cancellation raced a frame, ticking a settled question is inert
    advance_clock(&mut app, 1.0);
    advance_clock(&mut app, 1.0);
    assert_eq!(app.world().resource::<QuizState>().time_remaining(), 9);
}

fn advance_clock(app: &mut App, secs: f32) {
    app.world_mut()
        .resource_mut::<Time>()
        .advance_by(Duration::from_secs_f32(secs));
    app.update();
}
