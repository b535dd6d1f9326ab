#[cfg(feature = "debug")]
use bevy::prelude::*;

#[cfg(feature = "debug")]
use crate::app::state::AppState;
#[cfg(feature = "debug")]
use crate::core::quiz::QuizState;

/// F10 dumps the current screen and quiz snapshot to the log.
#[cfg(feature = "debug")]
pub fn debug_key_input_system(
    keys: Res<ButtonInput<KeyCode>>,
    state: Res<State<AppState>>,
    quiz: Option<Res<QuizState>>,
) {
    if !keys.just_pressed(KeyCode::F10) {
        return;
    }
    match quiz.as_deref() {
        Some(q) => info!(
            target: "debug",
            "screen={:?} question={} lives={} time={}s answered={} timed_out={} game_over={}",
            state.get(),
            q.current_question().id,
            q.lives(),
            q.time_remaining(),
            q.answered(),
            q.timed_out(),
            q.game_over()
        ),
        None => info!(target: "debug", "screen={:?} (no quiz running)", state.get()),
    }
}
