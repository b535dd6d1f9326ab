use bevy::prelude::*;

/// Screen routing state; one variant per page of the original navigation map.
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum AppState {
    /// Landing page with navigation into the activities.
    #[default]
    Home,
    /// Card gallery of every registered color.
    Gallery,
    /// Close-up of a single color (needs a `SelectedColor` to be set).
    Detail,
    /// Two-pick color mixing lab.
    Mixing,
    /// Lives-and-countdown multiple choice quiz.
    Quiz,
}
