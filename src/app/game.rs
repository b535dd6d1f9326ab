use bevy::prelude::*;

use crate::audio::SoundPlugin;
use crate::core::config::GameConfig;
use crate::core::registry::ColorRegistry;
#[cfg(feature = "debug")]
use crate::debug::DebugPlugin;

use super::detail::DetailPlugin;
use super::feedback::FeedbackPlugin;
use super::gallery::GalleryPlugin;
use super::home::HomePlugin;
use super::mixing::MixingPlugin;
use super::quiz::QuizPlugin;
use super::session::SessionPlugin;
use super::state::AppState;
use super::widgets::WidgetsPlugin;

pub struct AppPlugin;

impl Plugin for AppPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<AppState>()
            .init_resource::<ColorRegistry>()
            .add_plugins((
                WidgetsPlugin,
                SoundPlugin,
                FeedbackPlugin,
                HomePlugin,
                GalleryPlugin,
                DetailPlugin,
                MixingPlugin,
                QuizPlugin,
                SessionPlugin,
                #[cfg(feature = "debug")]
                DebugPlugin,
            ))
            .add_systems(Startup, (setup_camera, log_config_warnings));
    }
}

fn setup_camera(mut commands: Commands) {
    // UI renders through the 2D camera; Required Components supply defaults.
    commands.spawn(Camera2d);
}

fn log_config_warnings(cfg: Res<GameConfig>) {
    for warning in cfg.validate() {
        warn!(target: "config", "{warning}");
    }
}
