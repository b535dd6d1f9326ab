use bevy::prelude::*;

use crate::core::config::GameConfig;

/// Optional wall-clock session limit, driven by `window.autoClose`.
/// Absent unless the config asked for one.
#[derive(Resource, Deref, DerefMut)]
struct SessionTimeout(Timer);

pub struct SessionPlugin;

impl Plugin for SessionPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_session_timeout)
            .add_systems(Update, check_session_timeout);
    }
}

fn setup_session_timeout(mut commands: Commands, cfg: Res<GameConfig>) {
    let secs = cfg.window.auto_close;
    if secs > 0.0 {
        info!(target: "session", "will exit after {secs} seconds");
        commands.insert_resource(SessionTimeout(Timer::from_seconds(secs, TimerMode::Once)));
    }
}

fn check_session_timeout(
    time: Res<Time>,
    timeout: Option<ResMut<SessionTimeout>>,
    mut exit_events: EventWriter<AppExit>,
) {
    let Some(mut timeout) = timeout else {
        return;
    };
    if timeout.tick(time.delta()).just_finished() {
        info!(target: "session", "session limit reached, requesting app exit");
        exit_events.write(AppExit::Success);
    }
}
