//! Fire-and-forget sound playback.
//!
//! Playback is one-shot with no completion tracking; a clip whose asset is
//! missing simply stays silent (the asset server logs the miss).

use bevy::prelude::*;

use crate::core::config::GameConfig;

/// Request to play one clip by asset path.
#[derive(Event, Debug, Clone)]
pub struct PlaySound(pub String);

/// Buttons that just play a fixed clip when pressed.
#[derive(Component, Debug, Clone, Copy)]
pub struct SoundButton(pub &'static str);

/// Conventional pronunciation clip path for a color name.
pub fn pronunciation_path(name: &str) -> String {
    format!("audio/{}.ogg", name.to_lowercase().replace(' ', "_"))
}

pub struct SoundPlugin;

impl Plugin for SoundPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<PlaySound>()
            .add_systems(Update, (trigger_sound_buttons, play_sounds));
    }
}

fn trigger_sound_buttons(
    interactions: Query<(&Interaction, &SoundButton), (Changed<Interaction>, With<Button>)>,
    mut sounds: EventWriter<PlaySound>,
) {
    for (interaction, sound) in &interactions {
        if *interaction == Interaction::Pressed {
            sounds.write(PlaySound(sound.0.to_string()));
        }
    }
}

fn play_sounds(
    mut commands: Commands,
    mut events: EventReader<PlaySound>,
    asset_server: Res<AssetServer>,
    cfg: Option<Res<GameConfig>>,
) {
    let enabled = cfg.map(|c| c.audio.enabled).unwrap_or(true);
    for PlaySound(path) in events.read() {
        if !enabled {
            continue;
        }
        commands.spawn((
            AudioPlayer::new(asset_server.load(path.clone())),
            PlaybackSettings::DESPAWN,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pronunciation_paths_are_lowercase_ogg() {
        assert_eq!(pronunciation_path("Red"), "audio/red.ogg");
        assert_eq!(pronunciation_path("Light Blue"), "audio/light_blue.ogg");
    }
}
