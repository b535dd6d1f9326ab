use bevy::prelude::*;

use rainbow_learners::{AppPlugin, GameConfig};

fn main() {
    // Load configuration (fall back to defaults if missing)
    let (cfg, load_error) = GameConfig::load_or_default("assets/config/game.ron");
    if let Some(err) = &load_error {
        eprintln!("config: {err}; continuing with defaults");
    }

    App::new()
        .insert_resource(cfg.clone())
        .add_plugins(
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    title: cfg.window.title.clone(),
                    resolution: (cfg.window.width, cfg.window.height).into(),
                    resizable: true,
                    ..default()
                }),
                ..default()
            }),
        )
        .add_plugins(AppPlugin)
        .run();
}
