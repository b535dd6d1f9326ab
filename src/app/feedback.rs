//! Transient toast notifications shown at the bottom of the screen.

use bevy::prelude::*;

/// Fire-and-forget user notification; the newest toast replaces any visible one.
#[derive(Event, Debug, Clone)]
pub struct Toast(pub String);

const TOAST_SECS: f32 = 1.8;

pub struct FeedbackPlugin;

impl Plugin for FeedbackPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<Toast>()
            .add_systems(Update, (show_toasts, expire_toasts));
    }
}

#[derive(Component)]
struct ToastUi {
    life: Timer,
}

fn show_toasts(
    mut commands: Commands,
    mut events: EventReader<Toast>,
    existing: Query<Entity, With<ToastUi>>,
) {
    let Some(Toast(message)) = events.read().last().cloned() else {
        return;
    };
    for entity in &existing {
        commands.entity(entity).despawn();
    }
    commands
        .spawn((
            ToastUi {
                life: Timer::from_seconds(TOAST_SECS, TimerMode::Once),
            },
            Node {
                position_type: PositionType::Absolute,
                bottom: Val::Px(28.0),
                width: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                ..default()
            },
        ))
        .with_children(|bar| {
            bar.spawn((
                Node {
                    padding: UiRect::axes(Val::Px(20.0), Val::Px(10.0)),
                    ..default()
                },
                BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.8)),
                BorderRadius::all(Val::Px(8.0)),
            ))
            .with_children(|pill| {
                pill.spawn((
                    Text::new(message),
                    TextFont {
                        font_size: 18.0,
                        ..default()
                    },
                    TextColor(Color::WHITE),
                ));
            });
        });
}

fn expire_toasts(
    time: Res<Time>,
    mut commands: Commands,
    mut toasts: Query<(Entity, &mut ToastUi)>,
) {
    for (entity, mut toast) in &mut toasts {
        if toast.life.tick(time.delta()).finished() {
            commands.entity(entity).despawn();
        }
    }
}
