//! Close-up view of a single color: big swatch, both names, description and
//! pronunciation.

use bevy::prelude::*;

use crate::audio::SoundButton;
use crate::core::palette;
use crate::core::registry::ColorRegistry;

use super::state::AppState;
use super::widgets::{button_node, label, ButtonTint, NavTarget, BACKDROP};

/// Which color the detail screen shows. Inserted by the gallery before
/// routing here; a dangling or missing id falls back to the gallery.
#[derive(Resource, Debug, Clone, Copy)]
pub struct SelectedColor(pub u32);

pub struct DetailPlugin;

impl Plugin for DetailPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::Detail), spawn_detail)
            .add_systems(OnExit(AppState::Detail), despawn_detail);
    }
}

#[derive(Component)]
struct DetailUiRoot;

fn spawn_detail(
    mut commands: Commands,
    registry: Res<ColorRegistry>,
    selected: Option<Res<SelectedColor>>,
    asset_server: Res<AssetServer>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let record = selected.as_ref().and_then(|s| registry.find_by_id(s.0));
    let Some(record) = record else {
        warn!(target: "detail", "detail requested without a valid color; returning to gallery");
        next_state.set(AppState::Gallery);
        return;
    };
    info!(target: "detail", "showing color id={} ({})", record.id, record.english);

    let swatch = palette::swatch(record.english);
    let text_color = swatch.contrast_text().to_bevy();
    commands
        .spawn((
            DetailUiRoot,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(16.0),
                ..default()
            },
            BackgroundColor(BACKDROP),
        ))
        .with_children(|root| {
            root.spawn((
                Node {
                    width: Val::Px(360.0),
                    flex_direction: FlexDirection::Column,
                    align_items: AlignItems::Center,
                    padding: UiRect::all(Val::Px(24.0)),
                    row_gap: Val::Px(10.0),
                    ..default()
                },
                BackgroundColor(swatch.to_bevy()),
                BorderRadius::all(Val::Px(16.0)),
            ))
            .with_children(|card| {
                card.spawn((
                    ImageNode::new(asset_server.load(record.image)),
                    Node {
                        width: Val::Px(160.0),
                        height: Val::Px(160.0),
                        ..default()
                    },
                ));
                card.spawn(label(record.english, 46.0, text_color));
                card.spawn(label(record.name, 24.0, text_color));
                card.spawn(label(swatch.to_hex(), 16.0, text_color));
            });
            if let Some(description) = record.description {
                root.spawn(label(description, 18.0, Color::srgb(0.85, 0.87, 0.95)));
            }
            root.spawn(Node {
                flex_direction: FlexDirection::Row,
                column_gap: Val::Px(12.0),
                ..default()
            })
            .with_children(|row| {
                let action_base = Color::srgb(0.25, 0.32, 0.65);
                row.spawn((
                    Button,
                    SoundButton(record.audio),
                    ButtonTint::from_base(action_base),
                    button_node(),
                    BackgroundColor(action_base),
                    BorderRadius::all(Val::Px(10.0)),
                ))
                .with_children(|b| {
                    b.spawn(label("Listen", 18.0, Color::WHITE));
                });
                row.spawn((
                    Button,
                    NavTarget(AppState::Gallery),
                    ButtonTint::from_base(action_base),
                    button_node(),
                    BackgroundColor(action_base),
                    BorderRadius::all(Val::Px(10.0)),
                ))
                .with_children(|b| {
                    b.spawn(label("Back to gallery", 18.0, Color::WHITE));
                });
            });
        });
}

fn despawn_detail(mut commands: Commands, roots: Query<Entity, With<DetailUiRoot>>) {
    for entity in &roots {
        commands.entity(entity).despawn();
    }
    commands.remove_resource::<SelectedColor>();
}
