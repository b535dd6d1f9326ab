//! Card gallery of every registered color: listen to the pronunciation or
//! jump into the detail view.

use bevy::prelude::*;

use crate::audio::SoundButton;
use crate::core::palette;
use crate::core::registry::ColorRegistry;

use super::detail::SelectedColor;
use super::state::AppState;
use super::widgets::{button_node, label, ButtonTint, NavTarget, BACKDROP};

pub struct GalleryPlugin;

impl Plugin for GalleryPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::Gallery), spawn_gallery)
            .add_systems(OnExit(AppState::Gallery), despawn_gallery)
            .add_systems(
                Update,
                handle_detail_buttons.run_if(in_state(AppState::Gallery)),
            );
    }
}

#[derive(Component)]
struct GalleryUiRoot;

/// Pressing this routes to the detail screen for the carried color id.
#[derive(Component, Debug, Clone, Copy)]
struct DetailButton(u32);

fn spawn_gallery(mut commands: Commands, registry: Res<ColorRegistry>) {
    info!(target: "gallery", "showing {} colors", registry.all().len());
    commands
        .spawn((
            GalleryUiRoot,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                padding: UiRect::all(Val::Px(24.0)),
                row_gap: Val::Px(20.0),
                ..default()
            },
            BackgroundColor(BACKDROP),
        ))
        .with_children(|root| {
            root.spawn(label("Color Gallery", 38.0, Color::WHITE));
            root.spawn(Node {
                width: Val::Percent(100.0),
                flex_direction: FlexDirection::Row,
                flex_wrap: FlexWrap::Wrap,
                justify_content: JustifyContent::Center,
                column_gap: Val::Px(16.0),
                row_gap: Val::Px(16.0),
                ..default()
            })
            .with_children(|grid| {
                for record in registry.all() {
                    let swatch = palette::swatch(record.english);
                    let text_color = swatch.contrast_text().to_bevy();
                    grid.spawn((
                        Node {
                            width: Val::Px(180.0),
                            flex_direction: FlexDirection::Column,
                            align_items: AlignItems::Center,
                            padding: UiRect::all(Val::Px(14.0)),
                            row_gap: Val::Px(8.0),
                            ..default()
                        },
                        BackgroundColor(swatch.to_bevy()),
                        BorderRadius::all(Val::Px(12.0)),
                    ))
                    .with_children(|card| {
                        card.spawn(label(record.english, 26.0, text_color));
                        card.spawn(label(record.name, 16.0, text_color));
                        card.spawn(Node {
                            flex_direction: FlexDirection::Row,
                            column_gap: Val::Px(8.0),
                            margin: UiRect::top(Val::Px(6.0)),
                            ..default()
                        })
                        .with_children(|row| {
                            let action_base = Color::srgba(0.0, 0.0, 0.0, 0.35);
                            row.spawn((
                                Button,
                                SoundButton(record.audio),
                                ButtonTint::from_base(action_base),
                                button_node(),
                                BackgroundColor(action_base),
                                BorderRadius::all(Val::Px(8.0)),
                            ))
                            .with_children(|b| {
                                b.spawn(label("Listen", 15.0, Color::WHITE));
                            });
                            row.spawn((
                                Button,
                                DetailButton(record.id),
                                ButtonTint::from_base(action_base),
                                button_node(),
                                BackgroundColor(action_base),
                                BorderRadius::all(Val::Px(8.0)),
                            ))
                            .with_children(|b| {
                                b.spawn(label("More", 15.0, Color::WHITE));
                            });
                        });
                    });
                }
            });
            root.spawn((
                Button,
                NavTarget(AppState::Home),
                ButtonTint::from_base(Color::srgb(0.25, 0.32, 0.65)),
                button_node(),
                BackgroundColor(Color::srgb(0.25, 0.32, 0.65)),
                BorderRadius::all(Val::Px(10.0)),
            ))
            .with_children(|b| {
                b.spawn(label("Home", 18.0, Color::WHITE));
            });
        });
}

fn handle_detail_buttons(
    interactions: Query<(&Interaction, &DetailButton), (Changed<Interaction>, With<Button>)>,
    mut commands: Commands,
    mut next_state: ResMut<NextState<AppState>>,
) {
    for (interaction, button) in &interactions {
        if *interaction == Interaction::Pressed {
            commands.insert_resource(SelectedColor(button.0));
            next_state.set(AppState::Detail);
        }
    }
}

fn despawn_gallery(mut commands: Commands, roots: Query<Entity, With<GalleryUiRoot>>) {
    for entity in &roots {
        commands.entity(entity).despawn();
    }
}
