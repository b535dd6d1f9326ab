//! Mixing lab: pick two colors, blend them, hear the official result.

use bevy::prelude::*;

use crate::audio::{PlaySound, SoundButton};
use crate::core::mixer;
use crate::core::palette;
use crate::core::registry::ColorRegistry;

use super::feedback::Toast;
use super::state::AppState;
use super::widgets::{button_node, label, ButtonTint, NavTarget, BACKDROP};

pub struct MixingPlugin;

impl Plugin for MixingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::Mixing), spawn_mixing)
            .add_systems(OnExit(AppState::Mixing), despawn_mixing)
            .add_systems(
                Update,
                (handle_pick_buttons, update_pick_labels, handle_mix_button)
                    .run_if(in_state(AppState::Mixing)),
            );
    }
}

/// The two mixer inputs. Both must be set before a blend happens.
#[derive(Resource, Debug, Default, Clone, Copy)]
struct MixPicks {
    a: Option<u32>,
    b: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PickSlot {
    A,
    B,
}

#[derive(Component)]
struct MixingUiRoot;

#[derive(Component, Debug, Clone, Copy)]
struct PickButton {
    slot: PickSlot,
    id: u32,
}

/// Shows the currently picked color of one slot.
#[derive(Component, Debug, Clone, Copy)]
struct PickLabel(PickSlot);

#[derive(Component)]
struct MixButton;

#[derive(Component)]
struct ResultCard;

#[derive(Component)]
struct ResultNameText;

#[derive(Component)]
struct ResultHexText;

#[derive(Component)]
struct ResultListenButton;

const PANEL_BG: Color = Color::srgb(0.13, 0.14, 0.22);
const ACTION_BASE: Color = Color::srgb(0.25, 0.32, 0.65);

fn spawn_mixing(mut commands: Commands, registry: Res<ColorRegistry>) {
    info!(target: "mixing", "entering mixing lab");
    commands.init_resource::<MixPicks>();
    commands
        .spawn((
            MixingUiRoot,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                padding: UiRect::all(Val::Px(20.0)),
                row_gap: Val::Px(16.0),
                ..default()
            },
            BackgroundColor(BACKDROP),
        ))
        .with_children(|root| {
            root.spawn(label("Mixing Lab", 38.0, Color::WHITE));
            root.spawn(Node {
                flex_direction: FlexDirection::Row,
                column_gap: Val::Px(40.0),
                ..default()
            })
            .with_children(|columns| {
                for slot in [PickSlot::A, PickSlot::B] {
                    let title = match slot {
                        PickSlot::A => "First color",
                        PickSlot::B => "Second color",
                    };
                    columns
                        .spawn((
                            Node {
                                flex_direction: FlexDirection::Column,
                                align_items: AlignItems::Center,
                                padding: UiRect::all(Val::Px(12.0)),
                                row_gap: Val::Px(6.0),
                                ..default()
                            },
                            BackgroundColor(PANEL_BG),
                            BorderRadius::all(Val::Px(12.0)),
                        ))
                        .with_children(|column| {
                            column.spawn(label(title, 20.0, Color::WHITE));
                            column.spawn((
                                PickLabel(slot),
                                Text::new("pick below"),
                                TextFont {
                                    font_size: 16.0,
                                    ..default()
                                },
                                TextColor(Color::srgb(0.7, 0.72, 0.8)),
                            ));
                            for record in registry.all() {
                                let swatch = palette::swatch(record.english);
                                column
                                    .spawn((
                                        Button,
                                        PickButton {
                                            slot,
                                            id: record.id,
                                        },
                                        ButtonTint::from_base(swatch.to_bevy()),
                                        button_node(),
                                        BackgroundColor(swatch.to_bevy()),
                                        BorderRadius::all(Val::Px(8.0)),
                                    ))
                                    .with_children(|b| {
                                        b.spawn(label(
                                            record.english,
                                            16.0,
                                            swatch.contrast_text().to_bevy(),
                                        ));
                                    });
                            }
                        });
                }
                // result column
                columns
                    .spawn(Node {
                        flex_direction: FlexDirection::Column,
                        align_items: AlignItems::Center,
                        row_gap: Val::Px(12.0),
                        ..default()
                    })
                    .with_children(|column| {
                        column
                            .spawn((
                                Button,
                                MixButton,
                                ButtonTint::from_base(ACTION_BASE),
                                button_node(),
                                BackgroundColor(ACTION_BASE),
                                BorderRadius::all(Val::Px(10.0)),
                            ))
                            .with_children(|b| {
                                b.spawn(label("Mix!", 24.0, Color::WHITE));
                            });
                        column
                            .spawn((
                                ResultCard,
                                Node {
                                    width: Val::Px(240.0),
                                    height: Val::Px(140.0),
                                    flex_direction: FlexDirection::Column,
                                    justify_content: JustifyContent::Center,
                                    align_items: AlignItems::Center,
                                    row_gap: Val::Px(6.0),
                                    ..default()
                                },
                                BackgroundColor(PANEL_BG),
                                BorderRadius::all(Val::Px(12.0)),
                            ))
                            .with_children(|card| {
                                card.spawn((
                                    ResultNameText,
                                    Text::new("Mix two colors!"),
                                    TextFont {
                                        font_size: 22.0,
                                        ..default()
                                    },
                                    TextColor(Color::WHITE),
                                ));
                                card.spawn((
                                    ResultHexText,
                                    Text::new(""),
                                    TextFont {
                                        font_size: 16.0,
                                        ..default()
                                    },
                                    TextColor(Color::WHITE),
                                ));
                            });
                        column
                            .spawn((
                                Button,
                                ResultListenButton,
                                SoundButton(""),
                                Visibility::Hidden,
                                ButtonTint::from_base(ACTION_BASE),
                                button_node(),
                                BackgroundColor(ACTION_BASE),
                                BorderRadius::all(Val::Px(10.0)),
                            ))
                            .with_children(|b| {
                                b.spawn(label("Listen", 18.0, Color::WHITE));
                            });
                    });
            });
            root.spawn((
                Button,
                NavTarget(AppState::Home),
                ButtonTint::from_base(ACTION_BASE),
                button_node(),
                BackgroundColor(ACTION_BASE),
                BorderRadius::all(Val::Px(10.0)),
            ))
            .with_children(|b| {
                b.spawn(label("Home", 18.0, Color::WHITE));
            });
        });
}

fn handle_pick_buttons(
    interactions: Query<(&Interaction, &PickButton), (Changed<Interaction>, With<Button>)>,
    picks: Option<ResMut<MixPicks>>,
) {
    let Some(mut picks) = picks else {
        return;
    };
    for (interaction, button) in &interactions {
        if *interaction != Interaction::Pressed {
            continue;
        }
        match button.slot {
            PickSlot::A => picks.a = Some(button.id),
            PickSlot::B => picks.b = Some(button.id),
        }
    }
}

fn update_pick_labels(
    picks: Option<Res<MixPicks>>,
    registry: Res<ColorRegistry>,
    mut labels: Query<(&PickLabel, &mut Text, &mut TextColor)>,
) {
    let Some(picks) = picks else {
        return;
    };
    if !picks.is_changed() {
        return;
    }
    for (pick_label, mut text, mut color) in &mut labels {
        let id = match pick_label.0 {
            PickSlot::A => picks.a,
            PickSlot::B => picks.b,
        };
        match id.and_then(|id| registry.find_by_id(id)) {
            Some(record) => {
                *text = Text::new(record.english);
                color.0 = palette::swatch(record.english).to_bevy();
            }
            None => {
                *text = Text::new("pick below");
                color.0 = Color::srgb(0.7, 0.72, 0.8);
            }
        }
    }
}

fn handle_mix_button(
    interactions: Query<&Interaction, (Changed<Interaction>, With<MixButton>)>,
    picks: Option<Res<MixPicks>>,
    registry: Res<ColorRegistry>,
    mut toasts: EventWriter<Toast>,
    mut sounds: EventWriter<PlaySound>,
    mut result_card: Query<&mut BackgroundColor, With<ResultCard>>,
    mut name_text: Query<
        (&mut Text, &mut TextColor),
        (With<ResultNameText>, Without<ResultHexText>),
    >,
    mut hex_text: Query<
        (&mut Text, &mut TextColor),
        (With<ResultHexText>, Without<ResultNameText>),
    >,
    mut listen: Query<(&mut SoundButton, &mut Visibility), With<ResultListenButton>>,
) {
    let pressed = interactions.iter().any(|i| *i == Interaction::Pressed);
    if !pressed {
        return;
    }
    let records = picks.as_ref().and_then(|p| {
        let first = registry.find_by_id(p.a?)?;
        let second = registry.find_by_id(p.b?)?;
        Some((first, second))
    });
    let Some((first, second)) = records else {
        // an unset pick is ignored, no state changes
        toasts.write(Toast("Pick two colors first!".into()));
        return;
    };

    let result = mixer::mix(first.english, second.english);
    info!(
        target: "mixing",
        "mixed {} + {} -> {} ({})",
        first.english, second.english, result.name, result.hex
    );
    let text_color = result.rgb.contrast_text().to_bevy();
    if let Ok(mut bg) = result_card.single_mut() {
        bg.0 = result.rgb.to_bevy();
    }
    if let Ok((mut text, mut color)) = name_text.single_mut() {
        *text = Text::new(result.name.clone());
        color.0 = text_color;
    }
    if let Ok((mut text, mut color)) = hex_text.single_mut() {
        *text = Text::new(result.hex.clone());
        color.0 = text_color;
    }
    if let Ok((mut sound, mut visibility)) = listen.single_mut() {
        match result.audio {
            Some(path) => {
                sound.0 = path;
                *visibility = Visibility::Inherited;
                sounds.write(PlaySound(path.to_string()));
            }
            None => {
                *visibility = Visibility::Hidden;
            }
        }
    }
}

fn despawn_mixing(mut commands: Commands, roots: Query<Entity, With<MixingUiRoot>>) {
    for entity in &roots {
        commands.entity(entity).despawn();
    }
    commands.remove_resource::<MixPicks>();
}
