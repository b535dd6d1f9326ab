//! Quiz screen: prompt card, four answer buttons, hearts and countdown.
//!
//! The one-second countdown is the [`QuestionTimer`] resource, scoped to the
//! active question: inserted when a question becomes active and removed on
//! every path out of "awaiting answer" (correct answer, timeout, game over,
//! screen exit). A removed resource cannot keep mutating quiz state.

use bevy::prelude::*;
use rand::seq::SliceRandom;

use crate::audio::{pronunciation_path, PlaySound, SoundButton};
use crate::core::config::GameConfig;
use crate::core::palette;
use crate::core::quiz::{QuizFeedback, QuizQuestion, QuizRules, QuizState};

use super::feedback::Toast;
use super::state::AppState;
use super::widgets::{button_node, label, ButtonTint, NavTarget, BACKDROP};

/// Repeating one-second countdown. Removing the resource cancels it.
#[derive(Resource, Deref, DerefMut)]
pub struct QuestionTimer(pub Timer);

impl Default for QuestionTimer {
    fn default() -> Self {
        Self(Timer::from_seconds(1.0, TimerMode::Repeating))
    }
}

pub struct QuizPlugin;

impl Plugin for QuizPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::Quiz), enter_quiz)
            .add_systems(OnExit(AppState::Quiz), exit_quiz)
            .add_systems(
                Update,
                (
                    countdown_system,
                    handle_option_buttons,
                    handle_advance_buttons,
                    update_hud,
                )
                    .run_if(in_state(AppState::Quiz)),
            );
    }
}

#[derive(Component)]
struct QuizUiRoot;

/// Container the per-question panel is rebuilt under.
#[derive(Component)]
struct QuestionHost;

/// Subtree replaced wholesale on every advance.
#[derive(Component)]
struct QuestionPanel;

#[derive(Component, Debug, Clone, Copy)]
struct OptionButton(&'static str);

#[derive(Component)]
struct NextButton;

#[derive(Component)]
struct RestartButton;

#[derive(Component)]
struct GameOverOverlay;

#[derive(Component)]
struct LivesText;

#[derive(Component)]
struct TimeText;

const ACTION_BASE: Color = Color::srgb(0.25, 0.32, 0.65);
const PANEL_BG: Color = Color::srgb(0.13, 0.14, 0.22);

const PRAISE: [&str; 4] = [
    "Great job!",
    "Well done!",
    "You found it!",
    "Fantastic!",
];

fn praise_line() -> &'static str {
    PRAISE
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(PRAISE[0])
}

fn enter_quiz(mut commands: Commands, cfg: Res<GameConfig>) {
    let quiz = QuizState::new(QuizRules::from(&cfg.quiz));
    info!(
        target: "quiz",
        "quiz started: {} lives, {}s per question",
        quiz.lives(),
        quiz.time_remaining()
    );

    let mut host = Entity::PLACEHOLDER;
    commands
        .spawn((
            QuizUiRoot,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                padding: UiRect::all(Val::Px(20.0)),
                row_gap: Val::Px(14.0),
                ..default()
            },
            BackgroundColor(BACKDROP),
        ))
        .with_children(|root| {
            // top bar
            root.spawn(Node {
                width: Val::Percent(100.0),
                flex_direction: FlexDirection::Row,
                justify_content: JustifyContent::SpaceBetween,
                align_items: AlignItems::Center,
                ..default()
            })
            .with_children(|bar| {
                bar.spawn((
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
                bar.spawn((
                    LivesText,
                    Text::new(""),
                    TextFont {
                        font_size: 22.0,
                        ..default()
                    },
                    TextColor(Color::srgb(0.95, 0.55, 0.6)),
                ));
                bar.spawn((
                    TimeText,
                    Text::new(""),
                    TextFont {
                        font_size: 22.0,
                        ..default()
                    },
                    TextColor(Color::WHITE),
                ));
            });

            host = root
                .spawn((
                    QuestionHost,
                    Node {
                        flex_direction: FlexDirection::Column,
                        align_items: AlignItems::Center,
                        flex_grow: 1.0,
                        justify_content: JustifyContent::Center,
                        ..default()
                    },
                ))
                .id();

            root.spawn((
                Button,
                NextButton,
                ButtonTint::from_base(ACTION_BASE),
                button_node(),
                BackgroundColor(ACTION_BASE),
                BorderRadius::all(Val::Px(10.0)),
            ))
            .with_children(|b| {
                b.spawn(label("Next question", 20.0, Color::WHITE));
            });

            // game-over overlay, revealed when the last life goes
            root.spawn((
                GameOverOverlay,
                Visibility::Hidden,
                Node {
                    position_type: PositionType::Absolute,
                    width: Val::Percent(100.0),
                    height: Val::Percent(100.0),
                    justify_content: JustifyContent::Center,
                    align_items: AlignItems::Center,
                    ..default()
                },
                BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
            ))
            .with_children(|overlay| {
                overlay
                    .spawn((
                        Node {
                            flex_direction: FlexDirection::Column,
                            align_items: AlignItems::Center,
                            padding: UiRect::all(Val::Px(28.0)),
                            row_gap: Val::Px(12.0),
                            ..default()
                        },
                        BackgroundColor(PANEL_BG),
                        BorderRadius::all(Val::Px(16.0)),
                    ))
                    .with_children(|panel| {
                        panel.spawn(label("Game over!", 40.0, Color::WHITE));
                        panel.spawn(label(
                            "You ran out of lives.",
                            20.0,
                            Color::srgb(0.85, 0.87, 0.95),
                        ));
                        panel
                            .spawn((
                                Button,
                                RestartButton,
                                ButtonTint::from_base(ACTION_BASE),
                                button_node(),
                                BackgroundColor(ACTION_BASE),
                                BorderRadius::all(Val::Px(10.0)),
                            ))
                            .with_children(|b| {
                                b.spawn(label("Play again", 20.0, Color::WHITE));
                            });
                    });
            });
        });

    spawn_question_panel(&mut commands, host, quiz.current_question());
    commands.insert_resource(QuestionTimer::default());
    commands.insert_resource(quiz);
}

/// Build the per-question subtree: prompt card tinted with the answer's
/// swatch, a listen button and the four option buttons.
fn spawn_question_panel(commands: &mut Commands, host: Entity, question: &QuizQuestion) {
    let swatch = palette::swatch(question.correct);
    let audio = question.audio;
    let options = question.options;
    commands.entity(host).with_children(|host| {
        host.spawn((
            QuestionPanel,
            Node {
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                row_gap: Val::Px(14.0),
                ..default()
            },
        ))
        .with_children(|panel| {
            panel.spawn(label("What color is this?", 26.0, Color::WHITE));
            panel.spawn((
                Node {
                    width: Val::Px(240.0),
                    height: Val::Px(150.0),
                    ..default()
                },
                BackgroundColor(swatch.to_bevy()),
                BorderRadius::all(Val::Px(14.0)),
            ));
            panel
                .spawn((
                    Button,
                    SoundButton(audio),
                    ButtonTint::from_base(PANEL_BG),
                    button_node(),
                    BackgroundColor(PANEL_BG),
                    BorderRadius::all(Val::Px(8.0)),
                ))
                .with_children(|b| {
                    b.spawn(label("Hear the answer", 15.0, Color::WHITE));
                });
            panel
                .spawn(Node {
                    flex_direction: FlexDirection::Row,
                    flex_wrap: FlexWrap::Wrap,
                    justify_content: JustifyContent::Center,
                    column_gap: Val::Px(10.0),
                    row_gap: Val::Px(10.0),
                    ..default()
                })
                .with_children(|row| {
                    for option in options {
                        let tint = palette::swatch(option);
                        row.spawn((
                            Button,
                            OptionButton(option),
                            ButtonTint::from_base(tint.to_bevy()),
                            button_node(),
                            BackgroundColor(tint.to_bevy()),
                            BorderRadius::all(Val::Px(10.0)),
                        ))
                        .with_children(|b| {
                            b.spawn(label(option, 22.0, tint.contrast_text().to_bevy()));
                        });
                    }
                });
        });
    });
}

fn handle_option_buttons(
    interactions: Query<(&Interaction, &OptionButton), (Changed<Interaction>, With<Button>)>,
    quiz: Option<ResMut<QuizState>>,
    mut commands: Commands,
    mut sounds: EventWriter<PlaySound>,
    mut toasts: EventWriter<Toast>,
    mut overlay: Query<&mut Visibility, With<GameOverOverlay>>,
) {
    let Some(mut quiz) = quiz else {
        return;
    };
    for (interaction, option) in &interactions {
        if *interaction != Interaction::Pressed {
            continue;
        }
        // play the picked option's pronunciation either way
        sounds.write(PlaySound(pronunciation_path(option.0)));
        match quiz.select_option(option.0) {
            QuizFeedback::Correct => {
                info!(target: "quiz", "question {} answered", quiz.current_question().id);
                commands.remove_resource::<QuestionTimer>();
                toasts.write(Toast(format!("{} Tap Next to continue.", praise_line())));
            }
            QuizFeedback::Incorrect { lives_left } => {
                let plural = if lives_left == 1 { "life" } else { "lives" };
                toasts.write(Toast(format!(
                    "Not quite, try again! {lives_left} {plural} left."
                )));
            }
            QuizFeedback::GameOver => {
                info!(target: "quiz", "out of lives on question {}", quiz.current_question().id);
                commands.remove_resource::<QuestionTimer>();
                if let Ok(mut visibility) = overlay.single_mut() {
                    *visibility = Visibility::Visible;
                }
            }
            _ => {}
        }
    }
}

/// Counts the active question down once per second and handles the floor.
pub fn countdown_system(
    time: Res<Time>,
    mut commands: Commands,
    timer: Option<ResMut<QuestionTimer>>,
    quiz: Option<ResMut<QuizState>>,
    mut toasts: EventWriter<Toast>,
) {
    let (Some(mut timer), Some(mut quiz)) = (timer, quiz) else {
        return;
    };
    timer.tick(time.delta());
    for _ in 0..timer.times_finished_this_tick() {
        if quiz.tick() == Some(QuizFeedback::TimedOut) {
            info!(target: "quiz", "question {} timed out", quiz.current_question().id);
            commands.remove_resource::<QuestionTimer>();
            toasts.write(Toast(
                "Time's up! You can still find the right color.".into(),
            ));
            break;
        }
    }
}

fn handle_advance_buttons(
    mut commands: Commands,
    next_presses: Query<&Interaction, (Changed<Interaction>, With<NextButton>)>,
    restart_presses: Query<&Interaction, (Changed<Interaction>, With<RestartButton>)>,
    quiz: Option<ResMut<QuizState>>,
    host: Query<Entity, With<QuestionHost>>,
    panels: Query<Entity, With<QuestionPanel>>,
    mut overlay: Query<&mut Visibility, With<GameOverOverlay>>,
    mut toasts: EventWriter<Toast>,
) {
    let pressed = next_presses
        .iter()
        .chain(restart_presses.iter())
        .any(|i| *i == Interaction::Pressed);
    if !pressed {
        return;
    }
    let Some(mut quiz) = quiz else {
        return;
    };
    match quiz.advance() {
        QuizFeedback::MustAnswerFirst => {
            toasts.write(Toast("Find the right color before moving on.".into()));
        }
        feedback @ (QuizFeedback::Advanced { .. } | QuizFeedback::Restarted) => {
            for entity in &panels {
                commands.entity(entity).despawn();
            }
            let Ok(host) = host.single() else {
                return;
            };
            spawn_question_panel(&mut commands, host, quiz.current_question());
            commands.insert_resource(QuestionTimer::default());
            if let Ok(mut visibility) = overlay.single_mut() {
                *visibility = Visibility::Hidden;
            }
            match feedback {
                QuizFeedback::Advanced { wrapped: true } => {
                    toasts.write(Toast(
                        "You finished every color! Starting the deck again.".into(),
                    ));
                }
                QuizFeedback::Restarted => {
                    toasts.write(Toast("New game, lives refilled. Good luck!".into()));
                }
                _ => {}
            }
            info!(target: "quiz", "advanced to question {}", quiz.current_question().id);
        }
        _ => {}
    }
}

fn update_hud(
    quiz: Option<Res<QuizState>>,
    mut lives_text: Query<&mut Text, (With<LivesText>, Without<TimeText>)>,
    mut time_text: Query<&mut Text, (With<TimeText>, Without<LivesText>)>,
) {
    let Some(quiz) = quiz else {
        return;
    };
    if !quiz.is_changed() {
        return;
    }
    if let Ok(mut text) = lives_text.single_mut() {
        *text = Text::new(format!("Lives: {}", quiz.lives()));
    }
    if let Ok(mut text) = time_text.single_mut() {
        *text = Text::new(format!("Time: {}s", quiz.time_remaining()));
    }
}

fn exit_quiz(mut commands: Commands, roots: Query<Entity, With<QuizUiRoot>>) {
    for entity in &roots {
        commands.entity(entity).despawn();
    }
    // cancel the countdown with the screen, never leave it running
    commands.remove_resource::<QuestionTimer>();
    commands.remove_resource::<QuizState>();
}
