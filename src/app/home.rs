use bevy::prelude::*;

use super::state::AppState;
use super::widgets::{button_node, label, ButtonTint, NavTarget, BACKDROP};

pub struct HomePlugin;

impl Plugin for HomePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::Home), spawn_home)
            .add_systems(OnExit(AppState::Home), despawn_home);
    }
}

#[derive(Component)]
struct HomeUiRoot;

const NAV_BUTTON_BASE: Color = Color::srgb(0.25, 0.32, 0.65);

fn spawn_home(mut commands: Commands) {
    info!(target: "home", "entering home screen");
    commands
        .spawn((
            HomeUiRoot,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(14.0),
                ..default()
            },
            BackgroundColor(BACKDROP),
        ))
        .with_children(|root| {
            root.spawn(label("Rainbow Learners", 52.0, Color::WHITE));
            root.spawn(label(
                "Look, listen, mix and play: learn your colors in English!",
                20.0,
                Color::srgb(0.85, 0.87, 0.95),
            ));
            root.spawn(Node {
                flex_direction: FlexDirection::Row,
                column_gap: Val::Px(12.0),
                margin: UiRect::top(Val::Px(18.0)),
                ..default()
            })
            .with_children(|row| {
                for (text, target) in [
                    ("Color Gallery", AppState::Gallery),
                    ("Mixing Lab", AppState::Mixing),
                    ("Color Quiz", AppState::Quiz),
                ] {
                    row.spawn((
                        Button,
                        NavTarget(target),
                        ButtonTint::from_base(NAV_BUTTON_BASE),
                        button_node(),
                        BackgroundColor(NAV_BUTTON_BASE),
                        BorderRadius::all(Val::Px(10.0)),
                    ))
                    .with_children(|button| {
                        button.spawn(label(text, 24.0, Color::WHITE));
                    });
                }
            });
        });
}

fn despawn_home(mut commands: Commands, roots: Query<Entity, With<HomeUiRoot>>) {
    for entity in &roots {
        commands.entity(entity).despawn();
    }
}
