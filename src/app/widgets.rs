//! Shared UI building blocks: navigation buttons, hover tinting, text helpers.

use bevy::color::Luminance;
use bevy::prelude::*;

use super::state::AppState;

/// Backdrop shared by every screen root.
pub const BACKDROP: Color = Color::srgb(0.07, 0.08, 0.14);

pub struct WidgetsPlugin;

impl Plugin for WidgetsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (nav_button_system, button_tint_system));
    }
}

/// Pressing the carrying button routes to the given screen.
#[derive(Component, Debug, Clone, Copy)]
pub struct NavTarget(pub AppState);

/// Hover/press tint triple derived from a base color.
#[derive(Component, Debug, Clone, Copy)]
pub struct ButtonTint {
    pub normal: Color,
    pub hovered: Color,
    pub pressed: Color,
}

impl ButtonTint {
    pub fn from_base(base: Color) -> Self {
        Self {
            normal: base,
            hovered: base.lighter(0.05),
            pressed: base.darker(0.05),
        }
    }
}

/// Standard clickable button node.
pub fn button_node() -> Node {
    Node {
        padding: UiRect::axes(Val::Px(18.0), Val::Px(10.0)),
        justify_content: JustifyContent::Center,
        align_items: AlignItems::Center,
        ..default()
    }
}

/// Text bundle shorthand used by every screen.
pub fn label(text: impl Into<String>, font_size: f32, color: Color) -> (Text, TextFont, TextColor) {
    (
        Text::new(text.into()),
        TextFont {
            font_size,
            ..default()
        },
        TextColor(color),
    )
}

fn nav_button_system(
    interactions: Query<(&Interaction, &NavTarget), (Changed<Interaction>, With<Button>)>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    for (interaction, nav) in &interactions {
        if *interaction == Interaction::Pressed {
            next_state.set(nav.0);
        }
    }
}

fn button_tint_system(
    mut buttons: Query<(&Interaction, &ButtonTint, &mut BackgroundColor), Changed<Interaction>>,
) {
    for (interaction, tint, mut bg) in &mut buttons {
        bg.0 = match interaction {
            Interaction::Pressed => tint.pressed,
            Interaction::Hovered => tint.hovered,
            Interaction::None => tint.normal,
        };
    }
}
