//! Persistent menu panels.
//!
//! All three panels are spawned once at startup and toggled through
//! `Visibility`, one per game state. Visibility changes only happen in
//! `OnEnter`/`OnExit` systems, so panel state and game state always agree.
//!
//! Panels are read-only: navigation is entirely gamepad buttons, handled by
//! the flow dispatch, so the panels carry button hints instead of clickable
//! widgets.

use bevy::prelude::*;
use bevy::render::camera::ClearColorConfig;

/// Marker for the main menu panel.
#[derive(Component)]
pub struct MainMenuPanel;

/// Marker for the pause overlay panel.
#[derive(Component)]
pub struct PauseMenuPanel;

/// Marker for the game over panel.
#[derive(Component)]
pub struct GameOverPanel;

/// Spawn the UI camera and all three panels, hidden.
pub fn spawn_panels(mut commands: Commands) {
    // UI camera, drawn over the 3D chase camera
    commands.spawn((
        Camera2d,
        Camera {
            order: 1,
            clear_color: ClearColorConfig::None,
            ..default()
        },
        IsDefaultUiCamera,
    ));

    let main_menu = spawn_panel(
        &mut commands,
        "RUSHLINE",
        Color::srgb(0.9, 0.85, 0.6),
        &["(A) Start Run", "(Y) About", "(B) Quit"],
        Color::srgb(0.05, 0.05, 0.08),
    );
    commands.entity(main_menu).insert(MainMenuPanel);

    let pause = spawn_panel(
        &mut commands,
        "PAUSED",
        Color::srgb(0.8, 0.8, 0.85),
        &["(A) Resume", "(Y) Restart", "(B) Quit to Menu"],
        Color::srgba(0.0, 0.0, 0.0, 0.7),
    );
    commands.entity(pause).insert(PauseMenuPanel);

    let game_over = spawn_panel(
        &mut commands,
        "WRECKED",
        Color::srgb(0.85, 0.25, 0.2),
        &["(A) Retry", "(B) Quit to Menu"],
        Color::srgba(0.1, 0.0, 0.0, 0.85),
    );
    commands.entity(game_over).insert(GameOverPanel);
}

/// Spawn one full-screen panel with a title and gamepad hints.
fn spawn_panel(
    commands: &mut Commands,
    title: &str,
    title_color: Color,
    hints: &[&str],
    background: Color,
) -> Entity {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(background),
            Visibility::Hidden,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(title),
                TextFont {
                    font_size: 72.0,
                    ..default()
                },
                TextColor(title_color),
                Node {
                    margin: UiRect::bottom(Val::Px(50.0)),
                    ..default()
                },
            ));

            for hint in hints {
                parent.spawn((
                    Text::new(*hint),
                    TextFont {
                        font_size: 28.0,
                        ..default()
                    },
                    TextColor(Color::srgb(0.8, 0.8, 0.85)),
                    Node {
                        margin: UiRect::all(Val::Px(8.0)),
                        ..default()
                    },
                ));
            }
        })
        .id()
}

pub fn show_main_menu(mut query: Query<&mut Visibility, With<MainMenuPanel>>) {
    for mut visibility in &mut query {
        *visibility = Visibility::Visible;
    }
}

pub fn hide_main_menu(mut query: Query<&mut Visibility, With<MainMenuPanel>>) {
    for mut visibility in &mut query {
        *visibility = Visibility::Hidden;
    }
}

pub fn show_pause_menu(mut query: Query<&mut Visibility, With<PauseMenuPanel>>) {
    for mut visibility in &mut query {
        *visibility = Visibility::Visible;
    }
}

pub fn hide_pause_menu(mut query: Query<&mut Visibility, With<PauseMenuPanel>>) {
    for mut visibility in &mut query {
        *visibility = Visibility::Hidden;
    }
}

pub fn show_game_over(mut query: Query<&mut Visibility, With<GameOverPanel>>) {
    for mut visibility in &mut query {
        *visibility = Visibility::Visible;
    }
}

pub fn hide_game_over(mut query: Query<&mut Visibility, With<GameOverPanel>>) {
    for mut visibility in &mut query {
        *visibility = Visibility::Hidden;
    }
}
