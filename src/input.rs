//! Keyboard shortcuts for simulation control.
//!
//! Keys only enqueue [`ControlCommand`]s; the fixed tick applies them.

use bevy::prelude::*;

use crate::types::{ControlCommand, ControlQueue};

/// Plugin providing keyboard input handling.
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ControlQueue>()
            .add_systems(Update, keyboard_shortcuts);
    }
}

/// Map a freshly pressed key to a control command.
pub fn command_for_key(key: KeyCode) -> Option<ControlCommand> {
    match key {
        // '+' shares a key with '=' on most layouts.
        KeyCode::Equal | KeyCode::NumpadAdd => Some(ControlCommand::IncreaseTimeFactor),
        KeyCode::Minus | KeyCode::NumpadSubtract => Some(ControlCommand::DecreaseTimeFactor),
        KeyCode::Space => Some(ControlCommand::TogglePause),
        _ => None,
    }
}

/// Enqueue commands for keys pressed this frame.
fn keyboard_shortcuts(keys: Res<ButtonInput<KeyCode>>, mut queue: ResMut<ControlQueue>) {
    for &key in keys.get_just_pressed() {
        if let Some(command) = command_for_key(key) {
            queue.push(command);
        }
    }
}
