mod mapper;

pub use mapper::{SurfaceRect, CanvasGeometry, map_pointer_to_cell};

use macroquad::prelude::*;
use crate::application::{Command, GameState};
use crate::domain::{PresetChoice, presets};
use crate::ui::Button;

/// Keyboard shortcuts, checked once per frame
const KEY_BINDINGS: [(KeyCode, Command); 16] = [
    (KeyCode::R, Command::ToggleRun),
    (KeyCode::Enter, Command::ToggleRun),
    (KeyCode::Space, Command::Step),
    (KeyCode::C, Command::Clear),
    (KeyCode::Up, Command::SpeedUp),
    (KeyCode::Down, Command::SpeedDown),
    (KeyCode::L, Command::ToggleLanguage),
    (KeyCode::I, Command::ToggleInfo),
    (KeyCode::Key0, Command::Preset(PresetChoice::Random)),
    (KeyCode::Key1, Command::Preset(PresetChoice::Pattern(&presets::BLOCK))),
    (KeyCode::Key2, Command::Preset(PresetChoice::Pattern(&presets::BLINKER))),
    (KeyCode::Key3, Command::Preset(PresetChoice::Pattern(&presets::BEACON))),
    (KeyCode::Key4, Command::Preset(PresetChoice::Pattern(&presets::TOAD))),
    (KeyCode::Key5, Command::Preset(PresetChoice::Pattern(&presets::PULSAR))),
    (KeyCode::Key6, Command::Preset(PresetChoice::Pattern(&presets::GLIDER))),
    (KeyCode::Key7, Command::Preset(PresetChoice::Pattern(&presets::LWSS))),
];

/// Commands triggered by keys pressed this frame
pub fn keyboard_commands() -> Vec<Command> {
    KEY_BINDINGS
        .iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .map(|(_, command)| *command)
        .collect()
}

/// Commands triggered by buttons clicked this frame
pub fn button_commands(buttons: &[(Button, Command)], mouse_pos: (f32, f32)) -> Vec<Command> {
    buttons
        .iter()
        .filter(|(btn, _)| btn.is_clicked(mouse_pos))
        .map(|(_, command)| *command)
        .collect()
}

/// Translate mouse presses and drags on the grid surface into strokes.
/// The state ignores all of it while the simulation is running.
pub fn handle_mouse_paint(
    state: &mut GameState,
    surface: SurfaceRect,
    canvas: &CanvasGeometry,
    mouse_pos: (f32, f32),
) {
    let inside = surface.contains(mouse_pos);
    let cell = inside
        .then(|| map_pointer_to_cell(mouse_pos, surface, canvas))
        .flatten();

    if let Some(cell) = cell {
        if is_mouse_button_pressed(MouseButton::Left) {
            let force_alive = is_mouse_button_down(MouseButton::Right);
            state.begin_stroke(cell, force_alive);
        } else if is_mouse_button_down(MouseButton::Left) {
            state.continue_stroke(cell);
        }
    }

    // Release or leaving the surface ends the stroke
    if is_mouse_button_released(MouseButton::Left) || (!inside && state.is_drawing()) {
        state.end_stroke();
    }
}

/// Same stroke model for touch screens; only the first finger draws
pub fn handle_touch_paint(state: &mut GameState, surface: SurfaceRect, canvas: &CanvasGeometry) {
    let Some(touch) = touches().into_iter().next() else {
        return;
    };
    let pos = (touch.position.x, touch.position.y);
    match touch.phase {
        TouchPhase::Started => {
            if surface.contains(pos) {
                if let Some(cell) = map_pointer_to_cell(pos, surface, canvas) {
                    state.begin_touch(cell);
                }
            }
        }
        TouchPhase::Moved | TouchPhase::Stationary => {
            if let Some(cell) = map_pointer_to_cell(pos, surface, canvas) {
                state.continue_stroke(cell);
            }
        }
        TouchPhase::Ended | TouchPhase::Cancelled => state.end_stroke(),
    }
}
