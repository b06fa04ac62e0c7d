mod button;

pub use button::Button;

use macroquad::prelude::{screen_width, screen_height};
use crate::application::{Command, GameState};
use crate::domain::{Category, PresetChoice};
use crate::i18n::Strings;
use crate::input::{CanvasGeometry, SurfaceRect};

pub const DEFAULT_PANEL_WIDTH: f32 = 280.0;
/// Narrowest panel that still fits two preset buttons per row
pub const MIN_PANEL_WIDTH: f32 = 220.0;
pub const PANEL_PADDING: f32 = 12.0;
pub const BUTTON_HEIGHT: f32 = 26.0;
pub const BUTTON_GAP: f32 = 4.0;

const RUN_ROW_TOP: f32 = 58.0;
const SPEED_ROW_TOP: f32 = 90.0;
/// Baseline of the "Presets" title
pub const PRESETS_TITLE_Y: f32 = 134.0;
const PRESETS_TOP: f32 = 142.0;
const HEADING_HEIGHT: f32 = 18.0;

/// Category title above a group of preset buttons
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Heading {
    pub label: &'static str,
    pub x: f32,
    /// Text baseline
    pub y: f32,
}

/// Everything placed in the panel for one frame
pub struct PanelLayout {
    pub x: f32,
    pub width: f32,
    pub buttons: Vec<(Button, Command)>,
    pub headings: Vec<Heading>,
    /// Center of the gap between the speed buttons
    pub speed_label: (f32, f32),
    /// Y below the last button, where the status text starts
    pub status_top: f32,
}

/// Side panel docked to the right edge of the window
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Panel {
    width: f32,
}

impl Panel {
    pub fn new(width: f32) -> Self {
        Self { width: width.max(MIN_PANEL_WIDTH) }
    }

    pub const fn width(&self) -> f32 {
        self.width
    }

    /// X position where the panel starts
    pub fn x(&self) -> f32 {
        screen_width() - self.width
    }

    /// Area left of the panel that hosts the grid, for a given screen size
    pub fn grid_area_in(&self, screen: (f32, f32)) -> SurfaceRect {
        SurfaceRect::new(0.0, 0.0, (screen.0 - self.width).max(0.0), screen.1)
    }

    /// Where the grid canvas is shown this frame, letterboxed into the grid area
    pub fn grid_surface(&self, canvas: &CanvasGeometry) -> SurfaceRect {
        let area = self.grid_area_in((screen_width(), screen_height()));
        SurfaceRect::fit(canvas.pixel_width, canvas.pixel_height, area)
    }

    pub fn layout(&self, state: &GameState) -> PanelLayout {
        layout_panel(self.x(), self.width, state)
    }
}

impl Default for Panel {
    fn default() -> Self {
        Self::new(DEFAULT_PANEL_WIDTH)
    }
}

/// Panel layout starting at `x`
pub fn layout_panel(x: f32, width: f32, state: &GameState) -> PanelLayout {
    let text = state.language.strings();
    let paused = !state.is_running();
    let sx = x + PANEL_PADDING;
    let w = width - 2.0 * PANEL_PADDING;
    let third = (w - 2.0 * BUTTON_GAP) / 3.0;
    let half = (w - BUTTON_GAP) / 2.0;

    let run_label = if paused { text.run } else { text.pause };
    let mut buttons = vec![
        (
            Button::new(sx, RUN_ROW_TOP, third, BUTTON_HEIGHT, run_label).highlighted(!paused),
            Command::ToggleRun,
        ),
        (
            Button::new(sx + third + BUTTON_GAP, RUN_ROW_TOP, third, BUTTON_HEIGHT, text.step).enabled(paused),
            Command::Step,
        ),
        (
            Button::new(sx + 2.0 * (third + BUTTON_GAP), RUN_ROW_TOP, third, BUTTON_HEIGHT, text.clear)
                .enabled(paused),
            Command::Clear,
        ),
        (Button::new(sx, SPEED_ROW_TOP, third, BUTTON_HEIGHT, "-"), Command::SpeedDown),
        (
            Button::new(sx + 2.0 * (third + BUTTON_GAP), SPEED_ROW_TOP, third, BUTTON_HEIGHT, "+"),
            Command::SpeedUp,
        ),
    ];
    let speed_label = (sx + w / 2.0, SPEED_ROW_TOP + BUTTON_HEIGHT / 2.0);

    let mut headings = Vec::with_capacity(Category::ALL.len());
    let mut y = PRESETS_TOP;
    for category in Category::ALL {
        headings.push(Heading { label: text.category(category), x: sx, y: y + HEADING_HEIGHT - 5.0 });
        y += HEADING_HEIGHT;

        let choices: Vec<_> = PresetChoice::in_category(category).collect();
        buttons.extend(choices.iter().enumerate().map(|(i, &choice)| {
            let (col, row) = (i % 2, i / 2);
            let bx = sx + col as f32 * (half + BUTTON_GAP);
            let by = y + row as f32 * (BUTTON_HEIGHT + BUTTON_GAP);
            (
                Button::new(bx, by, half, BUTTON_HEIGHT, preset_label(choice, text)).enabled(paused),
                Command::Preset(choice),
            )
        }));
        y += choices.len().div_ceil(2) as f32 * (BUTTON_HEIGHT + BUTTON_GAP);
    }

    let below = y + 8.0;
    buttons.push((Button::new(sx, below, half, BUTTON_HEIGHT, text.info), Command::ToggleInfo));
    buttons.push((
        Button::new(sx + half + BUTTON_GAP, below, half, BUTTON_HEIGHT, text.language),
        Command::ToggleLanguage,
    ));

    PanelLayout {
        x,
        width,
        buttons,
        headings,
        speed_label,
        status_top: below + BUTTON_HEIGHT + 24.0,
    }
}

fn preset_label(choice: PresetChoice, text: &Strings) -> &'static str {
    match choice {
        PresetChoice::Pattern(pattern) => pattern.name,
        PresetChoice::Random => text.random,
    }
}
