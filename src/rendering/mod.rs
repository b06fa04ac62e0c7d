use macroquad::prelude::*;
use crate::application::GameState;
use crate::domain::GridState;
use crate::input::{CanvasGeometry, SurfaceRect};
use crate::ui::{Panel, PanelLayout, PANEL_PADDING, PRESETS_TITLE_Y};

const BACKGROUND: Color = Color::new(0x1a as f32 / 255.0, 0x1a as f32 / 255.0, 0x20 as f32 / 255.0, 1.0);
const ALIVE: Color = Color::new(0x7d as f32 / 255.0, 0xd3 as f32 / 255.0, 0xb0 as f32 / 255.0, 1.0);
const BORDER: Color = Color::new(0x40 as f32 / 255.0, 0x40 as f32 / 255.0, 0x48 as f32 / 255.0, 1.0);

/// Drawing target for the grid, in canvas pixel coordinates
pub trait Painter {
    /// Cover the whole `width` x `height` canvas with the background
    fn fill_background(&mut self, width: f32, height: f32);

    /// Fill a `size` x `size` block with its top-left corner at (x, y)
    fn fill_cell(&mut self, x: f32, y: f32, size: f32);
}

/// Paint the live buffer: background first, then every alive cell as a
/// block one pixel smaller than the cell so a grid gap shows between cells.
pub fn paint_grid(grid: &GridState, cell_size: f32, painter: &mut impl Painter) {
    let (rows, cols) = grid.dimensions();
    painter.fill_background(cols as f32 * cell_size, rows as f32 * cell_size);

    let block = (cell_size - 1.0).max(1.0);
    grid.alive_cells().for_each(|(row, col)| {
        painter.fill_cell(col as f32 * cell_size, row as f32 * cell_size, block);
    });
}

/// Paints canvas pixels onto the screen rect the canvas is displayed in
pub struct ScreenPainter {
    surface: SurfaceRect,
    scale_x: f32,
    scale_y: f32,
}

impl ScreenPainter {
    pub fn new(surface: SurfaceRect, canvas: &CanvasGeometry) -> Self {
        Self {
            surface,
            scale_x: surface.width / canvas.pixel_width.max(1.0),
            scale_y: surface.height / canvas.pixel_height.max(1.0),
        }
    }
}

impl Painter for ScreenPainter {
    fn fill_background(&mut self, width: f32, height: f32) {
        let (w, h) = (width * self.scale_x, height * self.scale_y);
        draw_rectangle(self.surface.x, self.surface.y, w, h, BACKGROUND);
        draw_rectangle_lines(self.surface.x, self.surface.y, w, h, 1.0, BORDER);
    }

    fn fill_cell(&mut self, x: f32, y: f32, size: f32) {
        draw_rectangle(
            self.surface.x + x * self.scale_x,
            self.surface.y + y * self.scale_y,
            (size * self.scale_x).max(1.0),
            (size * self.scale_y).max(1.0),
            ALIVE,
        );
    }
}

/// Draw the grid into its on-screen surface
pub fn draw_grid(grid: &GridState, canvas: &CanvasGeometry, surface: SurfaceRect) {
    if surface.is_empty() {
        return;
    }
    let mut painter = ScreenPainter::new(surface, canvas);
    paint_grid(grid, canvas.cell_size, &mut painter);
}

/// Helper to draw text labels
fn draw_text_label(text: &str, x: f32, y: f32, size: f32, color: Color) {
    draw_text(text, x, y, size, color);
}

/// Draw the side panel: section headers, buttons, status and key hints
pub fn draw_controls(state: &GameState, layout: &PanelLayout, mouse_pos: (f32, f32)) {
    let sx = layout.x + PANEL_PADDING;
    let text = state.language.strings();

    draw_rectangle(layout.x, 0.0, layout.width, screen_height(), Color::from_rgba(0x25, 0x25, 0x30, 255));
    draw_text_label(text.title, sx, 28.0, 24.0, WHITE);
    draw_text_label(text.controls, sx, 50.0, 16.0, GRAY);

    let speed = format!("{} {}", state.speed(), text.steps_per_second);
    let size = measure_text(&speed, None, 16, 1.0);
    let (cx, cy) = layout.speed_label;
    draw_text_label(&speed, cx - size.width / 2.0, cy + size.height / 2.0, 16.0, LIGHTGRAY);

    draw_text_label(text.presets, sx, PRESETS_TITLE_Y, 16.0, GRAY);
    layout.headings.iter().for_each(|heading| {
        draw_text_label(heading.label, heading.x, heading.y, 14.0, LIGHTGRAY);
    });

    layout.buttons.iter().for_each(|(btn, _)| btn.draw(mouse_pos));

    let (status, status_color) = if state.is_running() {
        (text.running, Color::from_rgba(0, 255, 0, 255))
    } else {
        (text.paused, Color::from_rgba(255, 165, 0, 255))
    };
    let evolve_ms = state.controller().last_advance().as_secs_f32() * 1000.0;
    let (rows, cols) = state.grid().dimensions();

    let labels = [
        (format!("{}: {}", text.generation, state.generation()), 20.0, ALIVE),
        (format!("{}: {}", text.population, state.grid().population()), 16.0, LIGHTGRAY),
        (format!("{}: {}", text.status, status), 16.0, status_color),
        (format!("{cols}x{rows} | {evolve_ms:.2} ms | FPS {}", get_fps()), 13.0, GRAY),
    ];
    labels.iter().enumerate().for_each(|(i, (label, size, color))| {
        draw_text_label(label, sx, layout.status_top + i as f32 * 22.0, *size, *color);
    });

    let hints_top = layout.status_top + labels.len() as f32 * 22.0 + 6.0;
    text.key_hints.iter().enumerate().for_each(|(i, hint)| {
        draw_text_label(hint, sx, hints_top + i as f32 * 14.0, 13.0, GRAY);
    });
}

/// Modal help box over the grid area
pub fn draw_info_overlay(state: &GameState, panel: Panel) {
    let text = state.language.strings();
    let (w, h) = (460.0, 40.0 + text.info_lines.len() as f32 * 22.0 + 30.0);
    let x = (screen_width() - panel.width() - w).max(0.0) / 2.0;
    let y = (screen_height() - h).max(0.0) / 2.0;

    draw_rectangle(x, y, w, h, Color::from_rgba(0x1a, 0x1a, 0x20, 240));
    draw_rectangle_lines(x, y, w, h, 2.0, BORDER);
    draw_text_label(text.info_title, x + 16.0, y + 30.0, 20.0, WHITE);
    text.info_lines.iter().enumerate().for_each(|(i, line)| {
        draw_text_label(line, x + 16.0, y + 60.0 + i as f32 * 22.0, 15.0, LIGHTGRAY);
    });
}
