use macroquad::prelude::*;

/// Button UI component with hover and click detection
#[derive(Clone)]
pub struct Button {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    text: String,
    enabled: bool,
    color: Color,
    hover_color: Color,
}

impl Button {
    pub fn new(x: f32, y: f32, width: f32, height: f32, text: impl Into<String>) -> Self {
        Self {
            x,
            y,
            width,
            height,
            text: text.into(),
            enabled: true,
            color: Color::from_rgba(0x35, 0x35, 0x4a, 255),
            hover_color: Color::from_rgba(0x48, 0x48, 0x5a, 255),
        }
    }

    /// Greyed out and unclickable, e.g. presets while the simulation runs
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Accent fill, used for the run toggle while running
    pub fn highlighted(mut self, on: bool) -> Self {
        if on {
            self.color = Color::from_rgba(0x2f, 0x6b, 0x55, 255);
            self.hover_color = Color::from_rgba(0x3d, 0x85, 0x6b, 255);
        }
        self
    }

    pub fn label(&self) -> &str {
        &self.text
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Check if mouse is hovering over button
    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        mouse_pos.0 >= self.x
            && mouse_pos.0 <= self.x + self.width
            && mouse_pos.1 >= self.y
            && mouse_pos.1 <= self.y + self.height
    }

    /// Draw button with hover effect
    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let color = match (self.enabled, self.is_hovered(mouse_pos)) {
            (false, _) => Color::from_rgba(0x25, 0x25, 0x30, 255),
            (true, true) => self.hover_color,
            (true, false) => self.color,
        };
        let text_color = if self.enabled { WHITE } else { GRAY };

        draw_rectangle(self.x, self.y, self.width, self.height, color);
        draw_rectangle_lines(self.x, self.y, self.width, self.height, 1.0, Color::from_rgba(0x50, 0x50, 0x58, 255));

        let text_size = measure_text(&self.text, None, 18, 1.0);
        draw_text(
            &self.text,
            self.x + (self.width - text_size.width) / 2.0,
            self.y + (self.height + text_size.height) / 2.0,
            18.0,
            text_color,
        );
    }

    /// Check if button was clicked this frame
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.enabled && self.is_hovered(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }
}
