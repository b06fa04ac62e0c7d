//! Pointer position to grid cell.
//!
//! The grid is painted into an internal canvas of `cols * cell_size` by
//! `rows * cell_size` pixels, and that canvas is shown on screen inside a
//! [`SurfaceRect`] that may be larger or smaller. Mapping undoes the display
//! scaling before dividing by the cell size.

/// Where the canvas is displayed, in screen coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl SurfaceRect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Zero or negative size, e.g. a window minimized to nothing
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    pub fn contains(&self, (px, py): (f32, f32)) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }

    /// Largest rect with the canvas aspect ratio that fits the area,
    /// centered in it
    pub fn fit(canvas_width: f32, canvas_height: f32, area: SurfaceRect) -> Self {
        if canvas_width <= 0.0 || canvas_height <= 0.0 || area.is_empty() {
            return Self::new(area.x, area.y, 0.0, 0.0);
        }
        let scale = (area.width / canvas_width).min(area.height / canvas_height);
        let width = canvas_width * scale;
        let height = canvas_height * scale;
        Self::new(
            area.x + (area.width - width) * 0.5,
            area.y + (area.height - height) * 0.5,
            width,
            height,
        )
    }
}

/// Internal pixel size of the grid canvas
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasGeometry {
    pub pixel_width: f32,
    pub pixel_height: f32,
    pub cell_size: f32,
    pub rows: usize,
    pub cols: usize,
}

impl CanvasGeometry {
    pub fn for_grid(rows: usize, cols: usize, cell_size: f32) -> Self {
        Self {
            pixel_width: cols as f32 * cell_size,
            pixel_height: rows as f32 * cell_size,
            cell_size,
            rows,
            cols,
        }
    }
}

/// Map a pointer position to (row, col), clamped into the grid.
/// Returns `None` while the surface has no display size.
pub fn map_pointer_to_cell(
    pointer: (f32, f32),
    surface: SurfaceRect,
    canvas: &CanvasGeometry,
) -> Option<(usize, usize)> {
    if surface.is_empty() || canvas.cell_size <= 0.0 || canvas.rows == 0 || canvas.cols == 0 {
        return None;
    }
    let scale_x = canvas.pixel_width / surface.width;
    let scale_y = canvas.pixel_height / surface.height;

    let col = ((pointer.0 - surface.x) * scale_x / canvas.cell_size).floor();
    let row = ((pointer.1 - surface.y) * scale_y / canvas.cell_size).floor();

    Some((clamp_index(row, canvas.rows), clamp_index(col, canvas.cols)))
}

fn clamp_index(value: f32, len: usize) -> usize {
    // `as` saturates, NaN becomes 0
    (value.max(0.0) as usize).min(len - 1)
}
