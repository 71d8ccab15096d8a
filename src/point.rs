use egui::{Pos2, pos2};

/// A 2D integer coordinate on the canvas, created once per click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Convert to an egui position for painting.
    pub fn to_pos2(self) -> Pos2 {
        pos2(self.x as f32, self.y as f32)
    }

    /// Snap a pointer position to the nearest canvas coordinate.
    pub fn from_pos2(pos: Pos2) -> Self {
        Self::new(pos.x.round() as i32, pos.y.round() as i32)
    }
}
