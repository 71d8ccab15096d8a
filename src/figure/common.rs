use egui::{Color32, Pos2};

use crate::point::Point;

/// Side length of the square selection handles drawn on a selected figure.
pub const HANDLE_SIZE: f32 = 8.0;
/// How close the pointer must be to a handle to grab it.
pub const HANDLE_GRAB_RADIUS: f32 = 10.0;
/// Color a blank figure starts out with.
pub const DEFAULT_COLOR: Color32 = Color32::BLACK;

pub(crate) const LINE_THICKNESS: f32 = 3.0;
pub(crate) const LINE_HIT_TOLERANCE: f32 = 5.0;

/// Distance from a point to a line segment (hit testing for thin variants).
pub(crate) fn distance_to_segment(point: Pos2, line_start: Pos2, line_end: Pos2) -> f32 {
    let line_vec = line_end - line_start;
    let point_vec = point - line_start;

    let line_len = line_vec.length();
    if line_len == 0.0 {
        return point_vec.length();
    }

    let t = ((point_vec.x * line_vec.x + point_vec.y * line_vec.y) / line_len).clamp(0.0, line_len);
    let projection = line_start + (line_vec * t / line_len);
    (point - projection).length()
}

/// Ray-casting containment test for an arbitrary polygon.
pub(crate) fn point_in_polygon(vertices: &[Point], x: i32, y: i32) -> bool {
    if vertices.len() < 3 {
        return false;
    }

    let (px, py) = (x as f32, y as f32);
    let mut inside = false;
    let mut j = vertices.len() - 1;
    for i in 0..vertices.len() {
        let (xi, yi) = (vertices[i].x as f32, vertices[i].y as f32);
        let (xj, yj) = (vertices[j].x as f32, vertices[j].y as f32);
        if (yi > py) != (yj > py) && px < (xj - xi) * (py - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}
