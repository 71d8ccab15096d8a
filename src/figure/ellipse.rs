use egui::{Color32, Painter, Shape, vec2};

use super::common::DEFAULT_COLOR;
use super::{Figure, FigureError};
use crate::id_generator::generate_id;
use crate::point::Point;

/// A filled axis-aligned ellipse, built from two opposite corners of its
/// bounding box. Stored normalized like [`super::Rectangle`].
#[derive(Debug, Clone)]
pub struct Ellipse {
    id: usize,
    points: Vec<Point>,
    color: Color32,
    selected: bool,
}

impl Ellipse {
    pub fn new() -> Self {
        Self {
            id: generate_id(),
            points: Vec::new(),
            color: DEFAULT_COLOR,
            selected: false,
        }
    }

    fn corners(&self) -> Option<(Point, Point)> {
        match self.points.as_slice() {
            [min, max] => Some((*min, *max)),
            _ => None,
        }
    }

    fn normalize(&mut self) {
        if let [a, b] = self.points.as_slice() {
            let min = Point::new(a.x.min(b.x), a.y.min(b.y));
            let max = Point::new(a.x.max(b.x), a.y.max(b.y));
            self.points = vec![min, max];
        }
    }

    // Center and radii in canvas units.
    fn geometry(&self) -> Option<(f32, f32, f32, f32)> {
        let (min, max) = self.corners()?;
        let cx = (min.x + max.x) as f32 / 2.0;
        let cy = (min.y + max.y) as f32 / 2.0;
        let rx = (max.x - min.x) as f32 / 2.0;
        let ry = (max.y - min.y) as f32 / 2.0;
        Some((cx, cy, rx, ry))
    }
}

impl Default for Ellipse {
    fn default() -> Self {
        Self::new()
    }
}

impl Figure for Ellipse {
    fn id(&self) -> usize {
        self.id
    }

    fn kind(&self) -> &'static str {
        "ellipse"
    }

    fn required_clicks(&self) -> usize {
        2
    }

    fn set_points(&mut self, points: &[Point]) -> Result<(), FigureError> {
        if points.len() != self.required_clicks() {
            return Err(FigureError::WrongPointCount {
                kind: self.kind(),
                expected: self.required_clicks(),
                actual: points.len(),
            });
        }
        self.points = points.to_vec();
        self.normalize();
        Ok(())
    }

    fn color(&self) -> Color32 {
        self.color
    }

    fn set_color(&mut self, color: Color32) {
        self.color = color;
    }

    fn contains(&self, x: i32, y: i32) -> bool {
        let Some((cx, cy, rx, ry)) = self.geometry() else {
            return false;
        };
        if rx <= 0.0 || ry <= 0.0 {
            return false;
        }
        let nx = (x as f32 - cx) / rx;
        let ny = (y as f32 - cy) / ry;
        nx * nx + ny * ny <= 1.0
    }

    fn draw(&self, painter: &Painter) {
        if let Some((cx, cy, rx, ry)) = self.geometry() {
            painter.add(Shape::ellipse_filled(
                egui::pos2(cx, cy),
                vec2(rx, ry),
                self.color,
            ));
        }
    }

    fn select(&mut self) {
        self.selected = true;
    }

    fn deselect(&mut self) {
        self.selected = false;
    }

    fn is_selected(&self) -> bool {
        self.selected
    }

    // Same corner layout as the rectangle's handles.
    fn handles(&self) -> Vec<Point> {
        match self.corners() {
            Some((min, max)) => vec![
                min,
                Point::new(max.x, min.y),
                max,
                Point::new(min.x, max.y),
            ],
            None => Vec::new(),
        }
    }

    fn transform(&mut self, dx: i32, dy: i32, handle: usize) {
        let Some((mut min, mut max)) = self.corners() else {
            return;
        };
        match handle {
            0 => {
                min.x += dx;
                min.y += dy;
            }
            1 => {
                max.x += dx;
                min.y += dy;
            }
            2 => {
                max.x += dx;
                max.y += dy;
            }
            3 => {
                min.x += dx;
                max.y += dy;
            }
            _ => return,
        }
        self.points = vec![min, max];
        self.normalize();
    }

    fn replicate(&self) -> Option<Box<dyn Figure>> {
        Some(Box::new(Ellipse::new()))
    }
}
