use egui::{Color32, Painter, Rect};

use super::common::DEFAULT_COLOR;
use super::{Figure, FigureError};
use crate::id_generator::generate_id;
use crate::point::Point;

/// An axis-aligned filled rectangle, built from two opposite corner clicks.
///
/// The defining points are stored normalized: index 0 is the top-left
/// corner, index 1 the bottom-right one, whatever order the corners were
/// clicked in.
#[derive(Debug, Clone)]
pub struct Rectangle {
    id: usize,
    points: Vec<Point>,
    color: Color32,
    selected: bool,
}

impl Rectangle {
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
}

impl Default for Rectangle {
    fn default() -> Self {
        Self::new()
    }
}

impl Figure for Rectangle {
    fn id(&self) -> usize {
        self.id
    }

    fn kind(&self) -> &'static str {
        "rectangle"
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
        match self.corners() {
            Some((min, max)) => x >= min.x && x <= max.x && y >= min.y && y <= max.y,
            None => false,
        }
    }

    fn draw(&self, painter: &Painter) {
        if let Some((min, max)) = self.corners() {
            painter.rect_filled(
                Rect::from_min_max(min.to_pos2(), max.to_pos2()),
                0.0,
                self.color,
            );
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

    // Handles sit on the four corners: top-left, top-right, bottom-right,
    // bottom-left.
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
        Some(Box::new(Rectangle::new()))
    }
}
