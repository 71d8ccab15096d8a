use egui::{Color32, Painter, Stroke as EguiStroke};

use super::common::{self, DEFAULT_COLOR, LINE_HIT_TOLERANCE, LINE_THICKNESS};
use super::{Figure, FigureError};
use crate::id_generator::generate_id;
use crate::point::Point;

/// A straight segment between two clicked endpoints.
#[derive(Debug, Clone)]
pub struct Line {
    id: usize,
    points: Vec<Point>,
    color: Color32,
    selected: bool,
}

impl Line {
    pub fn new() -> Self {
        Self {
            id: generate_id(),
            points: Vec::new(),
            color: DEFAULT_COLOR,
            selected: false,
        }
    }
}

impl Default for Line {
    fn default() -> Self {
        Self::new()
    }
}

impl Figure for Line {
    fn id(&self) -> usize {
        self.id
    }

    fn kind(&self) -> &'static str {
        "line"
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
        Ok(())
    }

    fn color(&self) -> Color32 {
        self.color
    }

    fn set_color(&mut self, color: Color32) {
        self.color = color;
    }

    fn contains(&self, x: i32, y: i32) -> bool {
        match self.points.as_slice() {
            [a, b] => {
                let pos = Point::new(x, y).to_pos2();
                common::distance_to_segment(pos, a.to_pos2(), b.to_pos2())
                    <= LINE_HIT_TOLERANCE
            }
            _ => false,
        }
    }

    fn draw(&self, painter: &Painter) {
        if let [a, b] = self.points.as_slice() {
            painter.line_segment(
                [a.to_pos2(), b.to_pos2()],
                EguiStroke::new(LINE_THICKNESS, self.color),
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

    fn handles(&self) -> Vec<Point> {
        self.points.clone()
    }

    fn transform(&mut self, dx: i32, dy: i32, handle: usize) {
        if let Some(point) = self.points.get_mut(handle) {
            point.x += dx;
            point.y += dy;
        }
    }

    fn replicate(&self) -> Option<Box<dyn Figure>> {
        Some(Box::new(Line::new()))
    }
}
