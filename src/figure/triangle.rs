use egui::{Color32, Painter, Shape, Stroke as EguiStroke};

use super::common::{self, DEFAULT_COLOR};
use super::{Figure, FigureError};
use crate::id_generator::generate_id;
use crate::point::Point;

/// A filled triangle built from three clicked vertices.
#[derive(Debug, Clone)]
pub struct Triangle {
    id: usize,
    points: Vec<Point>,
    color: Color32,
    selected: bool,
}

impl Triangle {
    pub fn new() -> Self {
        Self {
            id: generate_id(),
            points: Vec::new(),
            color: DEFAULT_COLOR,
            selected: false,
        }
    }
}

impl Default for Triangle {
    fn default() -> Self {
        Self::new()
    }
}

impl Figure for Triangle {
    fn id(&self) -> usize {
        self.id
    }

    fn kind(&self) -> &'static str {
        "triangle"
    }

    fn required_clicks(&self) -> usize {
        3
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
        common::point_in_polygon(&self.points, x, y)
    }

    fn draw(&self, painter: &Painter) {
        if self.points.len() == self.required_clicks() {
            painter.add(Shape::convex_polygon(
                self.points.iter().map(|p| p.to_pos2()).collect(),
                self.color,
                EguiStroke::NONE,
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
        Some(Box::new(Triangle::new()))
    }
}
