use egui::Color32;

use crate::point::Point;

/// Default pen width for freehand strokes.
pub const DEFAULT_THICKNESS: f32 = 3.0;

// Immutable stroke, append-only once committed to the model
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    points: Vec<Point>,
    color: Color32,
    thickness: f32,
}

// Mutable stroke accumulated while the pointer is dragged
#[derive(Clone, Debug)]
pub struct MutableStroke {
    points: Vec<Point>,
    color: Color32,
    thickness: f32,
}

impl Stroke {
    pub fn new(color: Color32, thickness: f32, points: Vec<Point>) -> Self {
        Self {
            points,
            color,
            thickness,
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }
}

impl MutableStroke {
    pub fn new(color: Color32, thickness: f32) -> Self {
        Self {
            points: Vec::new(),
            color,
            thickness,
        }
    }

    /// Append the next sampled pointer position.
    pub fn add_point(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Freeze into an immutable stroke for the model.
    pub fn to_stroke(&self) -> Stroke {
        Stroke::new(self.color, self.thickness, self.points.clone())
    }

    // Live points, for drawing the in-progress preview
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mutable_stroke_freezes_in_order() {
        let mut pen = MutableStroke::new(Color32::RED, DEFAULT_THICKNESS);
        pen.add_point(Point::new(0, 0));
        pen.add_point(Point::new(4, 2));
        pen.add_point(Point::new(9, 9));

        let stroke = pen.to_stroke();
        assert_eq!(
            stroke.points(),
            &[Point::new(0, 0), Point::new(4, 2), Point::new(9, 9)]
        );
        assert_eq!(stroke.color(), Color32::RED);
    }
}
