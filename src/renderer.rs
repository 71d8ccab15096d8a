use egui::{Color32, Painter, Rect, Shape, Stroke as EguiStroke, vec2};

use crate::figure::{Figure, HANDLE_SIZE};
use crate::model::DrawingModel;
use crate::point::Point;
use crate::stroke::{MutableStroke, Stroke};

pub const CANVAS_BACKGROUND: Color32 = Color32::WHITE;
const PENDING_MARKER_RADIUS: f32 = 3.0;

/// Repaint the whole scene from the model: strokes first, then figures in
/// insertion order so later figures paint on top, selection handles, and
/// markers for the clicks buffered by an in-progress construction.
pub fn paint_scene(painter: &Painter, canvas: Rect, model: &DrawingModel) {
    painter.rect_filled(canvas, 0.0, CANVAS_BACKGROUND);

    for stroke in model.strokes() {
        paint_stroke(painter, stroke);
    }

    for figure in model.figures() {
        figure.draw(painter);
        if figure.is_selected() {
            paint_handles(painter, figure.as_ref());
        }
    }

    for point in model.pending_points() {
        paint_pending_marker(painter, *point);
    }
}

/// Draw the freehand path still being dragged, before it is committed.
pub fn paint_stroke_preview(painter: &Painter, stroke: &MutableStroke) {
    paint_path(painter, stroke.points(), stroke.thickness(), stroke.color());
}

fn paint_stroke(painter: &Painter, stroke: &Stroke) {
    paint_path(painter, stroke.points(), stroke.thickness(), stroke.color());
}

fn paint_path(painter: &Painter, points: &[Point], thickness: f32, color: Color32) {
    match points {
        [] => {}
        [only] => {
            painter.circle_filled(only.to_pos2(), thickness / 2.0, color);
        }
        _ => {
            painter.add(Shape::line(
                points.iter().map(|p| p.to_pos2()).collect(),
                EguiStroke::new(thickness, color),
            ));
        }
    }
}

fn paint_handles(painter: &Painter, figure: &dyn Figure) {
    for handle in figure.handles() {
        let rect = Rect::from_center_size(handle.to_pos2(), vec2(HANDLE_SIZE, HANDLE_SIZE));
        painter.rect_filled(rect, 0.0, Color32::WHITE);
        painter.rect_stroke(rect, 0.0, EguiStroke::new(1.0, Color32::BLACK));
    }
}

fn paint_pending_marker(painter: &Painter, point: Point) {
    painter.circle_filled(point.to_pos2(), PENDING_MARKER_RADIUS, Color32::DARK_GRAY);
}
