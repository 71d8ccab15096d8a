use egui::{Color32, Painter};
use thiserror::Error;

use crate::point::Point;

mod common;
mod ellipse;
mod line;
mod quadrilateral;
mod rectangle;
mod triangle;

pub use common::{DEFAULT_COLOR, HANDLE_GRAB_RADIUS, HANDLE_SIZE};
pub use ellipse::Ellipse;
pub use line::Line;
pub use quadrilateral::Quadrilateral;
pub use rectangle::Rectangle;
pub use triangle::Triangle;

/// Violations of a figure's point contract.
#[derive(Debug, Error)]
pub enum FigureError {
    #[error("a {kind} is defined by {expected} points, got {actual}")]
    WrongPointCount {
        kind: &'static str,
        expected: usize,
        actual: usize,
    },
}

/// Capability trait implemented by every figure variant.
///
/// A figure starts out blank (no points set) while it is being built click
/// by click, and is fully specified once `set_points` has installed exactly
/// `required_clicks` points. Hit testing, rendering, and handle-based
/// transformation are each variant's own business; the drawing model never
/// interprets the geometry.
pub trait Figure {
    /// Stable identity assigned at construction.
    fn id(&self) -> usize;

    /// Variant name, for the UI and for logs.
    fn kind(&self) -> &'static str;

    /// Number of clicked points that fully specify this variant.
    fn required_clicks(&self) -> usize;

    /// Install the defining points. Variants enforce their own count
    /// contract and reject anything else.
    fn set_points(&mut self, points: &[Point]) -> Result<(), FigureError>;

    fn color(&self) -> Color32;

    fn set_color(&mut self, color: Color32);

    /// Whether the canvas position falls inside (or, for thin variants,
    /// close enough to) this figure.
    fn contains(&self, x: i32, y: i32) -> bool;

    /// Paint the figure's geometry. Selection adornment is drawn by the
    /// renderer, not here.
    fn draw(&self, painter: &Painter);

    fn select(&mut self);

    fn deselect(&mut self);

    fn is_selected(&self) -> bool;

    /// Positions of the draggable control handles. The `handle` argument of
    /// `transform` indexes this list.
    fn handles(&self) -> Vec<Point>;

    /// Drag the given handle by `(dx, dy)`. Unknown handle indices are
    /// ignored.
    fn transform(&mut self, dx: i32, dy: i32, handle: usize);

    /// Produce a fresh, blank, default-colored instance of the same
    /// concrete variant, so construction can continue with the next figure
    /// of the same kind. Variants that cannot be stamped out repeatedly
    /// keep the default and act as single-shot tools.
    fn replicate(&self) -> Option<Box<dyn Figure>> {
        None
    }
}

/// The catalogue of shipped figure variants, as offered by the tools panel.
/// The drawing model itself never sees this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FigureKind {
    Line,
    Rectangle,
    Ellipse,
    Triangle,
    Quadrilateral,
}

impl FigureKind {
    pub const ALL: [FigureKind; 5] = [
        FigureKind::Line,
        FigureKind::Rectangle,
        FigureKind::Ellipse,
        FigureKind::Triangle,
        FigureKind::Quadrilateral,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FigureKind::Line => "Line",
            FigureKind::Rectangle => "Rectangle",
            FigureKind::Ellipse => "Ellipse",
            FigureKind::Triangle => "Triangle",
            FigureKind::Quadrilateral => "Quadrilateral",
        }
    }

    /// Create a blank figure of this kind in the given color, ready to be
    /// armed as a construction prototype.
    pub fn create(self, color: Color32) -> Box<dyn Figure> {
        let mut figure: Box<dyn Figure> = match self {
            FigureKind::Line => Box::new(Line::new()),
            FigureKind::Rectangle => Box::new(Rectangle::new()),
            FigureKind::Ellipse => Box::new(Ellipse::new()),
            FigureKind::Triangle => Box::new(Triangle::new()),
            FigureKind::Quadrilateral => Box::new(Quadrilateral::new()),
        };
        figure.set_color(color);
        figure
    }
}
