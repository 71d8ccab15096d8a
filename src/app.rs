use egui::{Color32, Pos2};

use crate::figure::{DEFAULT_COLOR, Figure, FigureKind, HANDLE_GRAB_RADIUS};
use crate::model::{DrawingModel, Mode};
use crate::observer::ModelObserver;
use crate::panels;
use crate::point::Point;
use crate::stroke::{self, MutableStroke};

/// The application shell: one drawing model plus the transient UI state
/// that does not belong in the scene (current color and figure kind, the
/// freehand stroke being dragged, the grabbed handle).
pub struct SketchApp {
    model: DrawingModel,
    pub(crate) current_color: Color32,
    pub(crate) current_kind: FigureKind,
    pub(crate) active_stroke: Option<MutableStroke>,
    pub(crate) drag_handle: Option<usize>,
}

// Asks egui for a repaint whenever the model changes, so the canvas always
// re-reads fresh state.
struct RepaintObserver {
    ctx: egui::Context,
}

impl ModelObserver for RepaintObserver {
    fn model_changed(&mut self) {
        self.ctx.request_repaint();
    }
}

impl SketchApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut model = DrawingModel::new();
        model.subscribe(Box::new(RepaintObserver {
            ctx: cc.egui_ctx.clone(),
        }));

        // Start ready to draw: default kind armed in the default color.
        let current_color = DEFAULT_COLOR;
        let current_kind = FigureKind::Rectangle;
        model.begin_figure(current_kind.create(current_color));

        Self {
            model,
            current_color,
            current_kind,
            active_stroke: None,
            drag_handle: None,
        }
    }

    pub fn model(&self) -> &DrawingModel {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut DrawingModel {
        &mut self.model
    }

    /// Pick a figure kind from the tools panel: switches to construction
    /// mode and arms a blank prototype in the current color.
    pub(crate) fn choose_kind(&mut self, kind: FigureKind) {
        log::info!("figure kind selected from UI: {}", kind.label());
        self.current_kind = kind;
        self.model.set_mode(Mode::ShapeConstruction);
        self.model.begin_figure(kind.create(self.current_color));
    }

    /// The color picker changed: recolor the selection in manipulation
    /// mode, or re-arm the prototype so the next figures come out in the
    /// new color.
    pub(crate) fn apply_color_change(&mut self) {
        let color = self.current_color;
        match self.model.mode() {
            Mode::Manipulation => {
                if let Some(id) = self.model.selected_figure().map(|f| f.id()) {
                    self.model.recolor(id, color);
                }
            }
            Mode::ShapeConstruction => {
                if self.model.prototype().is_some() {
                    self.model.begin_figure(self.current_kind.create(color));
                }
            }
            Mode::FreehandStroke => {}
        }
    }

    // ---- freehand stroke lifecycle ----------------------------------------

    pub(crate) fn active_stroke(&self) -> Option<&MutableStroke> {
        self.active_stroke.as_ref()
    }

    pub(crate) fn begin_stroke(&mut self) {
        self.active_stroke = Some(MutableStroke::new(
            self.current_color,
            stroke::DEFAULT_THICKNESS,
        ));
    }

    pub(crate) fn extend_stroke(&mut self, point: Point) {
        if let Some(active) = self.active_stroke.as_mut() {
            active.add_point(point);
        }
    }

    pub(crate) fn finish_stroke(&mut self) {
        if let Some(active) = self.active_stroke.take() {
            self.model.add_stroke(active.to_stroke());
        }
    }

    // ---- manipulation -----------------------------------------------------

    /// Which handle of the selected figure, if any, sits under the pointer.
    pub(crate) fn grabbed_handle(&self, pos: Pos2) -> Option<usize> {
        let figure = self.model.selected_figure()?;
        figure
            .handles()
            .iter()
            .position(|handle| handle.to_pos2().distance(pos) <= HANDLE_GRAB_RADIUS)
    }
}

impl eframe::App for SketchApp {
    /// Called each time the UI needs repainting.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::tools_panel(self, ctx);
        panels::canvas_panel(self, ctx);
    }
}
