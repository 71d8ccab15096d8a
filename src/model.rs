use egui::Color32;
use log::{debug, error, warn};

use crate::figure::Figure;
use crate::observer::{ModelObserver, ObserverRegistry};
use crate::point::Point;
use crate::stroke::Stroke;

/// What pointer input currently means on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Clicks accumulate into the armed figure prototype.
    #[default]
    ShapeConstruction,
    /// Drags are recorded as freehand strokes.
    FreehandStroke,
    /// Clicks select figures, handle drags transform them.
    Manipulation,
}

/// The drawing model: the scene of committed figures and strokes, the
/// click-by-click construction state, the interaction mode, and the current
/// selection.
///
/// Every mutating operation notifies the registered observers exactly once,
/// synchronously, after the mutation is fully applied; observers re-read
/// the model through the accessors. Operations on figures that are not part
/// of the collection are silent no-ops, so a stale id from the UI can never
/// corrupt the scene.
pub struct DrawingModel {
    // Insertion order is z-order; the last figure paints on top.
    figures: Vec<Box<dyn Figure>>,
    strokes: Vec<Stroke>,
    // Construction state: the prototype being built and the clicks buffered
    // for it so far.
    prototype: Option<Box<dyn Figure>>,
    pending: Vec<Point>,
    mode: Mode,
    // Index into `figures`; cleared whenever the collection is replaced.
    selected: Option<usize>,
    observers: ObserverRegistry,
}

impl std::fmt::Debug for DrawingModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DrawingModel")
            .field("figures", &format!("<{} figures>", self.figures.len()))
            .field("strokes", &format!("<{} strokes>", self.strokes.len()))
            .field("prototype", &self.prototype.as_ref().map(|p| p.kind()))
            .field("click_count", &self.pending.len())
            .field("mode", &self.mode)
            .field("selected", &self.selected)
            .finish()
    }
}

impl Default for DrawingModel {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawingModel {
    pub fn new() -> Self {
        Self {
            figures: Vec::new(),
            strokes: Vec::new(),
            prototype: None,
            pending: Vec::new(),
            mode: Mode::default(),
            selected: None,
            observers: ObserverRegistry::new(),
        }
    }

    /// Register an observer to be notified after every change.
    pub fn subscribe(&self, observer: Box<dyn ModelObserver>) {
        self.observers.subscribe(observer);
    }

    fn notify(&self) {
        self.observers.notify_all();
    }

    // ---- figure collection ------------------------------------------------

    /// Append a committed figure to the scene and return its id.
    pub fn add_figure(&mut self, figure: Box<dyn Figure>) -> usize {
        let id = figure.id();
        debug!("adding {} #{id}", figure.kind());
        self.figures.push(figure);
        self.notify();
        id
    }

    /// Change the color of a committed figure. Unknown ids are ignored
    /// without notifying.
    pub fn recolor(&mut self, id: usize, color: Color32) {
        if let Some(figure) = self.figures.iter_mut().find(|f| f.id() == id) {
            figure.set_color(color);
            self.notify();
        }
    }

    /// Replace the defining points of a committed figure. Unknown ids are
    /// ignored; a point set the figure rejects leaves the scene untouched.
    pub fn set_points(&mut self, id: usize, points: &[Point]) {
        if let Some(figure) = self.figures.iter_mut().find(|f| f.id() == id) {
            match figure.set_points(points) {
                Ok(()) => self.notify(),
                Err(err) => warn!("rejected new points for figure #{id}: {err}"),
            }
        }
    }

    /// Replace the whole figure collection; `None` clears it. The selection
    /// is dropped either way, and observers are always notified.
    pub fn replace_figures(&mut self, figures: Option<Vec<Box<dyn Figure>>>) {
        match figures {
            Some(figures) => self.figures = figures,
            None => self.figures.clear(),
        }
        self.selected = None;
        self.notify();
    }

    // ---- interactive construction -----------------------------------------

    /// Arm construction with a blank prototype. Any partially-entered
    /// clicks from a previous construction are discarded. Observers are not
    /// notified: nothing visible has changed yet.
    pub fn begin_figure(&mut self, prototype: Box<dyn Figure>) {
        debug!(
            "arming a {} ({} clicks)",
            prototype.kind(),
            prototype.required_clicks()
        );
        self.pending.clear();
        self.pending.reserve(prototype.required_clicks());
        self.prototype = Some(prototype);
    }

    /// Feed one construction click. Ignored while no prototype is armed.
    ///
    /// The click that completes the prototype commits it to the scene (one
    /// notification, via `add_figure`) and arms a fresh prototype of the
    /// same kind and color so the user can keep stamping figures out. A
    /// kind that cannot replicate disarms construction instead; the mode
    /// stays active for manual re-arming.
    pub fn add_point(&mut self, x: i32, y: i32) {
        let Some(mut prototype) = self.prototype.take() else {
            return;
        };

        self.pending.push(Point::new(x, y));
        if self.pending.len() < prototype.required_clicks() {
            self.prototype = Some(prototype);
            return;
        }

        if let Err(err) = prototype.set_points(&self.pending) {
            // Unreachable as long as the buffer is sized off the prototype
            // itself; never fatal either way.
            error!("figure refused its own click buffer: {err}");
        }
        let color = prototype.color();
        let successor = prototype.replicate();
        self.add_figure(prototype);
        self.pending.clear();

        match successor {
            Some(mut next) => {
                next.set_color(color);
                self.pending.reserve(next.required_clicks());
                self.prototype = Some(next);
            }
            None => {
                debug!("figure kind is single-shot; construction disarmed");
            }
        }
    }

    // ---- selection ---------------------------------------------------------

    /// Select the topmost figure containing the position, or clear the
    /// selection when nothing is hit. Observers are notified either way so
    /// a deselection is visible too.
    pub fn select_at(&mut self, x: i32, y: i32) {
        if let Some(previous) = self.selected.take() {
            if let Some(figure) = self.figures.get_mut(previous) {
                figure.deselect();
            }
        }

        // Scan back to front: the most recently added figure paints on top,
        // so it wins ties.
        self.selected = self.figures.iter().rposition(|f| f.contains(x, y));
        if let Some(index) = self.selected {
            self.figures[index].select();
            debug!("selected {} #{}", self.figures[index].kind(), self.figures[index].id());
        }
        self.notify();
    }

    /// Drag one of the selected figure's handles. A no-op without a
    /// selection; which geometry the handle index maps to is the figure's
    /// own business.
    pub fn transform_selected(&mut self, dx: i32, dy: i32, handle: usize) {
        if let Some(figure) = self.selected.and_then(|i| self.figures.get_mut(i)) {
            figure.transform(dx, dy, handle);
            self.notify();
        }
    }

    // ---- mode and strokes --------------------------------------------------

    /// Switch the interaction mode. Re-setting the current mode does not
    /// notify.
    pub fn set_mode(&mut self, mode: Mode) {
        if mode != self.mode {
            debug!("mode -> {mode:?}");
            self.mode = mode;
            self.notify();
        }
    }

    /// Append a committed freehand stroke. A stroke without points is
    /// rejected silently.
    pub fn add_stroke(&mut self, stroke: Stroke) {
        if stroke.points().is_empty() {
            return;
        }
        self.strokes.push(stroke);
        self.notify();
    }

    // ---- read views --------------------------------------------------------

    pub fn figures(&self) -> &[Box<dyn Figure>] {
        &self.figures
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// The figure currently under construction, if any.
    pub fn prototype(&self) -> Option<&dyn Figure> {
        self.prototype.as_deref()
    }

    /// Clicks already buffered for the figure under construction.
    pub fn pending_points(&self) -> &[Point] {
        &self.pending
    }

    pub fn click_count(&self) -> usize {
        self.pending.len()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn selected_figure(&self) -> Option<&dyn Figure> {
        self.selected
            .and_then(|i| self.figures.get(i))
            .map(|f| f.as_ref())
    }
}
