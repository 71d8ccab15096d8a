use crate::SketchApp;
use crate::model::Mode;
use crate::point::Point;
use crate::renderer;

/// The drawing surface: repaints the scene from the model and routes
/// pointer input into the model according to the current mode.
pub fn canvas_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let (response, painter) =
            ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());

        renderer::paint_scene(&painter, response.rect, app.model());
        if let Some(preview) = app.active_stroke() {
            renderer::paint_stroke_preview(&painter, preview);
        }

        handle_pointer(app, &response);
    });
}

fn handle_pointer(app: &mut SketchApp, response: &egui::Response) {
    match app.model().mode() {
        Mode::ShapeConstruction => {
            if response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    let point = Point::from_pos2(pos);
                    app.model_mut().add_point(point.x, point.y);
                }
            }
        }
        Mode::FreehandStroke => {
            if response.drag_started() {
                app.begin_stroke();
            }
            if response.dragged() {
                if let Some(pos) = response.interact_pointer_pos() {
                    app.extend_stroke(Point::from_pos2(pos));
                }
            }
            if response.drag_stopped() {
                app.finish_stroke();
            }
        }
        Mode::Manipulation => {
            if response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    let point = Point::from_pos2(pos);
                    app.model_mut().select_at(point.x, point.y);
                }
            }
            if response.drag_started() {
                if let Some(pos) = response.interact_pointer_pos() {
                    // Grab a handle of the selected figure, or treat the
                    // drag start as a fresh selection click.
                    app.drag_handle = app.grabbed_handle(pos);
                    if app.drag_handle.is_none() {
                        let point = Point::from_pos2(pos);
                        app.model_mut().select_at(point.x, point.y);
                    }
                }
            }
            if response.dragged() {
                if let Some(handle) = app.drag_handle {
                    let delta = response.drag_delta();
                    let dx = delta.x.round() as i32;
                    let dy = delta.y.round() as i32;
                    if dx != 0 || dy != 0 {
                        app.model_mut().transform_selected(dx, dy, handle);
                    }
                }
            }
            if response.drag_stopped() {
                app.drag_handle = None;
            }
        }
    }
}
