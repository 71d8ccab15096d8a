use crate::SketchApp;
use crate::figure::{Figure, FigureKind};
use crate::model::Mode;

pub fn tools_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(180.0)
        .show(ctx, |ui| {
            ui.heading("Mode");
            let modes = [
                (Mode::ShapeConstruction, "Shapes"),
                (Mode::FreehandStroke, "Freehand"),
                (Mode::Manipulation, "Select"),
            ];
            for (mode, label) in modes {
                let is_active = app.model().mode() == mode;
                if ui.selectable_label(is_active, label).clicked() {
                    log::info!("mode selected from UI: {label}");
                    app.model_mut().set_mode(mode);
                }
            }

            ui.separator();
            ui.heading("Figure");
            for kind in FigureKind::ALL {
                let is_active = app.current_kind == kind;
                if ui.selectable_label(is_active, kind.label()).clicked() {
                    app.choose_kind(kind);
                }
            }

            ui.separator();
            ui.horizontal(|ui| {
                ui.label("Color:");
                let response = egui::color_picker::color_edit_button_srgba(
                    ui,
                    &mut app.current_color,
                    egui::color_picker::Alpha::Opaque,
                );
                if response.changed() {
                    app.apply_color_change();
                }
            });

            ui.separator();
            status_line(app, ui);
        });
}

// One line of feedback about what the next click will do.
fn status_line(app: &SketchApp, ui: &mut egui::Ui) {
    let model = app.model();
    match model.mode() {
        Mode::ShapeConstruction => match model.prototype() {
            Some(prototype) => {
                ui.label(format!(
                    "Building a {}: {} of {} clicks",
                    prototype.kind(),
                    model.click_count(),
                    prototype.required_clicks()
                ));
            }
            None => {
                ui.label("Pick a figure to start building");
            }
        },
        Mode::FreehandStroke => {
            ui.label(format!("{} strokes drawn", model.strokes().len()));
        }
        Mode::Manipulation => match model.selected_figure() {
            Some(figure) => {
                ui.label(format!("Selected: {} #{}", figure.kind(), figure.id()));
            }
            None => {
                ui.label("Click a figure to select it");
            }
        },
    }
}
