use egui::{Color32, Sense, Stroke, Vec2};

use crate::MarkupApp;
use crate::color::parse_color;

const SWATCH_SIZE: f32 = 32.0;

pub fn tools_panel(app: &mut MarkupApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("tools_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if ui.button("Clear").clicked() {
                app.clear();
            }
            if ui.button("Download").clicked() {
                app.download();
            }

            ui.separator();

            let is_eraser = app.painter().is_eraser();
            if ui.selectable_label(is_eraser, "Eraser").clicked() && !is_eraser {
                app.select_eraser();
            }

            // Collect first so clicks can borrow the app mutably
            let palette: Vec<String> = app.palette().to_vec();
            for color in &palette {
                let selected = app.selected_color() == Some(color.as_str());
                if swatch(ui, color, selected).clicked() {
                    log::info!("Color selected from UI: {}", color);
                    app.select_color(color);
                }
            }

            if let Some(status) = app.status() {
                ui.separator();
                ui.label(status);
            }
        });
    });
}

fn swatch(ui: &mut egui::Ui, color: &str, selected: bool) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(Vec2::splat(SWATCH_SIZE), Sense::click());
    let fill = parse_color(color).unwrap_or(Color32::TRANSPARENT);
    let radius = SWATCH_SIZE / 2.0 - 2.0;
    let painter = ui.painter();
    painter.circle_filled(rect.center(), radius, fill);
    // White needs an outline to show up on a light panel
    if fill == Color32::WHITE {
        painter.circle_stroke(rect.center(), radius, Stroke::new(1.0, Color32::BLACK));
    }
    if selected {
        painter.circle_stroke(rect.center(), radius / 3.0, Stroke::new(2.0, Color32::GRAY));
    }
    response.on_hover_text(color)
}
