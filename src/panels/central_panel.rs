use egui::{Color32, Rect, Sense, Vec2, pos2};

use crate::MarkupApp;

const FULL_UV: Rect = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));

pub fn central_panel(app: &mut MarkupApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none().fill(Color32::BLACK))
        .show(ctx, |ui| {
            let available = ui.available_rect_before_wrap();
            app.ensure_canvas(available.size(), ctx);

            let Some(surface_size) = app.canvas().map(|canvas| canvas.ready.surface_size) else {
                ui.centered_and_justified(|ui| {
                    let message = app.status().unwrap_or("Open a photo to start");
                    ui.colored_label(Color32::WHITE, message);
                });
                return;
            };

            // Drawn at its pixel size, centered in whatever space the panel has now
            let size = Vec2::new(surface_size.width as f32, surface_size.height as f32);
            let canvas_rect = Rect::from_center_size(available.center(), size);
            ui.allocate_rect(available, Sense::click_and_drag());

            app.handle_input(ctx, canvas_rect);
            app.refresh_drawing_texture(ctx);

            let painter = ui.painter_at(canvas_rect);
            if let Some(photo) = app.photo_texture() {
                painter.image(photo.id(), canvas_rect, FULL_UV, Color32::WHITE);
            }
            if let Some(drawing) = app.drawing_texture() {
                painter.image(drawing.id(), canvas_rect, FULL_UV, Color32::WHITE);
            }
        });
}
