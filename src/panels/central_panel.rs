use egui;

use crate::PaintApp;

pub fn central_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        // The canvas tracks the panel; shrinking or growing it recreates
        // the buffer blank
        let available = ui.available_size();
        app.resize_canvas(available.x.floor() as usize, available.y.floor() as usize);

        // One buffer pixel per screen point
        let buffer_size = egui::vec2(
            app.buffer().width() as f32,
            app.buffer().height() as f32,
        );
        let (response, painter) = ui.allocate_painter(buffer_size, egui::Sense::drag());
        let canvas_rect = response.rect;

        // Route this frame's pointer input into the stroke session
        app.handle_input(ctx, canvas_rect);

        // Render the committed buffer plus the preview overlay
        app.render(ctx, &painter, canvas_rect);
    });
}
