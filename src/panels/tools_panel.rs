use egui;

use crate::PaintApp;
use crate::tools::Tool;
use crate::session::{MAX_BRUSH_SIZE, MIN_BRUSH_SIZE};

pub fn tools_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(200.0)
        .show(ctx, |ui| {
            ui.heading("Tools");

            // Create selectable buttons for each tool
            let active = app.tool();
            for tool in Tool::ALL {
                if ui.selectable_label(active == tool, tool.name()).clicked() {
                    log::info!("Tool selected from UI: {}", tool.name());
                    app.set_tool(tool);
                }
            }
            ui.separator();

            ui.label("Color:");
            let mut color = app.brush_color();
            if ui.color_edit_button_srgba(&mut color).changed() {
                app.set_brush_color(color);
            }

            ui.label("Brush Size:");
            let mut size = app.brush_size();
            if ui
                .add(egui::Slider::new(&mut size, MIN_BRUSH_SIZE..=MAX_BRUSH_SIZE))
                .changed()
            {
                app.set_brush_size(size);
            }
            ui.separator();

            // Undo/Redo section
            ui.horizontal(|ui| {
                let can_undo = app.history().can_undo();
                let can_redo = app.history().can_redo();

                if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                    app.undo();
                }
                if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                    app.redo();
                }
            });
            ui.horizontal(|ui| {
                ui.label(format!("Undo stack size: {}", app.history().undo_depth()));
                ui.label(format!("Redo stack size: {}", app.history().redo_depth()));
            });
            ui.separator();

            if ui.button("Clear").clicked() {
                app.clear();
            }
            ui.separator();

            ui.label("Save as:");
            let mut path = app.save_path().to_owned();
            if ui.text_edit_singleline(&mut path).changed() {
                app.set_save_path(path);
            }
            if ui.button("Save PNG").clicked() {
                app.save_to_file();
            }
            if let Some(error) = app.last_error() {
                ui.colored_label(egui::Color32::RED, error);
            }
        });
}
