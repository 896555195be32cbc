use std::path::Path;

use egui::Color32;

use crate::buffer::PixelBuffer;
use crate::file_handler;
use crate::history::History;
use crate::input::{InputEvent, InputHandler};
use crate::renderer::Renderer;
use crate::session::StrokeSession;
use crate::tools::Tool;

/// Default canvas size when no host-driven resize has happened
const DEFAULT_WIDTH: usize = 640;
const DEFAULT_HEIGHT: usize = 480;

/// Brush settings that survive restarts through eframe's persistence.
/// The canvas itself is not persisted.
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
struct Settings {
    tool: Tool,
    brush_color: [u8; 4],
    brush_size: i32,
    save_path: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tool: Tool::Pen,
            brush_color: [0, 0, 0, 255], // black, the classic pen default
            brush_size: 5,
            save_path: "painting.png".to_owned(),
        }
    }
}

/// The application shell: owns the canvas, history, and stroke session, and
/// feeds them pointer events from the panels.
pub struct PaintApp {
    buffer: PixelBuffer,
    history: History,
    session: StrokeSession,
    renderer: Renderer,
    input: InputHandler,
    save_path: String,
    /// Last failed operation, shown in the tools panel until the next save
    last_error: Option<String>,
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Restore brush settings from the previous run, if any
        let settings: Settings = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();

        let [r, g, b, a] = settings.brush_color;
        Self {
            buffer: PixelBuffer::new(DEFAULT_WIDTH, DEFAULT_HEIGHT, Color32::WHITE),
            history: History::new(),
            session: StrokeSession::new(
                settings.tool,
                Color32::from_rgba_unmultiplied(r, g, b, a),
                settings.brush_size,
            ),
            renderer: Renderer::new(),
            input: InputHandler::new(),
            save_path: settings.save_path,
            last_error: None,
        }
    }

    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn tool(&self) -> Tool {
        self.session.tool()
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.session.set_tool(tool);
    }

    pub fn brush_color(&self) -> Color32 {
        self.session.brush_color()
    }

    pub fn set_brush_color(&mut self, color: Color32) {
        self.session.set_brush_color(color);
    }

    pub fn brush_size(&self) -> i32 {
        self.session.brush_size()
    }

    pub fn set_brush_size(&mut self, size: i32) {
        self.session.set_brush_size(size);
    }

    /// Matches the canvas to the host-driven size.
    ///
    /// A real size change recreates the buffer blank, discarding content;
    /// undo snapshots from before the resize keep their old dimensions and
    /// restore at that size.
    pub fn resize_canvas(&mut self, width: usize, height: usize) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.buffer.width() || height != self.buffer.height() {
            log::info!("canvas resized to {width}x{height}");
            self.buffer.resize(width, height);
        }
    }

    pub fn undo(&mut self) {
        self.history.undo(&mut self.buffer);
    }

    pub fn redo(&mut self) {
        self.history.redo(&mut self.buffer);
    }

    pub fn clear(&mut self) {
        self.history.clear(&mut self.buffer);
    }

    pub fn save_path(&self) -> &str {
        &self.save_path
    }

    pub fn set_save_path(&mut self, path: String) {
        self.save_path = path;
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Writes the canvas to the configured path. A failure is shown in the
    /// UI and leaves buffer and history untouched.
    pub fn save_to_file(&mut self) {
        match file_handler::save_png(&self.buffer, Path::new(&self.save_path)) {
            Ok(()) => self.last_error = None,
            Err(err) => {
                log::error!("save failed: {err}");
                self.last_error = Some(err.to_string());
            }
        }
    }

    /// Routes this frame's pointer events into the stroke session
    pub fn handle_input(&mut self, ctx: &egui::Context, canvas_rect: egui::Rect) {
        for event in self.input.process_input(ctx, canvas_rect) {
            let result = match event {
                InputEvent::PointerDown { x, y } => {
                    self.session
                        .pointer_down((x, y), &mut self.buffer, &mut self.history)
                }
                InputEvent::PointerMove { x, y } => {
                    self.session.pointer_move((x, y), &mut self.buffer)
                }
                InputEvent::PointerUp { x, y } => {
                    self.session
                        .pointer_up((x, y), &mut self.buffer, &mut self.history)
                }
            };
            if let Err(err) = result {
                log::warn!("pointer event dropped: {err}");
            }
        }
    }

    /// Draws the committed canvas plus the in-progress preview overlay
    pub fn render(&mut self, ctx: &egui::Context, painter: &egui::Painter, rect: egui::Rect) {
        let preview = self.session.preview_pixels();
        self.renderer.render(
            ctx,
            painter,
            rect,
            &self.buffer,
            &preview,
            self.session.brush_color(),
        );
    }

    fn settings(&self) -> Settings {
        let color = self.session.brush_color();
        Settings {
            tool: self.session.tool(),
            brush_color: [color.r(), color.g(), color.b(), color.a()],
            brush_size: self.session.brush_size(),
            save_path: self.save_path.clone(),
        }
    }
}

impl eframe::App for PaintApp {
    /// Called by the framework to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.settings());
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        crate::panels::tools_panel(self, ctx);
        crate::panels::central_panel(self, ctx);
    }
}
