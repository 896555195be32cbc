use egui::{Color32, ColorImage, Context, Painter, Rect, TextureHandle, TextureOptions, pos2, vec2};

use crate::buffer::PixelBuffer;

/// Draws the committed buffer and the transient preview overlay.
///
/// The buffer is uploaded as a nearest-filtered texture each frame and the
/// preview pixels are painted on top; the two are composited here at render
/// time only, so preview pixels never land in the committed buffer.
pub struct Renderer {
    texture: Option<TextureHandle>,
    /// Buffer version behind the current texture; uploads are skipped while
    /// it matches
    uploaded_version: Option<u64>,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            texture: None,
            uploaded_version: None,
        }
    }

    /// Uploads the buffer into the canvas texture, reusing the previous
    /// upload when the buffer has not changed since.
    fn update_texture(&mut self, ctx: &Context, buffer: &PixelBuffer) {
        if self.uploaded_version == Some(buffer.version()) && self.texture.is_some() {
            return;
        }
        let image = ColorImage {
            size: [buffer.width(), buffer.height()],
            pixels: buffer.pixels().to_vec(),
        };
        match &mut self.texture {
            Some(texture) => texture.set(image, TextureOptions::NEAREST),
            None => {
                self.texture = Some(ctx.load_texture("canvas", image, TextureOptions::NEAREST));
            }
        }
        self.uploaded_version = Some(buffer.version());
    }

    /// Renders one frame: the buffer scaled into `rect`, then the preview
    /// pixels in the brush color.
    pub fn render(
        &mut self,
        ctx: &Context,
        painter: &Painter,
        rect: Rect,
        buffer: &PixelBuffer,
        preview: &[(i32, i32)],
        preview_color: Color32,
    ) {
        self.update_texture(ctx, buffer);
        if let Some(texture) = &self.texture {
            painter.image(
                texture.id(),
                rect,
                Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0)),
                Color32::WHITE,
            );
        }

        if preview.is_empty() {
            return;
        }

        // One buffer pixel maps to a scale x scale screen cell
        let scale_x = rect.width() / buffer.width() as f32;
        let scale_y = rect.height() / buffer.height() as f32;
        for &(x, y) in preview {
            if !buffer.contains(x, y) {
                continue;
            }
            let min = pos2(
                rect.min.x + x as f32 * scale_x,
                rect.min.y + y as f32 * scale_y,
            );
            let cell = Rect::from_min_size(min, vec2(scale_x.max(1.0), scale_y.max(1.0)));
            painter.rect_filled(cell, 0.0, preview_color);
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
