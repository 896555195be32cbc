use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::buffer::PixelBuffer;
use crate::error::{PaintError, Result};

/// Exports the buffer as a PNG at `path`.
///
/// Lossless: one buffer pixel maps to exactly one output pixel, 8 bits per
/// channel with the channel order preserved. On failure the error is
/// surfaced to the caller and neither the buffer nor the history changes.
pub fn save_png(buffer: &PixelBuffer, path: &Path) -> Result<()> {
    let mut out = RgbaImage::new(buffer.width() as u32, buffer.height() as u32);
    for (i, color) in buffer.pixels().iter().enumerate() {
        let x = (i % buffer.width()) as u32;
        let y = (i / buffer.width()) as u32;
        out.put_pixel(x, y, Rgba([color.r(), color.g(), color.b(), color.a()]));
    }

    out.save(path).map_err(|source| PaintError::Save {
        path: path.to_path_buf(),
        source,
    })?;

    log::info!(
        "saved {}x{} canvas to {}",
        buffer.width(),
        buffer.height(),
        path.display()
    );
    Ok(())
}
