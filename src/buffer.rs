use egui::Color32;

use crate::error::{PaintError, Result};

/// The committed raster canvas: a row-major grid of RGBA pixels.
///
/// Cloning produces the full-buffer snapshots the undo/redo stacks hold;
/// `PartialEq` gives exact pixel comparison for blank detection.
#[derive(Clone)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    background: Color32,
    pixels: Vec<Color32>,
    /// Bumped on every mutation so the renderer can tell an unchanged
    /// buffer apart without comparing pixels
    version: u64,
}

impl PixelBuffer {
    /// Creates a buffer with every pixel set to `background`.
    ///
    /// The background is explicit configuration, not an implicit toolkit
    /// default; it is also the reference color for blank detection.
    pub fn new(width: usize, height: usize, background: Color32) -> Self {
        assert!(width > 0 && height > 0, "buffer dimensions must be positive");
        Self {
            width,
            height,
            background,
            pixels: vec![background; width * height],
            version: 0,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn background(&self) -> Color32 {
        self.background
    }

    /// Raw pixel rows, top to bottom. Used by the renderer and PNG export.
    pub fn pixels(&self) -> &[Color32] {
        &self.pixels
    }

    /// Returns true if the coordinate is inside the buffer. Rasterized
    /// shapes can legitimately extend past the edges, so write paths clip
    /// with this before calling `set`.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    pub fn get(&self, x: i32, y: i32) -> Result<Color32> {
        self.index_of(x, y).map(|i| self.pixels[i])
    }

    pub fn set(&mut self, x: i32, y: i32, color: Color32) -> Result<()> {
        let i = self.index_of(x, y)?;
        self.pixels[i] = color;
        self.version += 1;
        Ok(())
    }

    /// Monotonic change counter.
    ///
    /// Mutations bump it, so a render path can skip work while it reads the
    /// same value twice. A snapshot carries the counter from when it was
    /// taken, and mutations only ever increase the live value, so restoring
    /// a snapshot wholesale is also observable as a change.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// A buffer is blank when it is pixel-for-pixel identical to a freshly
    /// created buffer of the same size and background. A single differing
    /// pixel makes it non-blank.
    pub fn is_blank(&self) -> bool {
        self.pixels.iter().all(|&p| p == self.background)
    }

    /// Refills every pixel with the background color.
    pub fn clear(&mut self) {
        self.pixels.fill(self.background);
        self.version += 1;
    }

    /// Recreates the buffer blank at a new size. Existing content is
    /// discarded; the host decides when a resize is worth that loss.
    pub fn resize(&mut self, width: usize, height: usize) {
        assert!(width > 0 && height > 0, "buffer dimensions must be positive");
        self.width = width;
        self.height = height;
        self.pixels = vec![self.background; width * height];
        self.version += 1;
    }

    fn index_of(&self, x: i32, y: i32) -> Result<usize> {
        if self.contains(x, y) {
            Ok(y as usize * self.width + x as usize)
        } else {
            Err(PaintError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }
}

/// Content equality: size, background, and pixels. The change counter is
/// bookkeeping, not content, so two buffers with the same pixels compare
/// equal regardless of their edit histories.
impl PartialEq for PixelBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width
            && self.height == other.height
            && self.background == other.background
            && self.pixels == other.pixels
    }
}

impl std::fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("background", &self.background)
            .finish_non_exhaustive()
    }
}
