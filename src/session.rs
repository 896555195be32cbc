use egui::Color32;

use crate::buffer::PixelBuffer;
use crate::error::Result;
use crate::fill::flood_fill;
use crate::history::History;
use crate::raster;
use crate::tools::Tool;

pub const MIN_BRUSH_SIZE: i32 = 1;
pub const MAX_BRUSH_SIZE: i32 = 50;

/// Where the session is within a press-move-release gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum SessionState {
    #[default]
    Idle,
    Active {
        start: (i32, i32),
        last: (i32, i32),
    },
}

/// The interactive state machine behind a stroke.
///
/// Pointer events drive tool-specific behavior: the pen commits pixels
/// incrementally as it moves, fill acts on the press alone, and the shape
/// tools accumulate a preview until release commits the rasterized outline.
/// Committing paths snapshot through [`History`] before writing.
pub struct StrokeSession {
    state: SessionState,
    tool: Tool,
    brush_color: Color32,
    brush_size: i32,
}

impl StrokeSession {
    pub fn new(tool: Tool, brush_color: Color32, brush_size: i32) -> Self {
        Self {
            state: SessionState::Idle,
            tool,
            brush_color,
            brush_size: brush_size.clamp(MIN_BRUSH_SIZE, MAX_BRUSH_SIZE),
        }
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    pub fn brush_color(&self) -> Color32 {
        self.brush_color
    }

    pub fn set_brush_color(&mut self, color: Color32) {
        self.brush_color = color;
    }

    pub fn brush_size(&self) -> i32 {
        self.brush_size
    }

    pub fn set_brush_size(&mut self, size: i32) {
        self.brush_size = size.clamp(MIN_BRUSH_SIZE, MAX_BRUSH_SIZE);
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, SessionState::Active { .. })
    }

    /// Starts a gesture at `p`.
    ///
    /// The pen snapshots and writes its first dot immediately. Fill is a
    /// single-event action: it captures the color under the pointer, runs
    /// the flood fill, and never enters the active state.
    pub fn pointer_down(
        &mut self,
        p: (i32, i32),
        buffer: &mut PixelBuffer,
        history: &mut History,
    ) -> Result<()> {
        match self.tool {
            Tool::Fill => {
                let target = buffer.get(p.0, p.1)?;
                flood_fill(buffer, p.0, p.1, target, self.brush_color)?;
                self.state = SessionState::Idle;
            }
            Tool::Pen => {
                history.snapshot_before_mutation(buffer);
                self.write_stamped(buffer, &[p])?;
                self.state = SessionState::Active { start: p, last: p };
            }
            _ => {
                self.state = SessionState::Active { start: p, last: p };
            }
        }
        Ok(())
    }

    /// Advances the gesture to `p`. Ignored while idle.
    ///
    /// Pen strokes are already committed (the press took the snapshot), so
    /// each segment is written to the buffer as it happens. The shape tools
    /// only move the preview endpoint.
    pub fn pointer_move(&mut self, p: (i32, i32), buffer: &mut PixelBuffer) -> Result<()> {
        let SessionState::Active { start, last } = self.state else {
            return Ok(());
        };
        if self.tool == Tool::Pen {
            let segment = raster::line(last.0, last.1, p.0, p.1);
            self.write_stamped(buffer, &segment)?;
        }
        self.state = SessionState::Active { start, last: p };
        Ok(())
    }

    /// Ends the gesture at `p`. Ignored while idle.
    ///
    /// Shape tools snapshot and commit their outline here; the pen has
    /// nothing left to write.
    pub fn pointer_up(
        &mut self,
        p: (i32, i32),
        buffer: &mut PixelBuffer,
        history: &mut History,
    ) -> Result<()> {
        let SessionState::Active { start, .. } = self.state else {
            return Ok(());
        };
        if self.tool.is_drag_shape() {
            history.snapshot_before_mutation(buffer);
            let outline = shape_pixels(self.tool, start, p);
            self.write_stamped(buffer, &outline)?;
        }
        self.state = SessionState::Idle;
        Ok(())
    }

    /// The transient overlay for the in-progress gesture: the stamped shape
    /// outline from the press point to the latest pointer position.
    ///
    /// Recomputed per call and never written into the committed buffer; the
    /// host composites it at render time. Empty while idle and for the pen,
    /// whose stroke is already on the buffer.
    pub fn preview_pixels(&self) -> Vec<(i32, i32)> {
        let SessionState::Active { start, last } = self.state else {
            return Vec::new();
        };
        if !self.tool.is_drag_shape() {
            return Vec::new();
        }
        stamp(&shape_pixels(self.tool, start, last), self.brush_size)
    }

    /// Stamps each pixel with the brush disc and writes the result, clipped
    /// against the buffer bounds.
    fn write_stamped(&self, buffer: &mut PixelBuffer, points: &[(i32, i32)]) -> Result<()> {
        for (x, y) in stamp(points, self.brush_size) {
            if buffer.contains(x, y) {
                buffer.set(x, y, self.brush_color)?;
            }
        }
        Ok(())
    }
}

/// Rasterizes the committed geometry for a drag-shape gesture from `start`
/// to `end`.
///
/// For ellipse and circle the dragged span is the bounding diameter, so the
/// center sits at the midpoint of the two points.
fn shape_pixels(tool: Tool, start: (i32, i32), end: (i32, i32)) -> Vec<(i32, i32)> {
    let (x0, y0) = start;
    let (x1, y1) = end;
    match tool {
        Tool::Line => raster::line(x0, y0, x1, y1),
        Tool::Rectangle => raster::rectangle_outline(x0, y0, x1, y1),
        Tool::Ellipse => {
            let xc = (x0 + x1) / 2;
            let yc = (y0 + y1) / 2;
            let rx = (x1 - x0).abs() / 2;
            let ry = (y1 - y0).abs() / 2;
            raster::ellipse(xc, yc, rx, ry)
        }
        Tool::Circle => {
            let xc = (x0 + x1) / 2;
            let yc = (y0 + y1) / 2;
            let dx = (x1 - x0) as f64;
            let dy = (y1 - y0) as f64;
            let r = (dx * dx + dy * dy).sqrt() as i32 / 2;
            raster::circle(xc, yc, r)
        }
        Tool::Pen | Tool::Fill => Vec::new(),
    }
}

/// Expands rasterized pixels by a filled brush disc of diameter `size`.
/// Size 1 leaves the pixels untouched.
fn stamp(points: &[(i32, i32)], size: i32) -> Vec<(i32, i32)> {
    let r = size / 2;
    if r == 0 {
        return points.to_vec();
    }
    let mut offsets = Vec::new();
    for dy in -r..=r {
        for dx in -r..=r {
            if dx * dx + dy * dy <= r * r {
                offsets.push((dx, dy));
            }
        }
    }
    let mut stamped = Vec::with_capacity(points.len() * offsets.len());
    for &(x, y) in points {
        for &(dx, dy) in &offsets {
            stamped.push((x + dx, y + dy));
        }
    }
    stamped
}
