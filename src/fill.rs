//! Scan-line flood fill over a [`PixelBuffer`].
//!
//! Queue-based region growth: each dequeued seed is extended left and right
//! to the maximal horizontal run of target-colored pixels, the whole run is
//! recolored in one pass, and only the vertical neighbors of that run are
//! enqueued. Work is bounded by the filled area rather than by the number of
//! enqueued pixels.

use std::collections::VecDeque;

use egui::Color32;

use crate::buffer::PixelBuffer;
use crate::error::{PaintError, Result};

/// Recolors the 4-connected region of `target`-colored pixels reachable from
/// the seed with `replacement`.
///
/// The target color is the caller's capture of the seed pixel, taken before
/// any mutation. Two silent no-op cases: the target already equals the
/// replacement (filling would toggle forever otherwise), and the seed pixel
/// no longer matches the captured target (a stale call). An out-of-range
/// seed is an error, as is a buffer with no pixels.
pub fn flood_fill(
    buffer: &mut PixelBuffer,
    x: i32,
    y: i32,
    target: Color32,
    replacement: Color32,
) -> Result<()> {
    if buffer.pixels().is_empty() {
        return Err(PaintError::InvalidState(
            "flood fill on a buffer with no pixels".into(),
        ));
    }
    if target == replacement {
        return Ok(());
    }
    if buffer.get(x, y)? != target {
        return Ok(());
    }

    let width = buffer.width() as i32;
    let height = buffer.height() as i32;
    let is_target =
        |buffer: &PixelBuffer, x: i32, y: i32| buffer.get(x, y).is_ok_and(|c| c == target);

    let mut queue = VecDeque::new();
    queue.push_back((x, y));

    while let Some((cx, cy)) = queue.pop_front() {
        // A pixel may have been recolored since it was enqueued
        if !is_target(buffer, cx, cy) {
            continue;
        }

        // Extend to the maximal contiguous run of target pixels on this row
        let mut west = cx;
        while west > 0 && is_target(buffer, west - 1, cy) {
            west -= 1;
        }
        let mut east = cx;
        while east < width - 1 && is_target(buffer, east + 1, cy) {
            east += 1;
        }

        for i in west..=east {
            buffer.set(i, cy, replacement)?;

            // Seed the rows above and below only where they still match;
            // recolored pixels fail the check, so no pixel is visited twice
            if cy > 0 && is_target(buffer, i, cy - 1) {
                queue.push_back((i, cy - 1));
            }
            if cy < height - 1 && is_target(buffer, i, cy + 1) {
                queue.push_back((i, cy + 1));
            }
        }
    }

    Ok(())
}
