//! Integer-only rasterization of geometric primitives.
//!
//! Every function here is pure: parameters in, pixel coordinates out, no
//! buffer access. The same output drives both the transient preview overlay
//! and the final committed write, so a shape commits exactly as previewed.
//! Coordinates are not clipped; consumers clip against the buffer.

/// Bresenham line from (x0, y0) to (x1, y1), both endpoints included.
///
/// The visited pixel set is identical when the endpoints are swapped, only
/// the traversal order reverses. The error-term tie-break alone does not
/// give that guarantee, so the walk always runs from the lexicographically
/// smaller endpoint and the sequence is reversed when the caller passed the
/// endpoints the other way around.
pub fn line(x0: i32, y0: i32, x1: i32, y1: i32) -> Vec<(i32, i32)> {
    if (x1, y1) < (x0, y0) {
        let mut points = walk_line(x1, y1, x0, y0);
        points.reverse();
        return points;
    }
    walk_line(x0, y0, x1, y1)
}

fn walk_line(x0: i32, y0: i32, x1: i32, y1: i32) -> Vec<(i32, i32)> {
    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx - dy;
    let (mut x, mut y) = (x0, y0);

    let mut points = Vec::with_capacity((dx.max(dy) + 1) as usize);
    loop {
        points.push((x, y));
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }
    points
}

/// Midpoint circle of radius `r` around (xc, yc).
///
/// Generates one octant and reflects it 8 ways; points on the axes and the
/// diagonal appear more than once, which is harmless for overwriting raster
/// writes. Returns nothing for r <= 0.
pub fn circle(xc: i32, yc: i32, r: i32) -> Vec<(i32, i32)> {
    if r <= 0 {
        return Vec::new();
    }

    let mut points = Vec::new();
    let mut x = 0;
    let mut y = r;
    let mut d = 1 - r;

    octant_points(&mut points, xc, yc, x, y);
    while x < y {
        x += 1;
        if d < 0 {
            d += 2 * x + 1;
        } else {
            y -= 1;
            d += 2 * (x - y) + 1;
        }
        octant_points(&mut points, xc, yc, x, y);
    }
    points
}

fn octant_points(points: &mut Vec<(i32, i32)>, xc: i32, yc: i32, x: i32, y: i32) {
    points.push((xc + x, yc + y));
    points.push((xc - x, yc + y));
    points.push((xc + x, yc - y));
    points.push((xc - x, yc - y));
    points.push((xc + y, yc + x));
    points.push((xc - y, yc + x));
    points.push((xc + y, yc - x));
    points.push((xc - y, yc - x));
}

/// Two-region midpoint ellipse with radii (rx, ry) around (xc, yc).
///
/// Region 1 covers slope magnitude <= 1 and is seeded with the integer
/// expression ry^2 - rx^2*ry + rx^2/4. Region 2 is seeded from the midpoint
/// evaluated at the region boundary; only that seed involves floating-point,
/// the per-step updates stay integer-accumulated. Returns nothing when
/// either radius is <= 0.
pub fn ellipse(xc: i32, yc: i32, rx: i32, ry: i32) -> Vec<(i32, i32)> {
    if rx <= 0 || ry <= 0 {
        return Vec::new();
    }

    let mut points = Vec::new();
    let (mut x, mut y) = (0i64, ry as i64);
    let rx2 = (rx as i64) * (rx as i64);
    let ry2 = (ry as i64) * (ry as i64);
    let two_rx2 = 2 * rx2;
    let two_ry2 = 2 * ry2;

    // Region 1
    let mut p = ry2 - rx2 * (ry as i64) + rx2 / 4;
    while two_ry2 * x <= two_rx2 * y {
        quadrant_points(&mut points, xc, yc, x as i32, y as i32);
        x += 1;
        if p < 0 {
            p += two_ry2 * x + ry2;
        } else {
            y -= 1;
            p += two_ry2 * x - two_rx2 * y + ry2;
        }
    }

    // Region 2: the seed needs the half-pixel midpoint, rounded once
    let mut p = (ry2 as f64 * (x as f64 + 0.5).powi(2)
        + rx2 as f64 * (y as f64 - 1.0).powi(2)
        - (rx2 * ry2) as f64)
        .round() as i64;
    while y >= 0 {
        quadrant_points(&mut points, xc, yc, x as i32, y as i32);
        y -= 1;
        if p > 0 {
            p -= two_rx2 * y + rx2;
        } else {
            x += 1;
            p += two_ry2 * x - two_rx2 * y + rx2;
        }
    }
    points
}

fn quadrant_points(points: &mut Vec<(i32, i32)>, xc: i32, yc: i32, x: i32, y: i32) {
    points.push((xc + x, yc + y));
    points.push((xc - x, yc + y));
    points.push((xc + x, yc - y));
    points.push((xc - x, yc - y));
}

/// Border pixels of the axis-aligned box spanned by the two corners.
///
/// The corners may be given in any order. Only the outline is produced, no
/// interior pixels, and each border pixel appears exactly once.
pub fn rectangle_outline(x0: i32, y0: i32, x1: i32, y1: i32) -> Vec<(i32, i32)> {
    let (x_min, x_max) = (x0.min(x1), x0.max(x1));
    let (y_min, y_max) = (y0.min(y1), y0.max(y1));

    let mut points = Vec::new();
    for x in x_min..=x_max {
        points.push((x, y_min));
        if y_max != y_min {
            points.push((x, y_max));
        }
    }
    // Side columns, corners already emitted by the row passes
    for y in (y_min + 1)..y_max {
        points.push((x_min, y));
        if x_max != x_min {
            points.push((x_max, y));
        }
    }
    points
}
