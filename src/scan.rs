//! Scanline polygon filling
//!
//! Even-odd parity fill over integer pixel vertices. Every canvas row
//! is tested against every polygon edge, which keeps the cost at
//! O(rows * edges) with no triangulation and no extra storage beyond
//! the crossing list. Simple concave outlines fill correctly, and a
//! self-intersecting outline fills to whatever the parity rule says.

use crate::canvas::Canvas;
use crate::Color;

/// Fill a closed polygon given as pixel coordinate vertices
///
/// The path is expected to be explicitly closed, first vertex repeated
/// at the end; edges wrap last-to-first regardless, so the duplicate
/// only adds a degenerate edge that never crosses a scanline. Fewer
/// than 3 vertices is a no-op.
///
/// For each row, an edge contributes a crossing iff exactly one of its
/// endpoints satisfies `y <= row` (half-open rule, so a shared vertex
/// is never counted twice and horizontal edges never cross). Crossing
/// columns are interpolated in integer arithmetic, sorted, and the
/// spans between alternate pairs are filled inclusive of both ends,
/// clamped to the canvas.
pub fn fill_polygon<C: Color>(canvas: &mut Canvas, path: &[(i64, i64)], color: C) {
    if path.len() < 3 {
        return;
    }
    let (w, h) = (canvas.width() as i64, canvas.height() as i64);
    let mut crossings: Vec<i64> = Vec::new();
    for y in 0..h {
        crossings.clear();
        for i in 0..path.len() {
            let (x0, y0) = path[i];
            let (x1, y1) = path[(i + 1) % path.len()];
            if (y0 <= y && y1 > y) || (y1 <= y && y0 > y) {
                crossings.push(x0 + (y - y0) * (x1 - x0) / (y1 - y0));
            }
        }
        crossings.sort_unstable();
        for pair in crossings.chunks_exact(2) {
            let lo = pair[0].max(0);
            let hi = pair[1].min(w - 1);
            for x in lo..=hi {
                canvas.set((x as usize, y as usize), color);
            }
        }
    }
}
