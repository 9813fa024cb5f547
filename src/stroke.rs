//! Segment stroking by disc stamping
//!
//! A thick stroked segment is approximated as a capsule: filled discs
//! of radius width/2 stamped at roughly one sample per pixel of travel
//! along the segment. The overlap between neighboring discs leaves no
//! gaps at any width or angle, and the round caps fall out for free.

use log::trace;

use crate::canvas::Canvas;
use crate::transform::map_to_pixel;
use crate::Color;

/// Draw a stroked segment between two logical points
///
/// `width` is the stroke diameter in pixels. A zero length segment
/// degenerates to a single disc, so a pen put down without moving
/// still leaves a dot. Pixels are overwritten, not blended.
pub fn stroke_segment<C: Color>(
    canvas: &mut Canvas,
    from: (f64, f64),
    to: (f64, f64),
    width: f64,
    color: C,
) {
    let (x0, y0) = from;
    let (dx, dy) = (to.0 - x0, to.1 - y0);
    let dist = dx.hypot(dy);
    if dist == 0.0 {
        trace!("zero length segment at ({},{}), stamping a dot", x0, y0);
        stamp_disc(canvas, from, width / 2.0, color);
        return;
    }
    // One sample per pixel of distance, plus endpoints
    let steps = dist.ceil() as usize + 1;
    for i in 0..=steps {
        let t = i as f64 / steps as f64;
        stamp_disc(canvas, (x0 + t * dx, y0 + t * dy), width / 2.0, color);
    }
}

/// Stamp a filled disc of radius `r` centered at a logical point
///
/// No-op for `r <= 0`. The center is mapped to an integer pixel and a
/// bounding box of `ceil(r)` pixels around it, clamped to the canvas,
/// is scanned. A pixel is inside when its center, offset (0.5,0.5)
/// from the mapped disc center, lies within `r`. The test compares
/// squared distances so no square root is taken per pixel.
pub fn stamp_disc<C: Color>(canvas: &mut Canvas, center: (f64, f64), r: f64, color: C) {
    if r <= 0.0 {
        return;
    }
    let (w, h) = (canvas.width() as i64, canvas.height() as i64);
    let (px, py) = map_to_pixel(canvas.width(), canvas.height(), center.0, center.1);
    let rr = r.ceil() as i64;
    let min_x = (px - rr).max(0).min(w - 1);
    let max_x = (px + rr).max(0).min(w - 1);
    let min_y = (py - rr).max(0).min(h - 1);
    let max_y = (py + rr).max(0).min(h - 1);

    let r2 = r * r;
    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let dx = (x - px) as f64 + 0.5;
            let dy = (y - py) as f64 + 0.5;
            if dx * dx + dy * dy <= r2 {
                canvas.set((x as usize, y as usize), color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba8;

    fn inked(canvas: &Canvas) -> Vec<(usize, usize)> {
        let mut out = Vec::new();
        for y in 0..canvas.height() {
            for x in 0..canvas.width() {
                if canvas.get((x, y)) != Rgba8::transparent() {
                    out.push((x, y));
                }
            }
        }
        out
    }

    /// Distance from a point to a horizontal segment, all in pixel space
    fn dist_to_hseg(px: f64, py: f64, x0: f64, x1: f64, y: f64) -> f64 {
        let cx = px.max(x0).min(x1);
        ((px - cx).powi(2) + (py - y).powi(2)).sqrt()
    }

    #[test]
    fn zero_length_segment_equals_one_disc() {
        let ink = Rgba8::black();
        let mut seg = Canvas::new(40, 40);
        let mut dot = Canvas::new(40, 40);
        stroke_segment(&mut seg, (3.0, -2.0), (3.0, -2.0), 5.0, ink);
        stamp_disc(&mut dot, (3.0, -2.0), 2.5, ink);
        assert_eq!(seg.bytes(), dot.bytes());
        assert!(!inked(&seg).is_empty());
    }

    #[test]
    fn non_positive_radius_is_a_no_op() {
        let mut canvas = Canvas::new(10, 10);
        stamp_disc(&mut canvas, (0.0, 0.0), 0.0, Rgba8::black());
        stamp_disc(&mut canvas, (0.0, 0.0), -3.0, Rgba8::black());
        assert!(inked(&canvas).is_empty());
    }

    #[test]
    fn discs_clamp_to_the_canvas() {
        let mut canvas = Canvas::new(10, 10);
        // half off the left edge
        stamp_disc(&mut canvas, (-5.0, 0.0), 2.0, Rgba8::black());
        // entirely outside
        stamp_disc(&mut canvas, (-50.0, 40.0), 3.0, Rgba8::black());
        for (x, _) in inked(&canvas) {
            assert!(x <= 2);
        }
        assert!(!inked(&canvas).is_empty());
    }

    #[test]
    fn oversampling_leaves_the_pixel_set_unchanged() {
        // Horizontal, vertical, and 45 degree segments: doubling the
        // sample density must not touch any new pixel, since a disc
        // only depends on the rounded pixel position of its center.
        let ink = Rgba8::black();
        let cases = [
            ((-10.0, 0.0), (10.0, 0.0)),
            ((0.0, -10.0), (0.0, 10.0)),
            ((-8.0, -8.0), (8.0, 8.0)),
        ];
        for &(a, b) in cases.iter() {
            let mut coarse = Canvas::new(48, 48);
            let mut fine = Canvas::new(48, 48);
            stroke_segment(&mut coarse, a, b, 3.0, ink);

            let (dx, dy) = (b.0 - a.0, b.1 - a.1);
            let steps = 2 * (dx.hypot(dy).ceil() as usize + 1);
            for i in 0..=steps {
                let t = i as f64 / steps as f64;
                stamp_disc(&mut fine, (a.0 + t * dx, a.1 + t * dy), 1.5, ink);
            }
            assert_eq!(coarse.bytes(), fine.bytes());
        }
    }

    #[test]
    fn stroke_stays_within_capsule_bounds() {
        // No inked pixel center may sit farther than width/2 + 0.5
        // from the ideal segment.
        let mut canvas = Canvas::new(60, 60);
        stroke_segment(&mut canvas, (-15.0, 0.0), (15.0, 0.0), 4.0, Rgba8::black());
        let pixels = inked(&canvas);
        assert!(!pixels.is_empty());
        for (x, y) in pixels {
            // the segment runs from column 15 to 45 on row 30 in pixel space
            let d = dist_to_hseg(x as f64 + 0.5, y as f64 + 0.5, 15.0, 45.0, 30.0);
            assert!(d <= 2.5, "pixel ({},{}) at distance {}", x, y, d);
        }
    }
}
