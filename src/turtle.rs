//! Turtle state machine
//!
//! The turtle is a cursor over a [`Canvas`]: a logical position with
//! the origin at the canvas center and +y up, a heading in degrees
//! where 0 faces east (+x) and positive turns go counterclockwise, and
//! a pen. Moving with the pen down strokes a segment; while a fill is
//! being recorded every move also appends the pixel position of the
//! new location to the fill path.

use std::f64::consts::PI;
use std::mem;
use std::path::Path;

use log::debug;

use crate::canvas::Canvas;
use crate::color::Rgba8;
use crate::scan::fill_polygon;
use crate::stroke::stroke_segment;
use crate::transform::map_to_pixel;

/// Pen state
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Pen {
    /// Ink is laid down while the pen is down
    pub down: bool,
    /// Ink color
    pub color: Rgba8,
    /// Stroke diameter in pixels, always positive
    pub width: f64,
}

impl Default for Pen {
    fn default() -> Self {
        Pen {
            down: true,
            color: Rgba8::black(),
            width: 2.0,
        }
    }
}

/// Position and heading, saved around shape tracing
#[derive(Debug, Copy, Clone)]
struct Snapshot {
    x: f64,
    y: f64,
    heading_deg: f64,
}

/// Turtle graphics cursor drawing onto an owned canvas
///
/// A new turtle starts at the origin facing east, pen down, black ink
/// of width 2.
///
///     use tuga::Turtle;
///
///     let mut t = Turtle::new(100, 100);
///     t.forward(30.0);
///     t.left(90.0);
///     t.forward(30.0);
///     assert_eq!(t.heading(), 90.0);
///
pub struct Turtle {
    canvas: Canvas,
    bg: Rgba8,
    x: f64,
    y: f64,
    heading_deg: f64,
    pen: Pen,
    filling: bool,
    fill_color: Rgba8,
    fill_path: Vec<(i64, i64)>,
}

impl Turtle {
    /// Create a turtle with a width x height canvas on a white background
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_background(width, height, Rgba8::white())
    }
    /// Create a turtle with a width x height canvas painted with `bg`
    pub fn with_background(width: usize, height: usize, bg: Rgba8) -> Self {
        let mut canvas = Canvas::new(width, height);
        canvas.fill(bg);
        Turtle {
            canvas,
            bg,
            x: 0.0,
            y: 0.0,
            heading_deg: 0.0,
            pen: Pen::default(),
            filling: false,
            fill_color: Rgba8::black(),
            fill_path: Vec::new(),
        }
    }
    /// Canvas width in pixels
    pub fn width(&self) -> usize {
        self.canvas.width()
    }
    /// Canvas height in pixels
    pub fn height(&self) -> usize {
        self.canvas.height()
    }
    /// The canvas drawn so far
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }
    /// Mutable access to the canvas for direct pixel work
    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }
    /// Current logical position
    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }
    /// Current heading in degrees
    pub fn heading(&self) -> f64 {
        self.heading_deg
    }
    /// Current pen state
    pub fn pen(&self) -> Pen {
        self.pen
    }

    /// Lift the pen, moves stop drawing
    pub fn pen_up(&mut self) {
        self.pen.down = false;
    }
    /// Put the pen down, moves draw again
    pub fn pen_down(&mut self) {
        self.pen.down = true;
    }
    /// Set the ink color
    pub fn set_color(&mut self, c: Rgba8) {
        self.pen.color = c;
    }
    /// Set the stroke width in pixels, ignored unless positive
    pub fn set_width(&mut self, w: f64) {
        if w > 0.0 {
            self.pen.width = w;
        }
    }

    /// Face an absolute heading in degrees
    pub fn set_heading(&mut self, deg: f64) {
        self.heading_deg = deg;
    }
    /// Turn left (counterclockwise) by `deg` degrees
    pub fn left(&mut self, deg: f64) {
        self.heading_deg += deg;
    }
    /// Turn right (clockwise) by `deg` degrees
    pub fn right(&mut self, deg: f64) {
        self.heading_deg -= deg;
    }

    /// Move forward `d` steps along the current heading
    pub fn forward(&mut self, d: f64) {
        let rad = self.heading_deg.to_radians();
        let nx = self.x + d * rad.cos();
        let ny = self.y + d * rad.sin();
        self.move_pen(nx, ny);
    }
    /// Move backward `d` steps without turning
    pub fn backward(&mut self, d: f64) {
        self.forward(-d);
    }
    /// Move to logical coordinates (`x`,`y`), drawing if the pen is down
    pub fn go_to(&mut self, x: f64, y: f64) {
        self.move_pen(x, y);
    }
    /// Return to the origin facing east, drawing if the pen is down
    pub fn home(&mut self) {
        self.go_to(0.0, 0.0);
        self.heading_deg = 0.0;
    }

    /// Repaint the canvas with the background, keeping the turtle state
    pub fn clear(&mut self) {
        self.canvas.fill(self.bg);
    }
    /// Repaint the canvas and restore position, heading, and pen defaults
    pub fn reset(&mut self) {
        self.canvas.fill(self.bg);
        self.x = 0.0;
        self.y = 0.0;
        self.heading_deg = 0.0;
        self.pen = Pen::default();
        self.filling = false;
        self.fill_path.clear();
    }

    /// Trace a rectangle of `w` by `h` steps from the current position
    ///
    /// The first side runs along the current heading. Position and
    /// heading are restored afterwards.
    pub fn rect(&mut self, w: f64, h: f64) {
        let saved = self.snapshot();
        self.forward(w);
        self.left(90.0);
        self.forward(h);
        self.left(90.0);
        self.forward(w);
        self.left(90.0);
        self.forward(h);
        self.restore(saved);
    }
    /// Trace a regular polygon with `n` sides of length `side`
    ///
    /// No-op for fewer than 3 sides. Position and heading are restored
    /// afterwards.
    pub fn polygon(&mut self, n: usize, side: f64) {
        if n < 3 {
            return;
        }
        let saved = self.snapshot();
        let turn = 360.0 / n as f64;
        for _ in 0..n {
            self.forward(side);
            self.left(turn);
        }
        self.restore(saved);
    }
    /// Trace an approximate circle of radius `r`
    ///
    /// The circle is walked as a polyline with segments of about 3
    /// pixels, at least 12 of them. A negative radius turns clockwise.
    /// Position and heading are restored afterwards.
    pub fn circle(&mut self, r: f64) {
        let circ = 2.0 * PI * r.abs();
        let segments = (circ / 3.0).max(12.0) as usize;
        let angle = 360.0 / segments as f64;
        let step = circ / segments as f64;
        let turn = if r < 0.0 { -angle } else { angle };
        let saved = self.snapshot();
        for _ in 0..segments {
            self.forward(step);
            self.left(turn);
        }
        self.restore(saved);
    }

    /// Start recording a fill path
    ///
    /// Every subsequent move appends a vertex until [`end_fill`] runs.
    /// A previously recorded path is dropped.
    ///
    /// [`end_fill`]: Turtle::end_fill
    pub fn begin_fill(&mut self) {
        self.filling = true;
        self.fill_path.clear();
    }
    /// Set the color used by [`end_fill`]
    ///
    /// [`end_fill`]: Turtle::end_fill
    pub fn set_fill_color(&mut self, c: Rgba8) {
        self.fill_color = c;
    }
    /// Fill the polygon traced since [`begin_fill`] and stop recording
    ///
    /// Paths of fewer than 3 vertices are discarded without drawing.
    /// The path is closed by repeating its first vertex when needed,
    /// then handed to the scanline filler. Either way the recorded
    /// path is consumed.
    ///
    /// [`begin_fill`]: Turtle::begin_fill
    pub fn end_fill(&mut self) {
        let mut path = mem::replace(&mut self.fill_path, Vec::new());
        let filling = self.filling;
        self.filling = false;
        if !filling {
            return;
        }
        if path.len() < 3 {
            debug!("discarding fill path with {} vertices", path.len());
            return;
        }
        if path.first() != path.last() {
            let first = path[0];
            path.push(first);
        }
        fill_polygon(&mut self.canvas, &path, self.fill_color);
    }

    /// Write the canvas to a PNG file
    pub fn save_png<P: AsRef<Path>>(&self, filename: P) -> Result<(), std::io::Error> {
        self.canvas.to_file(filename)
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            x: self.x,
            y: self.y,
            heading_deg: self.heading_deg,
        }
    }
    fn restore(&mut self, s: Snapshot) {
        self.x = s.x;
        self.y = s.y;
        self.heading_deg = s.heading_deg;
    }
    fn move_pen(&mut self, nx: f64, ny: f64) {
        if self.pen.down {
            stroke_segment(
                &mut self.canvas,
                (self.x, self.y),
                (nx, ny),
                self.pen.width,
                self.pen.color,
            );
        }
        if self.filling {
            let (w, h) = (self.canvas.width(), self.canvas.height());
            self.fill_path.push(map_to_pixel(w, h, nx, ny));
        }
        self.x = nx;
        self.y = ny;
    }
}
