//! Simple turtle graphics on a raster canvas
//!
//! A [`Turtle`] walks a logical plane whose origin sits at the center of
//! the canvas with +y pointing up. Moving with the pen down stamps ink
//! into the canvas, which can then be written out as an image file.
//!
//! How does this work
//!
//! ```text
//!   t = Turtle::new(W, H)
//! Movement
//!   forward, backward, go_to
//!     stroke_segment()       -- pen down only
//!       map_to_pixel()
//!       stamp_disc()         -- about one disc per pixel of travel
//!         canvas.set()
//! Fill
//!   begin_fill .. end_fill   -- vertices recorded per move
//!     fill_polygon()         -- even-odd scanline over pixel rows
//!       canvas.set()
//! Output
//!   save_png / to_file
//!     ppm::write_file()
//! ```
//!
//!     use tuga::{Rgba8, Turtle};
//!
//!     let mut t = Turtle::new(200, 200);
//!     t.set_color(Rgba8::new(200, 40, 40, 255));
//!     for _ in 0..4 {
//!         t.forward(60.0);
//!         t.left(90.0);
//!     }
//!
//! Rendering is deliberately approximate: strokes are capsules built
//! from overlapping discs and fills run at whole-pixel resolution. There
//! is no anti-aliasing and no blending, a later write always replaces an
//! earlier one.

pub mod buffer;
pub mod canvas;
pub mod color;
pub mod ppm;
pub mod scan;
pub mod stroke;
pub mod transform;
pub mod turtle;

pub use crate::buffer::*;
pub use crate::canvas::*;
pub use crate::color::*;
pub use crate::scan::*;
pub use crate::stroke::*;
pub use crate::transform::*;
pub use crate::turtle::*;

/// Color with 8-bit components
pub trait Color: Copy {
    /// Red component [0,255]
    fn red8(&self) -> u8;
    /// Green component [0,255]
    fn green8(&self) -> u8;
    /// Blue component [0,255]
    fn blue8(&self) -> u8;
    /// Alpha component [0,255]
    fn alpha8(&self) -> u8;
}
