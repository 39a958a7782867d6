//! # textcanvas
//!
//! A text-mode raster canvas: a fixed-size grid of colors with
//! axis-aligned line drawing, rectangle outlines and 4-connected bucket
//! fill, plus the small command language and REPL that drive it.
//!
//! ```
//! use textcanvas::canvas::{render_to_string, ByteColor, PixelBuffer};
//!
//! let mut canvas = PixelBuffer::new(4, 3, ByteColor::SPACE, ByteColor::X)?;
//! canvas.draw_rect(0, 0, 3, 2)?;
//! canvas.bucket_fill(1, 1, ByteColor(b'o'))?;
//! assert_eq!(
//!     render_to_string(&canvas),
//!     "------\n|xxxx|\n|xoox|\n|xxxx|\n------\n\n"
//! );
//! # Ok::<(), textcanvas::CanvasError>(())
//! ```

pub mod canvas;
pub mod command;
pub mod config;
pub mod errors;
pub mod repl;
pub mod session;

pub use canvas::{BufferCanvas, ByteColor, Canvas, Color, PixelBuffer};
pub use command::{Command, Parser};
pub use errors::{CanvasError, CanvasResult, ParseError, Result, SessionError};
pub use session::{ByteSession, Outcome, Session};
