//! # Canvas - text-mode raster drawing
//!
//! A fixed-size grid of opaque colors with axis-aligned lines, rectangle
//! outlines and 4-connected bucket fill.
//!
//! ## Architecture
//!
//! ```text
//!        ┌────────────┐      ┌────────────┐
//!        │   Shape    │      │ Bucket fill│
//!        │ Line, Rect │      │ stack+mask │
//!        └─────┬──────┘      └─────┬──────┘
//!              │                   │
//!              ▼                   ▼
//!        ┌──────────────────────────────┐
//!        │   PixelBuffer<C: Color>      │
//!        │   row-major, bounds-checked  │
//!        └──────────────┬───────────────┘
//!                       │ pixels()
//!                       ▼
//!                ┌──────────────┐
//!                │ TextRenderer │
//!                └──────────────┘
//! ```
//!
//! Coordinates are zero-based, origin top-left. Every fallible operation
//! validates its arguments before it mutates anything.

mod buffer;
mod color;
mod fill;
mod render;
mod shapes;

pub use buffer::PixelBuffer;
pub use color::{ByteColor, Color, ColorParser, Glyph};
pub use fill::FillStats;
pub use render::{render_to_string, TextRenderer};
pub use shapes::{Line, Point, Rect, Shape};

use crate::errors::CanvasResult;

/// Drawing surface driven by the command interpreter
pub trait Canvas {
    type Color: Color;

    /// Width and height in cells
    fn dimensions(&self) -> (i32, i32);

    /// Draw a horizontal or vertical line with the foreground color
    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) -> CanvasResult<()>;

    /// Draw a rectangle outline with the foreground color
    fn draw_rect(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) -> CanvasResult<()>;

    /// Repaint the 4-connected region around `(x, y)`
    fn bucket_fill(&mut self, x: i32, y: i32, color: Self::Color) -> CanvasResult<()>;
}

/// Canvas backed by an addressable pixel buffer
pub trait BufferCanvas: Canvas {
    fn at(&self, x: i32, y: i32) -> CanvasResult<Self::Color>;

    fn set(&mut self, x: i32, y: i32, color: Self::Color) -> CanvasResult<()>;

    /// Row-major view of every pixel
    fn pixels(&self) -> &[Self::Color];
}
