//! Fixed-size pixel buffer with bounds-checked access

use super::color::Color;
use super::shapes::{contains, Line, Point, Rect, Shape};
use super::{BufferCanvas, Canvas};
use crate::errors::{CanvasError, CanvasResult};

/// Row-major grid of colors
///
/// Coordinates are zero-based with the origin at the top-left corner;
/// `pixels[y * width + x]` holds cell `(x, y)`.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer<C: Color> {
    width: i32,
    height: i32,
    background: C,
    foreground: C,
    pixels: Vec<C>,
}

impl<C: Color> PixelBuffer<C> {
    /// Create a buffer filled with `background`
    ///
    /// Lines and rectangles are drawn with `foreground`.
    pub fn new(width: i32, height: i32, background: C, foreground: C) -> CanvasResult<Self> {
        let invalid = CanvasError::InvalidDimensions { width, height };
        if width <= 0 || height <= 0 {
            return Err(invalid);
        }
        let size = usize::try_from(width)
            .ok()
            .zip(usize::try_from(height).ok())
            .and_then(|(w, h)| w.checked_mul(h))
            .ok_or(invalid)?;

        tracing::debug!(width, height, "Creating pixel buffer");
        Ok(Self {
            width,
            height,
            background,
            foreground,
            pixels: vec![background; size],
        })
    }

    /// Width and height in cells
    #[inline]
    pub fn dimensions(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    #[inline]
    pub fn background(&self) -> C {
        self.background
    }

    #[inline]
    pub fn foreground(&self) -> C {
        self.foreground
    }

    /// Whether `(x, y)` lies inside the grid
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        contains(self.width, self.height, Point::new(x, y))
    }

    /// Index of `p` in `pixels`, if it is inside the grid
    #[inline]
    pub(crate) fn index_of(&self, p: Point) -> Option<usize> {
        if !contains(self.width, self.height, p) {
            return None;
        }
        // Both coordinates are non-negative and below the dimensions here.
        Some(p.y as usize * self.width as usize + p.x as usize)
    }

    /// Color at `(x, y)`
    #[inline]
    pub fn at(&self, x: i32, y: i32) -> CanvasResult<C> {
        self.index_of(Point::new(x, y))
            .map(|i| self.pixels[i])
            .ok_or(CanvasError::OutOfBounds { x, y })
    }

    /// Overwrite the single cell at `(x, y)`
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, color: C) -> CanvasResult<()> {
        let index = self
            .index_of(Point::new(x, y))
            .ok_or(CanvasError::OutOfBounds { x, y })?;
        if !color.is_supported() {
            return Err(CanvasError::UnsupportedColor);
        }
        self.pixels[index] = color;
        Ok(())
    }

    /// Raw pixel data, row-major
    #[inline]
    pub fn pixels(&self) -> &[C] {
        &self.pixels
    }

    /// Iterate over the rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[C]> {
        self.pixels.chunks_exact(self.width as usize)
    }

    /// Draw a shape with the foreground color
    ///
    /// The shape and the foreground are validated before any pixel changes.
    pub fn draw<S: Shape>(&mut self, shape: &S) -> CanvasResult<()> {
        shape.validate(self.width, self.height)?;
        let color = self.foreground;
        if !color.is_supported() {
            return Err(CanvasError::UnsupportedColor);
        }
        for p in shape.cells() {
            if let Some(i) = self.index_of(p) {
                self.pixels[i] = color;
            }
        }
        Ok(())
    }

    /// Draw a horizontal or vertical line between two cells, inclusive
    pub fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) -> CanvasResult<()> {
        tracing::debug!(x1, y1, x2, y2, "Drawing line");
        self.draw(&Line::new((x1, y1), (x2, y2)))
    }

    /// Draw the outline of the rectangle spanned by two opposite corners
    pub fn draw_rect(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) -> CanvasResult<()> {
        tracing::debug!(x1, y1, x2, y2, "Drawing rectangle");
        self.draw(&Rect::new((x1, y1), (x2, y2)))
    }

    /// Mutable access for the fill engine, which does its own bounds checks
    #[inline]
    pub(crate) fn pixels_mut(&mut self) -> &mut [C] {
        &mut self.pixels
    }
}

impl<C: Color> Canvas for PixelBuffer<C> {
    type Color = C;

    fn dimensions(&self) -> (i32, i32) {
        PixelBuffer::dimensions(self)
    }

    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) -> CanvasResult<()> {
        PixelBuffer::draw_line(self, x1, y1, x2, y2)
    }

    fn draw_rect(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) -> CanvasResult<()> {
        PixelBuffer::draw_rect(self, x1, y1, x2, y2)
    }

    fn bucket_fill(&mut self, x: i32, y: i32, color: C) -> CanvasResult<()> {
        PixelBuffer::bucket_fill(self, x, y, color)
    }
}

impl<C: Color> BufferCanvas for PixelBuffer<C> {
    fn at(&self, x: i32, y: i32) -> CanvasResult<C> {
        PixelBuffer::at(self, x, y)
    }

    fn set(&mut self, x: i32, y: i32, color: C) -> CanvasResult<()> {
        PixelBuffer::set(self, x, y, color)
    }

    fn pixels(&self) -> &[C] {
        PixelBuffer::pixels(self)
    }
}
