//! Bucket fill over 4-connected regions

use super::buffer::PixelBuffer;
use super::color::Color;
use super::shapes::Point;
use crate::errors::{CanvasError, CanvasResult};

/// Per-call record of cells already taken off the worklist
///
/// Same shape as the buffer it guards; lives only for one fill.
#[derive(Debug)]
struct VisitedMask {
    values: Vec<bool>,
}

impl VisitedMask {
    fn new(len: usize) -> Self {
        Self {
            values: vec![false; len],
        }
    }

    #[inline]
    fn is_visited(&self, index: usize) -> bool {
        self.values[index]
    }

    #[inline]
    fn mark(&mut self, index: usize) {
        self.values[index] = true;
    }
}

/// Counters reported by a finished fill
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FillStats {
    /// Cells taken off the worklist inside the grid
    pub visited: usize,
    /// Cells repainted
    pub painted: usize,
}

impl<C: Color> PixelBuffer<C> {
    /// Repaint the 4-connected region around `(x, y)` with `color`
    ///
    /// The region is every cell reachable from the seed through up, down,
    /// left and right steps without leaving the seed's original color.
    pub fn bucket_fill(&mut self, x: i32, y: i32, color: C) -> CanvasResult<()> {
        self.bucket_fill_with_stats(x, y, color).map(|_| ())
    }

    /// Same as [`PixelBuffer::bucket_fill`], also returning work counters
    pub fn bucket_fill_with_stats(&mut self, x: i32, y: i32, color: C) -> CanvasResult<FillStats> {
        let seed = Point::new(x, y);
        let seed_index = self
            .index_of(seed)
            .ok_or(CanvasError::OutOfBounds { x, y })?;
        if !color.is_supported() {
            return Err(CanvasError::UnsupportedColor);
        }

        let seed_color = self.pixels()[seed_index];
        let mut visited = VisitedMask::new(self.pixels().len());
        let mut stack = vec![seed];
        let mut stats = FillStats::default();

        while let Some(p) = stack.pop() {
            let Some(index) = self.index_of(p) else {
                continue;
            };
            // A cell can be pushed by several neighbours before it is popped.
            if visited.is_visited(index) {
                continue;
            }
            visited.mark(index);
            stats.visited += 1;

            let pixels = self.pixels_mut();
            if pixels[index] != seed_color {
                continue;
            }
            pixels[index] = color;
            stats.painted += 1;

            for n in p.neighbors() {
                match self.index_of(n) {
                    Some(i) if !visited.is_visited(i) => stack.push(n),
                    _ => {}
                }
            }
        }

        tracing::debug!(
            x,
            y,
            visited = stats.visited,
            painted = stats.painted,
            "Bucket fill finished"
        );
        Ok(stats)
    }
}
