//! Property-based tests for the canvas.
//! Invariants must hold for every canvas size and coordinate, not just
//! hand-picked examples.

use proptest::prelude::*;
use textcanvas::canvas::{ByteColor, PixelBuffer};
use textcanvas::CanvasError;

const BG: ByteColor = ByteColor(b' ');
const FG: ByteColor = ByteColor(b'x');

fn canvas(width: i32, height: i32) -> PixelBuffer<ByteColor> {
    PixelBuffer::new(width, height, BG, FG).expect("positive dimensions")
}

/// Canvas size plus a coordinate pair inside it.
fn sized_points() -> impl Strategy<Value = (i32, i32, i32, i32, i32, i32)> {
    (1i32..=24, 1i32..=24).prop_flat_map(|(w, h)| {
        (Just(w), Just(h), 0..w, 0..h, 0..w, 0..h)
    })
}

proptest! {
    /// A fresh canvas has width*height cells, all background.
    #[test]
    fn new_canvas_is_background(w in 1i32..=64, h in 1i32..=64) {
        let c = canvas(w, h);
        prop_assert_eq!(c.pixels().len(), (w * h) as usize);
        prop_assert!(c.pixels().iter().all(|p| *p == BG));
        prop_assert_eq!(c.dimensions(), (w, h));
    }

    /// Non-positive width or height is always rejected.
    #[test]
    fn non_positive_dimensions_rejected(w in -50i32..=0, h in 1i32..=50) {
        prop_assert_eq!(
            PixelBuffer::new(w, h, BG, FG),
            Err(CanvasError::InvalidDimensions { width: w, height: h })
        );
        prop_assert_eq!(
            PixelBuffer::new(h, w, BG, FG),
            Err(CanvasError::InvalidDimensions { width: h, height: w })
        );
    }

    /// Out-of-range access fails and never mutates.
    #[test]
    fn out_of_bounds_access_rejected(x in -100i32..100, y in -100i32..100) {
        let mut c = canvas(10, 10);
        let inside = (0..10).contains(&x) && (0..10).contains(&y);
        let before = c.clone();
        if inside {
            prop_assert!(c.at(x, y).is_ok());
        } else {
            prop_assert_eq!(c.at(x, y), Err(CanvasError::OutOfBounds { x, y }));
            prop_assert_eq!(c.set(x, y, FG), Err(CanvasError::OutOfBounds { x, y }));
            prop_assert_eq!(&c, &before);
        }
    }

    /// Swapping line endpoints gives the same buffer.
    #[test]
    fn draw_line_is_order_independent((w, h, x1, y1, x2, _) in sized_points(), vertical in any::<bool>()) {
        let (ax, ay, bx, by) = if vertical { (x1, y1, x1, (y1 + 1) % h) } else { (x1, y1, x2, y1) };
        let mut a = canvas(w, h);
        let mut b = canvas(w, h);
        a.draw_line(ax, ay, bx, by).expect("aligned line");
        b.draw_line(bx, by, ax, ay).expect("aligned line");
        prop_assert_eq!(a, b);
    }

    /// Diagonal endpoints are rejected and the buffer stays unchanged.
    #[test]
    fn diagonal_lines_rejected((w, h, x1, y1, x2, y2) in sized_points()) {
        prop_assume!(x1 != x2 && y1 != y2);
        let mut c = canvas(w, h);
        let result = c.draw_line(x1, y1, x2, y2);
        let is_not_aligned = matches!(result, Err(CanvasError::NotAxisAligned { .. }));
        prop_assert!(is_not_aligned);
        prop_assert!(c.pixels().iter().all(|p| *p == BG));
    }

    /// A rectangle paints exactly the perimeter of its bounding box.
    #[test]
    fn draw_rect_paints_perimeter((w, h, x1, y1, x2, y2) in sized_points()) {
        let mut c = canvas(w, h);
        c.draw_rect(x1, y1, x2, y2).expect("corners inside");
        let (lx, hx) = (x1.min(x2), x1.max(x2));
        let (ly, hy) = (y1.min(y2), y1.max(y2));
        for y in 0..h {
            for x in 0..w {
                let inside = (lx..=hx).contains(&x) && (ly..=hy).contains(&y);
                let on_edge = inside && (x == lx || x == hx || y == ly || y == hy);
                let expected = if on_edge { FG } else { BG };
                prop_assert_eq!(c.at(x, y), Ok(expected), "cell ({}, {})", x, y);
            }
        }
    }

    /// Filling twice equals filling once.
    #[test]
    fn bucket_fill_is_idempotent(
        (w, h, x1, y1, x2, y2) in sized_points(),
        seed_x in 0i32..24,
        seed_y in 0i32..24,
    ) {
        let mut once = canvas(w, h);
        once.draw_rect(x1, y1, x2, y2).expect("rect");
        let (sx, sy) = (seed_x % w, seed_y % h);
        let mut twice = once.clone();
        once.bucket_fill(sx, sy, ByteColor(b'o')).expect("fill");
        twice.bucket_fill(sx, sy, ByteColor(b'o')).expect("fill");
        twice.bucket_fill(sx, sy, ByteColor(b'o')).expect("fill");
        prop_assert_eq!(once, twice);
    }

    /// Each cell is visited at most once, even when refilling with the seed color.
    #[test]
    fn bucket_fill_work_is_bounded((w, h, x1, y1, x2, y2) in sized_points()) {
        let mut c = canvas(w, h);
        c.draw_rect(x1, y1, x2, y2).expect("rect");
        let stats = c.bucket_fill_with_stats(x1, y1, FG).expect("same-color fill");
        prop_assert!(stats.visited <= (w * h) as usize);
        prop_assert!(stats.painted <= stats.visited);
    }
}
