//! Axis-aligned shapes for canvas drawing

use crate::errors::{CanvasError, CanvasResult};

/// Integer cell coordinate, zero-based, origin top-left
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The four 4-connected neighbours: left, right, up, down.
    ///
    /// Coordinates may fall outside any canvas; callers filter them.
    #[inline]
    pub fn neighbors(self) -> [Point; 4] {
        [
            Self::new(self.x.saturating_sub(1), self.y),
            Self::new(self.x.saturating_add(1), self.y),
            Self::new(self.x, self.y.saturating_sub(1)),
            Self::new(self.x, self.y.saturating_add(1)),
        ]
    }

    #[inline]
    fn out_of_bounds(self) -> CanvasError {
        CanvasError::OutOfBounds {
            x: self.x,
            y: self.y,
        }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Whether `p` lies inside a `width x height` grid.
#[inline]
pub(crate) fn contains(width: i32, height: i32, p: Point) -> bool {
    (0..width).contains(&p.x) && (0..height).contains(&p.y)
}

fn check_endpoints(width: i32, height: i32, a: Point, b: Point) -> CanvasResult<()> {
    for p in [a, b] {
        if !contains(width, height, p) {
            return Err(p.out_of_bounds());
        }
    }
    Ok(())
}

/// Shape trait for drawable primitives
///
/// Drawing is split in two phases so that a rejected shape never leaves a
/// partially drawn buffer behind: [`Shape::validate`] runs first and
/// [`Shape::cells`] is only consumed once it has succeeded.
pub trait Shape {
    /// Check the shape against a `width x height` canvas
    fn validate(&self, width: i32, height: i32) -> CanvasResult<()>;

    /// Cells covered by the shape; may contain duplicates
    fn cells(&self) -> impl Iterator<Item = Point>;
}

/// Horizontal or vertical line segment, endpoints inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    pub start: Point,
    pub end: Point,
}

impl Line {
    pub fn new(start: impl Into<Point>, end: impl Into<Point>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Both endpoints share an axis (a single point counts as both).
    #[inline]
    pub fn is_axis_aligned(&self) -> bool {
        self.start.x == self.end.x || self.start.y == self.end.y
    }

    /// Endpoints ordered so that the first one has the smaller coordinate.
    fn normalized(&self) -> (Point, Point) {
        if (self.start.x, self.start.y) <= (self.end.x, self.end.y) {
            (self.start, self.end)
        } else {
            (self.end, self.start)
        }
    }

    fn into_cells(self) -> impl Iterator<Item = Point> {
        let (from, to) = self.normalized();
        let (step_x, step_y, len) = if from.x == to.x {
            (0, 1, to.y - from.y + 1)
        } else {
            (1, 0, to.x - from.x + 1)
        };
        (0..len).map(move |i| Point::new(from.x + step_x * i, from.y + step_y * i))
    }
}

impl Shape for Line {
    fn validate(&self, width: i32, height: i32) -> CanvasResult<()> {
        check_endpoints(width, height, self.start, self.end)?;
        if !self.is_axis_aligned() {
            return Err(CanvasError::NotAxisAligned {
                x1: self.start.x,
                y1: self.start.y,
                x2: self.end.x,
                y2: self.end.y,
            });
        }
        Ok(())
    }

    fn cells(&self) -> impl Iterator<Item = Point> {
        self.into_cells()
    }
}

/// Rectangle outline given by two opposite corners, in any order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub corner: Point,
    pub opposite: Point,
}

impl Rect {
    pub fn new(corner: impl Into<Point>, opposite: impl Into<Point>) -> Self {
        Self {
            corner: corner.into(),
            opposite: opposite.into(),
        }
    }

    /// Top, bottom, left and right border segments.
    pub fn edges(&self) -> [Line; 4] {
        let Point { x: x1, y: y1 } = self.corner;
        let Point { x: x2, y: y2 } = self.opposite;
        [
            Line::new((x1, y1), (x2, y1)),
            Line::new((x1, y2), (x2, y2)),
            Line::new((x1, y1), (x1, y2)),
            Line::new((x2, y1), (x2, y2)),
        ]
    }
}

impl Shape for Rect {
    fn validate(&self, width: i32, height: i32) -> CanvasResult<()> {
        check_endpoints(width, height, self.corner, self.opposite)
    }

    fn cells(&self) -> impl Iterator<Item = Point> {
        let [top, bottom, left, right] = self.edges();
        top.into_cells()
            .chain(bottom.into_cells())
            .chain(left.into_cells())
            .chain(right.into_cells())
    }
}
