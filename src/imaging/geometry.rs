//! Integer points, half-open rectangles and the stepped rectangle scan
//!
//! Rectangles follow the usual raster convention: `min` is inclusive and
//! `max` is exclusive, so a rectangle's width is `max.x - min.x`. The stepped
//! scan produced by [`iterate`] is the one exception: it visits origins up to
//! and including `max`, which is what lets a grid of cells reach the far edge
//! of an image whose size is not a multiple of the step.

use std::ops::{Add, Neg, Sub};

/// An integer position or displacement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Point {
    /// Horizontal coordinate
    pub x: i32,
    /// Vertical coordinate
    pub y: i32,
}

impl Point {
    /// The origin, also used as the "no displacement" value
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a point from its coordinates
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Point {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

/// Axis-aligned rectangle with inclusive `min` and exclusive `max`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// Top-left corner (inclusive)
    pub min: Point,
    /// Bottom-right corner (exclusive)
    pub max: Point,
}

impl Rect {
    /// Create a rectangle from its corner coordinates
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: Point::new(x0, y0),
            max: Point::new(x1, y1),
        }
    }

    /// Rectangle of the given size anchored at `origin`
    pub fn with_size(origin: Point, width: u32, height: u32) -> Self {
        Self {
            min: origin,
            max: origin + Point::new(width as i32, height as i32),
        }
    }

    /// Horizontal extent, zero for inverted rectangles
    pub const fn width(&self) -> u32 {
        if self.max.x > self.min.x {
            (self.max.x - self.min.x) as u32
        } else {
            0
        }
    }

    /// Vertical extent, zero for inverted rectangles
    pub const fn height(&self) -> u32 {
        if self.max.y > self.min.y {
            (self.max.y - self.min.y) as u32
        } else {
            0
        }
    }

    /// Width and height as a pair
    pub const fn size(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    /// Number of pixels covered
    pub const fn area(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }

    /// Whether the rectangle covers no pixels
    pub const fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Whether `point` lies inside the rectangle
    pub const fn contains(&self, point: Point) -> bool {
        point.x >= self.min.x && point.x < self.max.x && point.y >= self.min.y && point.y < self.max.y
    }

    /// Largest rectangle contained in both; empty intersections collapse to
    /// [`Rect::default`]
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Self {
        let rect = Self::new(
            self.min.x.max(other.min.x),
            self.min.y.max(other.min.y),
            self.max.x.min(other.max.x),
            self.max.y.min(other.max.y),
        );
        if rect.is_empty() { Self::default() } else { rect }
    }

    /// The same rectangle moved by `delta`
    #[must_use]
    pub fn translate(&self, delta: Point) -> Self {
        Self {
            min: self.min + delta,
            max: self.max + delta,
        }
    }

    /// Row-major scan over every pixel position in the rectangle
    pub fn pixels(&self) -> impl Iterator<Item = Point> + use<> {
        let Self { min, max } = *self;
        (min.y..max.y).flat_map(move |y| (min.x..max.x).map(move |x| Point::new(x, y)))
    }
}

/// Default scan step of one pixel in each direction
pub const UNIT_STEP: Point = Point::new(1, 1);

/// Stepped row-major scan over a rectangle, `max` inclusive
///
/// Clone it before consuming to scan the same rectangle twice.
#[derive(Debug, Clone)]
pub struct RectIter {
    rect: Rect,
    step: Point,
    next: Option<Point>,
}

impl Iterator for RectIter {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        let current = self.next?;
        let mut following = Point::new(current.x + self.step.x, current.y);
        if following.x > self.rect.max.x {
            following = Point::new(self.rect.min.x, current.y + self.step.y);
        }
        self.next = (following.y <= self.rect.max.y).then_some(following);
        Some(current)
    }
}

/// Scan origins covering `rect` from `min` to `max` inclusive
///
/// Advances by `step.x` along a row, then by `step.y` to the next row. A
/// missing step defaults to [`UNIT_STEP`]; non-positive components are
/// raised to one so the scan always terminates.
pub fn iterate(rect: Rect, step: Option<Point>) -> RectIter {
    let step = step.unwrap_or(UNIT_STEP);
    let step = Point::new(step.x.max(1), step.y.max(1));
    let inverted = rect.max.x < rect.min.x || rect.max.y < rect.min.y;
    RectIter {
        rect,
        step,
        next: (!inverted).then_some(rect.min),
    }
}
