//! Read-only pixel grids and the lazy views layered over them
//!
//! Every stage of the pipeline reads pixels through [`PixelGrid`]. Owned
//! storage ([`Raster`], or a plain [`RgbaImage`] anchored at the origin) sits
//! at the bottom; [`SubView`], [`ColorView`] and [`Translated`] borrow a parent
//! grid and reinterpret it without copying. Views hold a shared reference, so
//! the borrow checker guarantees they neither outlive nor mutate the parent.

use image::{Pixel, Rgba, RgbaImage};

use crate::color::transform::ColorTransform;
use crate::imaging::geometry::{Point, Rect};

/// Straight (non-premultiplied) 8-bit RGBA color
pub type Color = Rgba<u8>;

/// Fully transparent black, returned for reads outside a grid
pub const TRANSPARENT: Color = Rgba([0, 0, 0, 0]);

/// Rectangular region of colors addressed by absolute coordinates
pub trait PixelGrid {
    /// Region covered by the grid
    fn bounds(&self) -> Rect;

    /// Color at `(x, y)`; positions outside [`PixelGrid::bounds`] read as
    /// [`TRANSPARENT`]
    fn at(&self, x: i32, y: i32) -> Color;

    /// Number of pixels covered
    fn area(&self) -> u64 {
        self.bounds().area()
    }

    /// View of the part of this grid inside `rect`
    ///
    /// An empty intersection yields a view with the canonical empty bounds
    /// rather than an error.
    fn sub_view(&self, rect: Rect) -> SubView<'_, Self> {
        SubView::new(self, rect)
    }

    /// View that passes every read through `transform`
    fn with_color_model<T: ColorTransform>(&self, transform: T) -> ColorView<'_, Self, T> {
        ColorView {
            parent: self,
            transform,
        }
    }

    /// View of this grid moved by `delta`
    fn translate(&self, delta: Point) -> Translated<'_, Self> {
        Translated {
            parent: self,
            delta,
        }
    }

    /// Copy the grid into owned storage with the same bounds
    fn to_raster(&self) -> Raster {
        let bounds = self.bounds();
        let mut raster = Raster::new(bounds);
        for point in bounds.pixels() {
            raster.put(point.x, point.y, self.at(point.x, point.y));
        }
        raster
    }

    /// Copy the grid into an image whose top-left pixel is the grid's `min`
    fn to_image(&self) -> RgbaImage {
        let bounds = self.bounds();
        RgbaImage::from_fn(bounds.width(), bounds.height(), |x, y| {
            self.at(bounds.min.x + x as i32, bounds.min.y + y as i32)
        })
    }
}

impl<G: PixelGrid + ?Sized> PixelGrid for &G {
    fn bounds(&self) -> Rect {
        (**self).bounds()
    }

    fn at(&self, x: i32, y: i32) -> Color {
        (**self).at(x, y)
    }
}

impl PixelGrid for RgbaImage {
    fn bounds(&self) -> Rect {
        Rect::with_size(Point::ZERO, self.width(), self.height())
    }

    fn at(&self, x: i32, y: i32) -> Color {
        if x < 0 || y < 0 {
            return TRANSPARENT;
        }
        self.get_pixel_checked(x as u32, y as u32)
            .copied()
            .unwrap_or(TRANSPARENT)
    }
}

/// Owned pixel storage anchored at an arbitrary origin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    origin: Point,
    buffer: RgbaImage,
}

impl Raster {
    /// Fully transparent raster covering `bounds`
    pub fn new(bounds: Rect) -> Self {
        Self {
            origin: bounds.min,
            buffer: RgbaImage::new(bounds.width(), bounds.height()),
        }
    }

    /// Wrap an image so its top-left pixel sits at `origin`
    pub const fn from_image(origin: Point, buffer: RgbaImage) -> Self {
        Self { origin, buffer }
    }

    /// Underlying pixel buffer, top-left pixel first
    pub const fn buffer(&self) -> &RgbaImage {
        &self.buffer
    }

    /// Consume the raster and return its pixel buffer
    pub fn into_buffer(self) -> RgbaImage {
        self.buffer
    }

    fn local(&self, x: i32, y: i32) -> Option<(u32, u32)> {
        let lx = u32::try_from(x - self.origin.x).ok()?;
        let ly = u32::try_from(y - self.origin.y).ok()?;
        (lx < self.buffer.width() && ly < self.buffer.height()).then_some((lx, ly))
    }

    /// Overwrite one pixel; writes outside the bounds are ignored
    pub fn put(&mut self, x: i32, y: i32, color: Color) {
        if let Some((lx, ly)) = self.local(x, y) {
            self.buffer.put_pixel(lx, ly, color);
        }
    }

    /// Source-over blend `color` onto one pixel; writes outside the bounds
    /// are ignored
    pub fn blend(&mut self, x: i32, y: i32, color: Color) {
        if let Some((lx, ly)) = self.local(x, y) {
            self.buffer.get_pixel_mut(lx, ly).blend(&color);
        }
    }
}

impl PixelGrid for Raster {
    fn bounds(&self) -> Rect {
        Rect::with_size(self.origin, self.buffer.width(), self.buffer.height())
    }

    fn at(&self, x: i32, y: i32) -> Color {
        self.local(x, y)
            .map_or(TRANSPARENT, |(lx, ly)| *self.buffer.get_pixel(lx, ly))
    }
}

/// Borrowed window onto part of a parent grid
#[derive(Debug, Clone, Copy)]
pub struct SubView<'a, G: ?Sized> {
    parent: &'a G,
    rect: Rect,
}

impl<'a, G: PixelGrid + ?Sized> SubView<'a, G> {
    fn new(parent: &'a G, rect: Rect) -> Self {
        Self {
            parent,
            rect: rect.intersect(&parent.bounds()),
        }
    }
}

impl<G: PixelGrid + ?Sized> PixelGrid for SubView<'_, G> {
    fn bounds(&self) -> Rect {
        self.rect
    }

    fn at(&self, x: i32, y: i32) -> Color {
        if self.rect.contains(Point::new(x, y)) {
            self.parent.at(x, y)
        } else {
            TRANSPARENT
        }
    }
}

/// Borrowed parent grid with a color transform applied on every read
#[derive(Debug, Clone, Copy)]
pub struct ColorView<'a, G: ?Sized, T> {
    parent: &'a G,
    transform: T,
}

impl<G: ?Sized, T> ColorView<'_, G, T> {
    /// Transform applied by this view
    pub const fn transform(&self) -> &T {
        &self.transform
    }
}

impl<G: PixelGrid + ?Sized, T: ColorTransform> PixelGrid for ColorView<'_, G, T> {
    fn bounds(&self) -> Rect {
        self.parent.bounds()
    }

    fn at(&self, x: i32, y: i32) -> Color {
        self.transform.convert(self.parent.at(x, y))
    }
}

/// Borrowed parent grid shifted to new coordinates
#[derive(Debug, Clone, Copy)]
pub struct Translated<'a, G: ?Sized> {
    parent: &'a G,
    delta: Point,
}

impl<G: PixelGrid + ?Sized> PixelGrid for Translated<'_, G> {
    fn bounds(&self) -> Rect {
        self.parent.bounds().translate(self.delta)
    }

    fn at(&self, x: i32, y: i32) -> Color {
        self.parent.at(x - self.delta.x, y - self.delta.y)
    }
}

/// Whether any position inside both grids is non-transparent in both
///
/// Only the intersection of the two bounds is examined, so disjoint grids
/// never intersect.
pub fn intersect<A, B>(a: &A, b: &B) -> bool
where
    A: PixelGrid + ?Sized,
    B: PixelGrid + ?Sized,
{
    a.bounds()
        .intersect(&b.bounds())
        .pixels()
        .any(|p| a.at(p.x, p.y).0[3] > 0 && b.at(p.x, p.y).0[3] > 0)
}
