//! Painting matches onto the output canvas
//!
//! Painting order decides what stays visible, so this stage is strictly
//! sequential. Without overlap, the best matches are placed first and any
//! later match that would cover painted pixels is dropped. With overlap, the
//! worst matches are placed first so better ones end up on top.

use std::cmp::Ordering;

use crate::imaging::geometry::Rect;
use crate::imaging::grid::{PixelGrid, Raster};
use crate::pipeline::matcher::Match;

/// Placement order of two matches
///
/// Distance ascending without overlap, descending with it; equal distances
/// place the larger tile first.
pub fn placement_order(left: &Match<'_>, right: &Match<'_>, overlap: bool) -> Ordering {
    let by_distance = if overlap {
        right.distance.total_cmp(&left.distance)
    } else {
        left.distance.total_cmp(&right.distance)
    };
    by_distance.then_with(|| right.tile_area().cmp(&left.tile_area()))
}

/// Sort `matches` into placement order and paint them onto a fresh canvas
///
/// The canvas covers `bounds` and starts fully transparent. `on_update` sees
/// the canvas and the match just painted after every placement; skipped
/// matches do not trigger it.
pub fn compose_matches<F>(
    bounds: Rect,
    mut matches: Vec<Match<'_>>,
    overlap: bool,
    mut on_update: F,
) -> Raster
where
    F: FnMut(&Raster, &Match<'_>),
{
    matches.sort_by(|a, b| placement_order(a, b, overlap));

    let mut canvas = Raster::new(bounds);
    for placement in &matches {
        if !overlap && placement.intersects(&canvas) {
            continue;
        }
        paint(&mut canvas, placement);
        on_update(&canvas, placement);
    }
    canvas
}

/// Source-over blend the match's tile into its location on `canvas`
///
/// The tile's top-left pixel lands on the location's `min`; anything outside
/// the location or the canvas is clipped.
pub fn paint(canvas: &mut Raster, placement: &Match<'_>) {
    let tile = placement.tile.grid();
    let tile_min = tile.bounds().min;
    let region = placement.location.intersect(&canvas.bounds());

    for point in region.pixels() {
        let offset = point - placement.location.min;
        let color = tile.at(tile_min.x + offset.x, tile_min.y + offset.y);
        canvas.blend(point.x, point.y, color);
    }
}
