//! Assigning the closest tile variant to every grid cell of the target
//!
//! Variants only compete for cells of their own exact size, so the target is
//! gridded once per size class. Size classes are matched in parallel and the
//! per-class results concatenated.

use std::collections::BTreeMap;

use image::RgbaImage;
use rayon::prelude::*;
use tracing::debug;

use crate::analysis::mode::Mode;
use crate::imaging::geometry::{Point, Rect, iterate};
use crate::imaging::grid::{PixelGrid, SubView, intersect};

/// Grid step used when laying cells over the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Shift {
    /// Step by the size of the tiles being matched, so cells never overlap
    #[default]
    TileSize,
    /// Step by a fixed amount regardless of tile size
    Fixed(Point),
}

impl Shift {
    /// Effective step for cells of `size`
    pub const fn step_for(self, size: (u32, u32)) -> Point {
        match self {
            Self::TileSize => Point::new(size.0 as i32, size.1 as i32),
            Self::Fixed(step) => step,
        }
    }
}

/// One tile variant assigned to one target cell
#[derive(Debug, Clone, Copy)]
pub struct Match<'a> {
    /// The winning tile variant
    pub tile: &'a Mode<RgbaImage>,
    /// Target region the tile is assigned to
    pub location: Rect,
    /// Mode distance between the cell and the tile
    pub distance: f64,
}

impl Match<'_> {
    /// Whether placing the tile would cover an already painted pixel
    ///
    /// The canvas region at `location` is moved to the origin so that it
    /// lines up with the tile before the pixel-wise test.
    pub fn intersects<C: PixelGrid + ?Sized>(&self, canvas: &C) -> bool {
        let patch = canvas.sub_view(self.location);
        let patch = patch.translate(-self.location.min);
        intersect(&patch, self.tile.grid())
    }

    /// Pixel area of the tile variant
    pub fn tile_area(&self) -> u64 {
        self.tile.grid().area()
    }
}

/// Match every grid cell of `target` against the variants of its size
///
/// Cells whose dominant bucket is transparent produce no match, leaving that
/// part of the target unfilled.
pub fn compute_matches<'a, G>(
    target: &G,
    tiles: &'a [Mode<RgbaImage>],
    shift: Shift,
) -> Vec<Match<'a>>
where
    G: PixelGrid + Sync + ?Sized,
{
    let classes: Vec<_> = group_by_size(tiles).into_iter().collect();

    classes
        .par_iter()
        .map(|(size, candidates)| {
            let step = shift.step_for(*size);
            let matches: Vec<Match<'a>> = grid_cells(target, *size, step)
                .filter_map(|cell| {
                    let location = cell.bounds();
                    let cell_mode = Mode::compute(cell, true)?;
                    let (tile, distance) = closest_mode(&cell_mode, candidates)?;
                    Some(Match {
                        tile,
                        location,
                        distance,
                    })
                })
                .collect();
            debug!(
                width = size.0,
                height = size.1,
                candidates = candidates.len(),
                matches = matches.len(),
                "matched size class"
            );
            matches
        })
        .collect::<Vec<_>>()
        .into_iter()
        .flatten()
        .collect()
}

/// Variants grouped by exact pixel size, preserving their relative order
///
/// Variants with an empty area can never be placed and are left out.
pub fn group_by_size(tiles: &[Mode<RgbaImage>]) -> BTreeMap<(u32, u32), Vec<&Mode<RgbaImage>>> {
    let mut grouped: BTreeMap<(u32, u32), Vec<&Mode<RgbaImage>>> = BTreeMap::new();
    for tile in tiles {
        let size = tile.size();
        if size.0 == 0 || size.1 == 0 {
            continue;
        }
        grouped.entry(size).or_default().push(tile);
    }
    grouped
}

/// Cells of `size` laid over `target`, with origins stepping by `step`
///
/// Cells reaching past the target's edge are clipped to it, and cells whose
/// origin lies on the far edge are empty.
pub fn grid_cells<G>(
    target: &G,
    size: (u32, u32),
    step: Point,
) -> impl Iterator<Item = SubView<'_, G>>
where
    G: PixelGrid + ?Sized,
{
    iterate(target.bounds(), Some(step))
        .map(move |origin| target.sub_view(Rect::with_size(origin, size.0, size.1)))
}

/// The candidate closest to `mode` and its distance
///
/// Returns `None` for transparent modes or an empty candidate list. Equal
/// distances keep the earliest candidate.
pub fn closest_mode<'a, G>(
    mode: &Mode<G>,
    candidates: &[&'a Mode<RgbaImage>],
) -> Option<(&'a Mode<RgbaImage>, f64)> {
    if mode.is_transparent() {
        return None;
    }

    candidates.iter().fold(None, |best: Option<(&'a Mode<RgbaImage>, f64)>, &candidate| {
        let distance = mode.distance_to(candidate);
        match best {
            Some((_, best_distance)) if best_distance <= distance => best,
            _ => Some((candidate, distance)),
        }
    })
}
