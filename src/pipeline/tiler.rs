//! Entry point tying permutation, matching and composition together

use tracing::info;

use crate::imaging::grid::{PixelGrid, Raster};
use crate::io::error::{MosaicError, Result};
use crate::pipeline::compositor::compose_matches;
use crate::pipeline::matcher::{Match, Shift, compute_matches};
use crate::pipeline::permute::{PermuteConfig, permute};

/// Complete configuration of one tiling run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Grid step used when matching tiles to the target
    pub shift: Shift,
    /// Whether placed tiles may cover each other
    pub overlap: bool,
    /// Which tile variants to generate
    pub permute: PermuteConfig,
}

/// Rebuild `target` out of variants of `tiles`
///
/// `on_update` is called with the canvas and the placed match after each
/// tile is placed. The
/// returned raster has the same bounds as the target; regions without a match
/// stay transparent.
///
/// # Errors
///
/// Returns an error if `tiles` is empty, since there is nothing to match
/// against
pub fn tile<G, T, F>(target: &G, tiles: &[T], config: &Config, on_update: F) -> Result<Raster>
where
    G: PixelGrid + Sync + ?Sized,
    T: PixelGrid + Sync,
    F: FnMut(&Raster, &Match<'_>),
{
    if tiles.is_empty() {
        return Err(MosaicError::InvalidSourceData {
            reason: "no tiles to match against".to_string(),
        });
    }

    info!(tiles = tiles.len(), "computing tile permutations");
    let permutations = permute(tiles, &config.permute);
    info!(permutations = permutations.len(), "using tile permutations");

    info!("computing tile matches");
    let matches = compute_matches(target, &permutations, config.shift);
    info!(locations = matches.len(), "computed tile matches");

    info!(overlap = config.overlap, "composing output");
    Ok(compose_matches(
        target.bounds(),
        matches,
        config.overlap,
        on_update,
    ))
}
