//! Command-line interface: flag parsing, validation and the end-to-end run

use crate::imaging::geometry::Point;
use crate::imaging::grid::PixelGrid;
use crate::io::configuration::{
    DEFAULT_FRAME_INTERVAL, DEFAULT_OUTPUT_PATH, GIF_FRAME_DELAY_MS, MAX_SCALE_FACTOR,
    MAX_TILE_DIMENSION,
};
use crate::io::error::{MosaicError, Result, invalid_parameter};
use crate::io::image::{load_image, load_tiles, save_png};
use crate::io::progress::ProgressManager;
use crate::io::visualization::FrameCapture;
use crate::pipeline::matcher::Shift;
use crate::pipeline::permute::PermuteConfig;
use crate::pipeline::tiler::{Config, tile};
use clap::Parser;
use image::RgbaImage;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "tessellate")]
#[command(
    author,
    version,
    about = "Rebuild an image as a mosaic of tile images"
)]
/// Command-line arguments for the mosaic tool
pub struct Cli {
    /// Image to tile
    #[arg(short, long, value_name = "IMAGE")]
    pub img: PathBuf,

    /// Tile image, or directory of tile images
    #[arg(short, long, value_name = "PATH")]
    pub tiles: PathBuf,

    /// Destination PNG path
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub out: PathBuf,

    /// Grid shift as 'x,y'; tile size is used when omitted or '0,0'
    #[arg(long, value_name = "X,Y")]
    pub shift: Option<String>,

    /// Color variants: 'n' factors for every channel, or 'r,g,b' per channel
    #[arg(long, value_name = "N|R,G,B")]
    pub colors: Option<String>,

    /// Comma separated list of tile scale factors
    #[arg(long, value_name = "F,..")]
    pub scale: Option<String>,

    /// Comma separated list of tile rotations in [0..1] (1 is a full turn)
    #[arg(long, value_name = "F,..")]
    pub rotate: Option<String>,

    /// Allow tiles to overlap each other
    #[arg(long)]
    pub overlap: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Write an animated GIF of the placement order to this path
    #[arg(long, value_name = "GIF")]
    pub visualize: Option<PathBuf>,

    /// Placements between captured animation frames
    #[arg(long, default_value_t = DEFAULT_FRAME_INTERVAL)]
    pub frame_every: usize,

    /// Worker threads for permutation and matching (all cores by default)
    #[arg(long)]
    pub threads: Option<usize>,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Validate the string-typed flags into a tiling configuration
    ///
    /// # Errors
    ///
    /// Returns an [`MosaicError::InvalidParameter`] naming the first flag
    /// whose value is malformed or out of range
    pub fn config(&self) -> Result<Config> {
        let shift = self.shift.as_deref().map(parse_shift).transpose()?;
        let colors = self.colors.as_deref().map(parse_colors).transpose()?;
        let (red_levels, green_levels, blue_levels) = colors.unwrap_or((0, 0, 0));
        let scales = self
            .scale
            .as_deref()
            .map(|s| parse_floats("scale", s))
            .transpose()?;
        let rotations = self
            .rotate
            .as_deref()
            .map(|s| parse_floats("rotate", s))
            .transpose()?;

        if let Some(bad) = scales.iter().flatten().find(|f| **f <= 0.0) {
            return Err(invalid_parameter("scale", bad, &"scale factors must be positive"));
        }
        if let Some(bad) = scales.iter().flatten().find(|f| **f > MAX_SCALE_FACTOR) {
            return Err(invalid_parameter(
                "scale",
                bad,
                &format!("scale factors must not exceed {MAX_SCALE_FACTOR}"),
            ));
        }
        if let Some(bad) = rotations.iter().flatten().find(|f| !(0.0..=1.0).contains(*f)) {
            return Err(invalid_parameter("rotate", bad, &"rotations must be within [0, 1]"));
        }

        Ok(Config {
            shift: shift.unwrap_or_default(),
            overlap: self.overlap,
            permute: PermuteConfig {
                red_levels,
                green_levels,
                blue_levels,
                scales,
                rotations,
            },
        })
    }

    /// Install the tracing subscriber, honoring `RUST_LOG` when set
    ///
    /// Defaults to `info`, or `warn` in quiet mode. A subscriber installed
    /// earlier is left in place.
    pub fn init_logging(&self) {
        let default_level = if self.quiet { "warn" } else { "info" };
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    }
}

/// Parse a grid shift given as `x,y`
///
/// `0,0` selects [`Shift::TileSize`].
///
/// # Errors
///
/// Returns an error if the value is not two integers, or if they are not
/// either both zero or both positive
pub fn parse_shift(value: &str) -> Result<Shift> {
    let parts: Vec<&str> = value.split(',').map(str::trim).collect();
    let [x, y] = parts.as_slice() else {
        return Err(invalid_parameter("shift", &value, &"must be of the form 'x,y'"));
    };
    let x: i32 = x
        .parse()
        .map_err(|e| invalid_parameter("shift", &value, &format!("bad value for x ({x}): {e}")))?;
    let y: i32 = y
        .parse()
        .map_err(|e| invalid_parameter("shift", &value, &format!("bad value for y ({y}): {e}")))?;

    match (x, y) {
        (0, 0) => Ok(Shift::TileSize),
        (x, y) if x > 0 && y > 0 => Ok(Shift::Fixed(Point::new(x, y))),
        _ => Err(invalid_parameter(
            "shift",
            &value,
            &"components must both be positive, or both zero for tile size",
        )),
    }
}

/// Parse color variant counts given as `n` or `r,g,b`
///
/// # Errors
///
/// Returns an error if the value is not one or three integers in `0..=255`
pub fn parse_colors(value: &str) -> Result<(u8, u8, u8)> {
    let parse = |part: &str, channel: &str| -> Result<u8> {
        part.trim().parse().map_err(|e| {
            invalid_parameter("colors", &value, &format!("bad value for {channel} ({part}): {e}"))
        })
    };

    let parts: Vec<&str> = value.split(',').collect();
    match parts.as_slice() {
        [n] => {
            let n = parse(*n, "n")?;
            Ok((n, n, n))
        }
        [r, g, b] => Ok((parse(*r, "r")?, parse(*g, "g")?, parse(*b, "b")?)),
        _ => Err(invalid_parameter(
            "colors",
            &value,
            &"must be of the form 'n' or 'r,g,b'",
        )),
    }
}

/// Parse a comma separated list of finite floats for `parameter`
///
/// # Errors
///
/// Returns an error naming `parameter` if any element is not a finite number
pub fn parse_floats(parameter: &'static str, value: &str) -> Result<Vec<f64>> {
    value
        .split(',')
        .map(|part| {
            let parsed: f64 = part.trim().parse().map_err(|e| {
                invalid_parameter(parameter, &value, &format!("bad float format for {part}: {e}"))
            })?;
            if parsed.is_finite() {
                Ok(parsed)
            } else {
                Err(invalid_parameter(parameter, &value, &format!("{part} is not finite")))
            }
        })
        .collect()
}

/// Check that no scale factor in `config` enlarges a tile past
/// [`MAX_TILE_DIMENSION`] pixels on either side
///
/// Factors of at most 1 never enlarge, so tiles that already exceed the
/// limit are accepted as long as they are not scaled up.
///
/// # Errors
///
/// Returns an [`MosaicError::InvalidParameter`] for `scale` naming the
/// largest factor when it would enlarge any tile past the limit
pub fn validate_scaled_tiles(tiles: &[RgbaImage], config: &Config) -> Result<()> {
    let factor = config
        .permute
        .scales
        .iter()
        .flatten()
        .copied()
        .fold(1.0, f64::max);
    if factor <= 1.0 {
        return Ok(());
    }

    let limit = f64::from(MAX_TILE_DIMENSION);
    if let Some(oversized) = tiles
        .iter()
        .find(|t| f64::from(t.width().max(t.height())) * factor > limit)
    {
        return Err(invalid_parameter(
            "scale",
            &factor,
            &format!(
                "scales a {}x{} tile past {MAX_TILE_DIMENSION} pixels",
                oversized.width(),
                oversized.height()
            ),
        ));
    }
    Ok(())
}

/// Runs one mosaic from the command line: load, tile, save
pub struct MosaicRunner {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl MosaicRunner {
    /// Create a new runner with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    fn stage(&mut self, message: &str) {
        if let Some(ref mut pm) = self.progress_manager {
            pm.start_stage(message);
        }
    }

    /// Build the mosaic described by the CLI arguments
    ///
    /// All flags are validated before any image is decoded.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A flag value is invalid
    /// - The worker pool cannot be configured
    /// - The target or any tile fails to load, or no tiles are found
    /// - The mosaic or the visualization cannot be written
    pub fn run(&mut self) -> Result<()> {
        let start_time = Instant::now();
        let config = self.cli.config()?;

        if let Some(threads) = self.cli.threads {
            rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build_global()
                .map_err(|e| invalid_parameter("threads", &threads, &e))?;
        }

        self.stage("Loading image");
        let target = load_image(&self.cli.img)?;

        self.stage("Loading tiles");
        let tiles = load_tiles(&self.cli.tiles)?;
        if tiles.is_empty() {
            return Err(MosaicError::NoTiles {
                path: self.cli.tiles.clone(),
            });
        }
        validate_scaled_tiles(&tiles, &config)?;
        info!(count = tiles.len(), "loaded tiles");
        info!(?config, "tiling");

        self.stage("Tiling");
        let mut capture = self
            .cli
            .visualize
            .as_ref()
            .map(|_| FrameCapture::new(target.bounds(), self.cli.frame_every));
        let progress = &mut self.progress_manager;
        let output = tile(&target, &tiles, &config, |canvas, placement| {
            if let Some(pm) = progress.as_mut() {
                pm.record_placement();
            }
            if let Some(capture) = capture.as_mut() {
                capture.record_placement(canvas, placement.location);
            }
        })?;

        self.stage("Saving result");
        save_png(&output, &self.cli.out)?;

        if let (Some(path), Some(capture)) = (&self.cli.visualize, &capture) {
            capture.export_gif(path, GIF_FRAME_DELAY_MS)?;
            info!(frames = capture.frame_count(), path = %path.display(), "wrote visualization");
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }
        info!(
            path = %self.cli.out.display(),
            elapsed = ?start_time.elapsed(),
            "done"
        );
        Ok(())
    }
}
