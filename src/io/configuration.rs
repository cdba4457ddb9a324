//! Pipeline constants and runtime configuration defaults

// Bucketing granularity for dominant-color counting. Independent of the
// user-facing color permutation levels.
/// Quantization levels per channel used when computing a region's mode
pub const MODE_BUCKET_LEVELS: u8 = 32;

// Output settings
/// Output path used when none is given
pub const DEFAULT_OUTPUT_PATH: &str = "tiled.png";
/// File extensions accepted when collecting tiles from a directory
pub const TILE_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "gif"];

// Tile size limits
/// Largest accepted `--scale` factor
pub const MAX_SCALE_FACTOR: f64 = 16.0;
/// Largest side, in pixels, a tile may be scaled up to
pub const MAX_TILE_DIMENSION: u32 = 8192;

// Visualization settings
/// Number of placements between captured animation frames
pub const DEFAULT_FRAME_INTERVAL: usize = 25;
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 40;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 20;
/// How many frame delays the final frame is held for
pub const FINAL_FRAME_HOLD: u32 = 25;

// Progress display settings
/// Refresh rate for spinner-style stage indicators
pub const SPINNER_TICK_MS: u64 = 120;
