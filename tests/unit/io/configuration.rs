//! Tests for configuration constants and their relationships

#[cfg(test)]
mod tests {
    use tessellate::io::configuration::{
        DEFAULT_FRAME_INTERVAL, DEFAULT_OUTPUT_PATH, FINAL_FRAME_HOLD, GIF_FRAME_DELAY_MS,
        MAX_SCALE_FACTOR, MAX_TILE_DIMENSION, MODE_BUCKET_LEVELS, SPINNER_TICK_MS,
        TILE_EXTENSIONS, VIEWER_MIN_FRAME_DELAY_MS,
    };

    // Tests the tile size limits allow moderate enlargement only
    // Verified by changing the scale limit
    #[test]
    fn test_tile_size_limits() {
        assert_eq!(MAX_SCALE_FACTOR as u32, 16);
        assert_eq!(MAX_TILE_DIMENSION, 8192);
    }

    // Tests mode bucketing is coarse but not degenerate
    // Verified by setting levels to zero
    #[test]
    fn test_mode_bucket_levels() {
        assert_eq!(MODE_BUCKET_LEVELS, 32);
    }

    // Tests output defaults to a PNG path
    // Verified by changing the default extension
    #[test]
    fn test_default_output_is_png() {
        assert!(DEFAULT_OUTPUT_PATH.ends_with(".png"));
    }

    // Tests accepted tile extensions are lowercase and include every format
    // Verified by removing gif
    #[test]
    fn test_tile_extensions() {
        for ext in ["png", "jpg", "jpeg", "gif"] {
            assert!(TILE_EXTENSIONS.contains(&ext));
        }
        assert!(TILE_EXTENSIONS.iter().all(|e| e.chars().all(|c| c.is_ascii_lowercase())));
    }

    // Tests visualization timing values
    // Verified by setting the GIF delay below the viewer minimum
    #[test]
    fn test_visualization_timing() {
        assert_eq!(DEFAULT_FRAME_INTERVAL, 25);
        assert_eq!(GIF_FRAME_DELAY_MS, 40);
        assert_eq!(VIEWER_MIN_FRAME_DELAY_MS, 20);
        assert_eq!(FINAL_FRAME_HOLD, 25);
    }

    // Tests spinner refresh rate
    // Verified by changing tick value
    #[test]
    fn test_spinner_tick() {
        assert_eq!(SPINNER_TICK_MS, 120);
    }
}
