//! Tests for the full tiling entry point

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};
    use tessellate::MosaicError;
    use tessellate::imaging::geometry::{Point, Rect};
    use tessellate::imaging::grid::{PixelGrid, Raster, TRANSPARENT};
    use tessellate::pipeline::tiler::{Config, tile};
    use tessellate::pipeline::{PermuteConfig, Shift};

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);

    // Tests an empty tile set is rejected
    // Verified by returning a blank canvas instead
    #[test]
    fn test_tile_requires_tiles() {
        let target = RgbaImage::from_pixel(2, 2, RED);
        let tiles: Vec<RgbaImage> = Vec::new();

        let result = tile(&target, &tiles, &Config::default(), |_, _| {});
        assert!(matches!(result, Err(MosaicError::InvalidSourceData { .. })));
    }

    // Tests a single tile equal to the target reproduces it exactly
    // Verified by offsetting painted tiles by one pixel
    #[test]
    fn test_tile_exact_copy() {
        let mut target = RgbaImage::from_pixel(3, 2, RED);
        target.put_pixel(2, 1, BLUE);
        let tiles = vec![target.clone()];

        let output = tile(&target, &tiles, &Config::default(), |_, _| {}).expect("tiling succeeds");

        assert_eq!(output.bounds(), target.bounds());
        assert_eq!(output.to_image(), target);
    }

    // Tests each cell takes the closest tile color
    // Verified by picking the first tile for every cell
    #[test]
    fn test_tile_picks_nearest_color() {
        let target = RgbaImage::from_pixel(2, 2, RED);
        let tiles = vec![
            RgbaImage::from_pixel(1, 1, BLUE),
            RgbaImage::from_pixel(1, 1, RED),
        ];

        let mut updates = 0;
        let output = tile(&target, &tiles, &Config::default(), |_, _| updates += 1)
            .expect("tiling succeeds");

        assert_eq!(updates, 4);
        assert!(output.bounds().pixels().all(|p| output.at(p.x, p.y) == RED));
    }

    // Tests color permutations can stand in for missing tile colors
    // Verified by ignoring the color configuration
    #[test]
    fn test_tile_with_color_permutations() {
        let target = RgbaImage::from_pixel(2, 1, Rgba([0, 0, 0, 255]));
        let tiles = vec![RgbaImage::from_pixel(1, 1, Rgba([255, 255, 255, 255]))];
        let config = Config {
            permute: PermuteConfig {
                red_levels: 2,
                green_levels: 2,
                blue_levels: 2,
                ..PermuteConfig::default()
            },
            ..Config::default()
        };

        let output = tile(&target, &tiles, &config, |_, _| {}).expect("tiling succeeds");

        assert_eq!(output.at(0, 0), Rgba([0, 0, 0, 255]));
        assert_eq!(output.at(1, 0), Rgba([0, 0, 0, 255]));
    }

    // Tests the output keeps the target's bounds and transparent gaps
    // Verified by sizing the canvas from the tiles
    #[test]
    fn test_tile_keeps_target_bounds() {
        let mut target = Raster::new(Rect::new(5, 5, 8, 6));
        target.put(5, 5, RED);
        let tiles = vec![RgbaImage::from_pixel(1, 1, RED)];
        let config = Config {
            shift: Shift::Fixed(Point::new(1, 1)),
            overlap: true,
            permute: PermuteConfig::default(),
        };

        let output = tile(&target, &tiles, &config, |_, _| {}).expect("tiling succeeds");

        assert_eq!(output.bounds(), Rect::new(5, 5, 8, 6));
        assert_eq!(output.at(5, 5), RED);
        assert_eq!(output.at(6, 5), TRANSPARENT);
    }
}
