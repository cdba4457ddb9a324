//! Tests for tile variant generation

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};
    use tessellate::color::Scale;
    use tessellate::pipeline::permute::{
        PermuteConfig, iterate_steps, permute, permute_colors, permute_image,
    };

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);

    // Tests step generation including the degenerate counts
    // Verified by producing an empty list for zero steps
    #[test]
    fn test_iterate_steps() {
        assert_eq!(iterate_steps(0), vec![1.0]);
        assert_eq!(iterate_steps(1), vec![1.0]);
        assert_eq!(iterate_steps(2), vec![0.0, 1.0]);
        assert_eq!(iterate_steps(3), vec![0.0, 0.5, 1.0]);
        assert_eq!(iterate_steps(5).len(), 5);
    }

    // Tests color combinations vary blue fastest
    // Verified by nesting red innermost
    #[test]
    fn test_permute_colors_order() {
        assert_eq!(
            permute_colors(0, 1, 2),
            vec![Scale::new(1.0, 1.0, 0.0), Scale::new(1.0, 1.0, 1.0)]
        );
        assert_eq!(
            permute_colors(2, 0, 2),
            vec![
                Scale::new(0.0, 1.0, 0.0),
                Scale::new(0.0, 1.0, 1.0),
                Scale::new(1.0, 1.0, 0.0),
                Scale::new(1.0, 1.0, 1.0),
            ]
        );
    }

    // Tests unset lists resolve to the identity variant
    // Verified by leaving empty lists empty
    #[test]
    fn test_config_defaults() {
        let resolved = PermuteConfig::default().resolved();

        assert_eq!(resolved.colors, vec![Scale::IDENTITY]);
        assert_eq!(resolved.scales, vec![1.0]);
        assert_eq!(resolved.rotations, vec![0.0]);
        assert_eq!(resolved.per_tile(), 1);

        let empty_lists = PermuteConfig {
            scales: Some(Vec::new()),
            rotations: Some(Vec::new()),
            ..PermuteConfig::default()
        };
        assert_eq!(empty_lists.resolved().per_tile(), 1);
    }

    // Tests the default configuration yields one unchanged variant per tile
    // Verified by applying a zero color factor by default
    #[test]
    fn test_permute_default_config() {
        let tiles = vec![RgbaImage::from_pixel(2, 2, RED), RgbaImage::from_pixel(1, 3, BLUE)];
        let variants = permute(&tiles, &PermuteConfig::default());

        assert_eq!(variants.len(), 2);
        let first = variants.first().expect("first variant");
        assert_eq!(first.color(), RED);
        assert_eq!(first.grid(), &tiles[0]);
        let second = variants.get(1).expect("second variant");
        assert_eq!(second.size(), (1, 3));
        assert_eq!(second.color(), BLUE);
    }

    // Tests variants are nested color, then scale, then rotation
    // Verified by swapping the scale and rotation loops
    #[test]
    fn test_permute_image_order() {
        let tile = RgbaImage::from_pixel(2, 1, RED);
        let config = PermuteConfig {
            red_levels: 2,
            scales: Some(vec![1.0, 2.0]),
            rotations: Some(vec![0.0, 0.25]),
            ..PermuteConfig::default()
        };
        let variants = permute_image(&tile, &config.resolved());

        let sizes: Vec<(u32, u32)> = variants.iter().map(|v| v.size()).collect();
        assert_eq!(
            sizes,
            vec![(2, 1), (1, 2), (4, 2), (2, 4), (2, 1), (1, 2), (4, 2), (2, 4)]
        );

        let colors: Vec<Rgba<u8>> = variants.iter().map(|v| v.color()).collect();
        assert!(colors.iter().take(4).all(|c| *c == Rgba([0, 0, 0, 255])));
        assert!(colors.iter().skip(4).all(|c| *c == RED));
    }

    // Tests the variant count is the product of the option counts
    // Verified by deduplicating identical colors
    #[test]
    fn test_permute_count() {
        let tiles = vec![RgbaImage::from_pixel(2, 2, RED); 3];
        let config = PermuteConfig {
            red_levels: 2,
            green_levels: 3,
            blue_levels: 1,
            scales: Some(vec![0.5, 1.0]),
            rotations: Some(vec![0.0]),
        };

        assert_eq!(permute(&tiles, &config).len(), 3 * 6 * 2);
    }

    // Tests empty and fully transparent tiles contribute nothing
    // Verified by emitting transparent modes for them
    #[test]
    fn test_permute_skips_invisible_tiles() {
        let tiles = vec![
            RgbaImage::new(0, 0),
            RgbaImage::new(2, 2),
            RgbaImage::from_pixel(1, 1, BLUE),
        ];
        let variants = permute(&tiles, &PermuteConfig::default());

        assert_eq!(variants.len(), 1);
        assert_eq!(variants.first().map(|v| v.color()), Some(BLUE));
    }

    // Tests tile order is preserved across parallel workers
    // Verified by collecting results in completion order
    #[test]
    fn test_permute_preserves_tile_order() {
        let tiles: Vec<RgbaImage> = (1..=32u32)
            .map(|n| RgbaImage::from_pixel(n, 1, RED))
            .collect();
        let widths: Vec<u32> = permute(&tiles, &PermuteConfig::default())
            .iter()
            .map(|v| v.size().0)
            .collect();

        assert_eq!(widths, (1..=32).collect::<Vec<u32>>());
    }
}
