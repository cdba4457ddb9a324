//! Tests for progress display lifecycle

#[cfg(test)]
mod tests {
    use tessellate::io::progress::ProgressManager;

    // Tests placements are counted as they are recorded
    // Verified by incrementing only the bar
    #[test]
    fn test_record_placements() {
        let mut manager = ProgressManager::new();
        assert_eq!(manager.placements(), 0);

        for _ in 0..5 {
            manager.record_placement();
        }
        assert_eq!(manager.placements(), 5);
        manager.finish();
    }

    // Tests stages can be replaced and finished repeatedly
    // Verified by panicking on a second finish
    #[test]
    fn test_stage_lifecycle() {
        let mut manager = ProgressManager::default();
        manager.start_stage("Loading image");
        manager.start_stage("Tiling");
        manager.record_placement();
        manager.finish();
        manager.finish();

        assert_eq!(manager.placements(), 1);
    }
}
