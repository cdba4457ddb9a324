//! Frame capture and GIF generation for watching the mosaic being placed

use crate::imaging::geometry::Rect;
use crate::imaging::grid::{PixelGrid, Raster};
use crate::io::configuration::{FINAL_FRAME_HOLD, VIEWER_MIN_FRAME_DELAY_MS};
use crate::io::error::{MosaicError, Result, WithPath};
use image::{Delay, Frame};
use std::path::Path;

/// Records the placement sequence so it can be replayed as an animation
///
/// Intended to be driven from the placement callback. Each placement keeps
/// only the canvas region it painted, so memory grows with the placed tiles
/// rather than with the number of frames. Frames are rebuilt on export by
/// replaying the regions onto a blank canvas, one frame every `interval`
/// placements plus the finished canvas.
pub struct FrameCapture {
    bounds: Rect,
    patches: Vec<Raster>,
    interval: usize,
}

impl FrameCapture {
    /// Capture a canvas covering `bounds` every `interval`-th placement (an
    /// interval of 0 is treated as 1)
    pub fn new(bounds: Rect, interval: usize) -> Self {
        Self {
            bounds,
            patches: Vec::new(),
            interval: interval.max(1),
        }
    }

    /// Records one placement by copying the painted region of `canvas`
    pub fn record_placement<G: PixelGrid + ?Sized>(&mut self, canvas: &G, location: Rect) {
        self.patches.push(canvas.sub_view(location).to_raster());
    }

    /// Returns the number of placements seen so far
    pub const fn placement_count(&self) -> usize {
        self.patches.len()
    }

    /// Returns the number of frames the animation holds before skipping
    pub fn frame_count(&self) -> usize {
        self.capture_points().len()
    }

    /// Returns the number of pixels kept across all recorded placements
    pub fn retained_pixels(&self) -> u64 {
        self.patches.iter().map(|patch| patch.bounds().area()).sum()
    }

    // Placement counts after which a frame is taken; the finished canvas is
    // always the last one
    fn capture_points(&self) -> Vec<usize> {
        let placements = self.patches.len();
        let mut points: Vec<usize> = (1..=placements / self.interval)
            .map(|k| k * self.interval)
            .collect();
        if placements % self.interval != 0 || placements == 0 {
            points.push(placements);
        }
        points
    }

    /// Export the recorded placements as a GIF with automatic frame skipping
    ///
    /// Frame delays below what viewers reliably support are raised to
    /// [`VIEWER_MIN_FRAME_DELAY_MS`] and intermediate frames dropped to keep the
    /// apparent speed. The last frame is always kept and held longer.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The canvas has no pixels
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &Path, frame_delay_ms: u32) -> Result<()> {
        if self.bounds.is_empty() {
            return Err(MosaicError::InvalidSourceData {
                reason: "No canvas to capture for visualization".to_string(),
            });
        }

        let frame_delay_ms = frame_delay_ms.max(1);
        let effective_delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let skip_factor = VIEWER_MIN_FRAME_DELAY_MS.div_ceil(frame_delay_ms).max(1) as usize;

        if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).with_path(parent, "create directory")?;
        }

        let file = std::fs::File::create(output_path).with_path(output_path, "create file")?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(self.generate_frames(effective_delay_ms, skip_factor))
            .map_err(|e| MosaicError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }

    // Frames are produced one at a time while replaying onto a single canvas
    fn generate_frames(
        &self,
        delay_ms: u32,
        skip_factor: usize,
    ) -> impl Iterator<Item = Frame> + '_ {
        let points = self.capture_points();
        let last_index = points.len().saturating_sub(1);
        let mut schedule: Vec<(usize, u32)> = points
            .iter()
            .enumerate()
            .filter(|(i, _)| i % skip_factor == 0 || *i == last_index)
            .map(|(_, &point)| (point, delay_ms))
            .collect();

        // Final frame displays longer for better visibility
        if let Some(&(last, _)) = schedule.last() {
            schedule.push((last, delay_ms.saturating_mul(FINAL_FRAME_HOLD)));
        }

        let mut canvas = Raster::new(self.bounds);
        let mut applied = 0;
        schedule.into_iter().map(move |(point, delay)| {
            for patch in self.patches.get(applied..point).unwrap_or_default() {
                stamp(&mut canvas, patch);
            }
            applied = applied.max(point);
            Frame::from_parts(
                canvas.buffer().clone(),
                0,
                0,
                Delay::from_numer_denom_ms(delay, 1),
            )
        })
    }
}

fn stamp(canvas: &mut Raster, patch: &Raster) {
    for p in patch.bounds().pixels() {
        canvas.put(p.x, p.y, patch.at(p.x, p.y));
    }
}
