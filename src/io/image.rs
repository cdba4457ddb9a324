//! Decoding targets and tiles, and PNG export of the finished mosaic

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use image::RgbaImage;
use tracing::debug;

use crate::imaging::grid::PixelGrid;
use crate::io::configuration::TILE_EXTENSIONS;
use crate::io::error::{MosaicError, Result, WithPath};

/// Decode any supported raster file into RGBA pixels
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a decodable image
pub fn load_image(path: &Path) -> Result<RgbaImage> {
    let img = image::open(path).with_path(path, "decode image")?;
    Ok(img.to_rgba8())
}

/// Load the tile set from a single image file or a directory of images
///
/// Directory entries are filtered by [`TILE_EXTENSIONS`] (case-insensitive)
/// and loaded in sorted path order; subdirectories are not searched.
///
/// # Errors
///
/// Returns an error if:
/// - The path does not exist or the directory cannot be read
/// - Any selected tile fails to decode
pub fn load_tiles(path: &Path) -> Result<Vec<RgbaImage>> {
    if path.is_file() {
        return Ok(vec![load_image(path)?]);
    }
    if !path.is_dir() {
        return Err(MosaicError::FileSystem {
            path: path.to_path_buf(),
            operation: "locate tiles",
            source: std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "not a file or directory",
            ),
        });
    }

    let files = collect_tile_files(path)?;
    debug!(count = files.len(), dir = %path.display(), "collected tile files");
    files.iter().map(|file| load_image(file)).collect()
}

/// Paths of tile images directly inside `dir`, sorted
///
/// # Errors
///
/// Returns an error if the directory or one of its entries cannot be read
pub fn collect_tile_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).with_path(dir, "read directory")? {
        let file = entry.with_path(dir, "read directory entry")?.path();
        if file.is_file() && has_tile_extension(&file) {
            files.push(file);
        }
    }
    files.sort();
    Ok(files)
}

fn has_tile_extension(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| {
            TILE_EXTENSIONS
                .iter()
                .any(|accepted| ext.eq_ignore_ascii_case(accepted))
        })
}

/// Save a grid as a PNG image, creating parent directories as needed
///
/// The grid's `min` corner becomes the image's top-left pixel.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written
pub fn save_png<G: PixelGrid + ?Sized>(grid: &G, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_path(parent, "create directory")?;
    }

    grid.to_image()
        .save_with_format(output_path, image::ImageFormat::Png)
        .map_err(|e| MosaicError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}

