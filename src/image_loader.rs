//! Image decoding, display scaling and conversion to Slint images.
//!
//! Everything except the `create_slint_*` helpers is safe to call from a
//! rayon worker; Slint images must be built on the UI thread.

use crate::error::{AppError, Result};
use crate::file_utils::{self, PathExt};
use image::imageops::FilterType;
use image::{DynamicImage, GrayImage, RgbImage};
use log::debug;
use slint::{Image, Rgb8Pixel, SharedPixelBuffer};
use std::path::Path;

/// File and geometry details shown next to the images.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageInfo {
    pub file_name: String,
    pub source_width: u32,
    pub source_height: u32,
    pub display_width: u32,
    pub display_height: u32,
    pub file_size: String,
    pub modified: Option<String>,
}

impl ImageInfo {
    /// One-line description, e.g. `1024x768 → 512x384, 84.2 KB, 2026-01-02 10:00`.
    pub fn summary(&self) -> String {
        let mut text = format!(
            "{}x{} → {}x{}, {}",
            self.source_width,
            self.source_height,
            self.display_width,
            self.display_height,
            self.file_size
        );
        if let Some(modified) = &self.modified {
            text.push_str(", ");
            text.push_str(modified);
        }
        text
    }
}

/// A decoded image scaled for display, with its luminance version.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub original: RgbImage,
    pub gray: GrayImage,
    pub info: ImageInfo,
}

/// Decodes an image file, guessing the format from its content.
pub fn load_image_blocking(path: &Path) -> Result<DynamicImage> {
    let img = image::ImageReader::open(path)
        .map_err(|e| AppError::ImageLoad(format!("{}: {}", path.format_for_log(), e)))?
        .with_guessed_format()
        .map_err(|e| AppError::ImageLoad(format!("{}: {}", path.format_for_log(), e)))?
        .decode()?;
    Ok(img)
}

/// Scales `(width, height)` so the longer side equals `max_size`, keeping the aspect ratio.
///
/// Smaller images are scaled up. Degenerate sizes are returned unchanged.
pub fn fit_dimensions(width: u32, height: u32, max_size: u32) -> (u32, u32) {
    if width == 0 || height == 0 {
        return (width, height);
    }

    let scale = |side: u32, longest: u32| -> u32 {
        ((max_size as u64 * side as u64) / longest as u64).max(1) as u32
    };

    if width > height {
        (max_size, scale(height, width))
    } else {
        (scale(width, height), max_size)
    }
}

/// Resizes for display and collapses the result to luminance.
pub fn prepare_image(image: &DynamicImage, max_size: u32) -> (RgbImage, GrayImage) {
    let (width, height) = fit_dimensions(image.width(), image.height(), max_size);
    let resized = image.resize_exact(width, height, FilterType::Triangle);
    (resized.to_rgb8(), resized.to_luma8())
}

/// Decodes, scales and converts a file, collecting its display information.
pub fn load_for_display(path: &Path, max_size: u32) -> Result<LoadedImage> {
    let start = std::time::Instant::now();
    file_utils::ensure_supported_image(path)?;

    let decoded = load_image_blocking(path)?;
    let stats = file_utils::read_file_stats(path)?;
    let (original, gray) = prepare_image(&decoded, max_size);

    let info = ImageInfo {
        file_name: path.format_for_log(),
        source_width: decoded.width(),
        source_height: decoded.height(),
        display_width: original.width(),
        display_height: original.height(),
        file_size: file_utils::format_file_size(stats.size_bytes),
        modified: stats
            .modified
            .map(|date| date.format("%Y-%m-%d %H:%M").to_string()),
    };

    debug!(
        "Loaded {} ({}x{}) in {:?}",
        info.file_name,
        info.display_width,
        info.display_height,
        start.elapsed()
    );

    Ok(LoadedImage {
        original,
        gray,
        info,
    })
}

/// Writes a binary image; the encoder is chosen from the path extension.
pub fn save_binary_image(binary: &GrayImage, path: &Path) -> Result<()> {
    file_utils::ensure_supported_image(path)?;
    binary
        .save(path)
        .map_err(|e| AppError::ImageSave(format!("{}: {}", path.format_for_log(), e)))
}

/// Creates a Slint image from RGB8 data.
pub fn create_slint_image(data: &[u8], width: u32, height: u32) -> Image {
    let buffer = SharedPixelBuffer::<Rgb8Pixel>::clone_from_slice(data, width, height);
    Image::from_rgb8(buffer)
}

/// Creates a Slint image from a grayscale buffer by repeating each value into R, G and B.
pub fn create_slint_gray_image(gray: &GrayImage) -> Image {
    let rgb: Vec<u8> = gray
        .as_raw()
        .iter()
        .flat_map(|&value| [value, value, value])
        .collect();
    create_slint_image(&rgb, gray.width(), gray.height())
}

/// Uniform dark panel shown before any image is loaded.
pub fn placeholder_image(size: u32) -> Image {
    let buffer = SharedPixelBuffer::<Rgb8Pixel>::new(size, size);
    Image::from_rgb8(buffer)
}
