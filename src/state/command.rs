//! Discrete requests produced by UI events and the view changes they cause.

use crate::image_loader::{ImageInfo, LoadedImage};
use image::{GrayImage, RgbImage};
use std::path::PathBuf;

/// A request consumed synchronously by [`BinarizerState::dispatch`](super::BinarizerState::dispatch).
#[derive(Debug)]
pub enum Command {
    /// A file was chosen and decoding has started.
    BeginLoad(PathBuf),
    /// Decoding finished for `path`.
    ImageLoaded { path: PathBuf, image: LoadedImage },
    /// Decoding failed for `path`; `message` is what the user should see.
    LoadFailed { path: PathBuf, message: String },
    /// The slider moved.
    ThresholdChanged(i32),
}

/// What the UI has to redraw after a command.
#[derive(Debug)]
pub enum ViewUpdate {
    Nothing,
    /// Only the binary panel changed.
    Binary(GrayImage),
    /// A new image replaced all three panels.
    Full {
        original: RgbImage,
        gray: GrayImage,
        binary: GrayImage,
        info: ImageInfo,
    },
    /// The pending load failed; panels keep the previous image.
    Error(String),
}
