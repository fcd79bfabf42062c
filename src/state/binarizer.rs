//! Binarization state: current threshold, loaded image and pending load.

use super::command::{Command, ViewUpdate};
use crate::config::DEFAULT_THRESHOLD;
use crate::file_utils::PathExt;
use crate::image_loader::LoadedImage;
use crate::threshold;
use image::GrayImage;
use log::{debug, warn};
use std::path::PathBuf;

/// Holds everything the binarization view depends on.
///
/// The binary image is always derived from `image.gray` and the current
/// threshold; it is never stored.
#[derive(Debug)]
pub struct BinarizerState {
    threshold: u8,
    image: Option<LoadedImage>,
    /// Only a load for this path may replace `image`.
    pending_path: Option<PathBuf>,
}

impl Default for BinarizerState {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            image: None,
            pending_path: None,
        }
    }
}

impl BinarizerState {
    /// Creates an empty state with the default threshold.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    /// Binary version of the loaded image at the current threshold.
    pub fn binary(&self) -> Option<GrayImage> {
        self.image
            .as_ref()
            .map(|image| threshold::binarize(&image.gray, self.threshold))
    }

    /// Applies a command and reports which panels need to be redrawn.
    pub fn dispatch(&mut self, command: Command) -> ViewUpdate {
        match command {
            Command::BeginLoad(path) => {
                debug!("Loading {}", path.format_for_log());
                self.pending_path = Some(path);
                ViewUpdate::Nothing
            }
            Command::ImageLoaded { path, image } => {
                if self.pending_path.as_ref() != Some(&path) {
                    warn!("Discarding superseded load of {}", path.format_for_log());
                    return ViewUpdate::Nothing;
                }

                let binary = threshold::binarize(&image.gray, self.threshold);
                let update = ViewUpdate::Full {
                    original: image.original.clone(),
                    gray: image.gray.clone(),
                    binary,
                    info: image.info.clone(),
                };

                self.pending_path = None;
                self.image = Some(image);
                update
            }
            Command::LoadFailed { path, message } => {
                if self.pending_path.as_ref() != Some(&path) {
                    warn!("Ignoring failure of superseded load: {}", message);
                    return ViewUpdate::Nothing;
                }
                self.pending_path = None;
                ViewUpdate::Error(message)
            }
            Command::ThresholdChanged(value) => {
                self.threshold = value.clamp(0, u8::MAX as i32) as u8;
                match self.binary() {
                    Some(binary) => ViewUpdate::Binary(binary),
                    None => {
                        debug!("Threshold {} stored, no image loaded", self.threshold);
                        ViewUpdate::Nothing
                    }
                }
            }
        }
    }
}
