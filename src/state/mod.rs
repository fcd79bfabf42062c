//! State management for the binarization viewer.

use std::sync::{Arc, Mutex, MutexGuard};

pub mod binarizer;
pub mod command;

pub use binarizer::BinarizerState;
pub use command::{Command, ViewUpdate};

/// Application-wide state container passed to the UI handlers.
#[derive(Clone)]
pub struct AppState {
    /// Mutated on the UI thread only; shared with closures handed to rayon workers.
    pub binarizer: Arc<Mutex<BinarizerState>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            binarizer: Arc::new(Mutex::new(BinarizerState::new())),
        }
    }

    /// Locks the state, recovering it if a previous holder panicked.
    fn lock(&self) -> MutexGuard<'_, BinarizerState> {
        self.binarizer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Locks the state and applies a command.
    pub fn dispatch(&self, command: Command) -> ViewUpdate {
        self.lock().dispatch(command)
    }

    pub fn current_binary(&self) -> Option<image::GrayImage> {
        self.lock().binary()
    }

    pub fn threshold(&self) -> u8 {
        self.lock().threshold()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_loader::{ImageInfo, LoadedImage};
    use image::{GrayImage, RgbImage};
    use std::path::PathBuf;

    fn poison(state: &AppState) {
        let shared = state.binarizer.clone();
        let _ = std::thread::spawn(move || {
            let _guard = shared.lock().unwrap();
            panic!("poison the lock");
        })
        .join();
        assert!(state.binarizer.is_poisoned());
    }

    #[test]
    fn poisoned_lock_still_serves_the_loaded_image() {
        let state = AppState::new();
        let path = PathBuf::from("scan.png");
        state.dispatch(Command::BeginLoad(path.clone()));
        state.dispatch(Command::ImageLoaded {
            path,
            image: LoadedImage {
                original: RgbImage::new(2, 1),
                gray: GrayImage::from_raw(2, 1, vec![10, 200]).unwrap(),
                info: ImageInfo {
                    file_name: "scan.png".to_string(),
                    source_width: 2,
                    source_height: 1,
                    display_width: 2,
                    display_height: 1,
                    file_size: "2 B".to_string(),
                    modified: None,
                },
            },
        });

        poison(&state);

        assert_eq!(state.threshold(), 127);
        assert_eq!(state.current_binary().unwrap().as_raw(), &vec![0, 255]);
        assert!(matches!(
            state.dispatch(Command::ThresholdChanged(5)),
            ViewUpdate::Binary(_)
        ));
        assert_eq!(state.current_binary().unwrap().as_raw(), &vec![255, 255]);
    }
}
