//! Image loading and display logic.
//!
//! Uses `rayon::spawn` for decoding and scaling, then
//! `slint::invoke_from_event_loop` to dispatch the result on the UI thread.

use crate::config::MAX_DISPLAY_SIZE;
use crate::image_loader;
use crate::state::{AppState, Command};
use crate::ui::{apply_view_update, set_error_with_prefix};
use slint::ComponentHandle;
use std::path::PathBuf;

/// Loads an image in a background thread and updates the UI with it.
///
/// This function:
/// 1. Records the path as the pending load
/// 2. Spawns a rayon thread to decode and scale the image
/// 3. Uses invoke_from_event_loop to return to the UI thread
/// 4. Dispatches the result and refreshes the panels, or shows the error
///    if the load was not superseded in the meantime
pub fn load_and_display_image(
    ui: slint::Weak<crate::AppWindow>,
    path: PathBuf,
    error_prefix: String,
    state: AppState,
) {
    state.dispatch(Command::BeginLoad(path.clone()));

    rayon::spawn(move || {
        let result = image_loader::load_for_display(&path, MAX_DISPLAY_SIZE);

        let _ = slint::invoke_from_event_loop(move || {
            let Some(ui) = ui.upgrade() else {
                return;
            };

            match result {
                Ok(image) => {
                    let update = state.dispatch(Command::ImageLoaded { path, image });
                    apply_view_update(&ui, update);
                }
                Err(error) => {
                    let message = format!("{}: {}", error_prefix, error);
                    let update = state.dispatch(Command::LoadFailed { path, message });
                    apply_view_update(&ui, update);
                }
            }
        });
    });
}

/// Writes the current binary image to `path` in a background thread.
pub fn save_binary_image(ui: slint::Weak<crate::AppWindow>, path: PathBuf, state: &AppState) {
    let Some(binary) = state.current_binary() else {
        if let Some(ui) = ui.upgrade() {
            set_error_with_prefix(&ui, "Failed to save image", "No image loaded".to_string());
        }
        return;
    };

    rayon::spawn(move || {
        let result = image_loader::save_binary_image(&binary, &path);

        let _ = slint::invoke_from_event_loop(move || {
            if let Some(ui) = ui.upgrade() {
                match result {
                    Ok(()) => {
                        log::info!("Saved binary image to {}", path.display());
                        ui.global::<crate::ViewState>()
                            .set_error_message("".into());
                    }
                    Err(error) => set_error_with_prefix(&ui, "Failed to save image", error.to_string()),
                }
            }
        });
    });
}
