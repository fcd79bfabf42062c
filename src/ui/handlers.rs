//! Event handlers for UI callbacks.
//!
//! Sets up all Logic callbacks (select_image, threshold_changed, save_binary_image)
//! using the appropriate threading model for each operation type.

use crate::state::{AppState, Command};
use crate::ui::apply_view_update;
use crate::ui::image_display::{load_and_display_image, save_binary_image};
use rfd::AsyncFileDialog;
use slint::ComponentHandle;

fn image_dialog(title: &str) -> AsyncFileDialog {
    AsyncFileDialog::new()
        .set_title(title)
        .add_filter("JPG files", &["jpeg", "jpg"])
        .add_filter("PNG files", &["png"])
        .add_filter("BMP files", &["bmp"])
}

/// Sets up all UI event handlers for the application.
///
/// Takes the UI handle and the application state, then registers
/// callbacks for image selection, threshold changes and saving.
pub fn setup_handlers(ui: &crate::AppWindow, state: AppState) {
    // Image selection handler
    // Uses slint::spawn_local because AsyncFileDialog must run on the main thread
    ui.global::<crate::Logic>().on_select_image({
        let ui_handle = ui.as_weak();
        let state = state.clone();
        move || {
            let ui_handle = ui_handle.clone();
            let state = state.clone();
            let _ = slint::spawn_local(async move {
                let Some(file_handle) = image_dialog("Choose an image").pick_file().await else {
                    if let Some(ui) = ui_handle.upgrade() {
                        ui.global::<crate::ViewState>()
                            .set_error_message("No file selected".into());
                    }
                    return;
                };

                load_and_display_image(
                    ui_handle,
                    file_handle.path().to_path_buf(),
                    "Failed to load image".to_string(),
                    state,
                );
            });
        }
    });

    // Threshold handler
    // Runs synchronously: the transform is cheap and must finish before the next slider event
    ui.global::<crate::Logic>().on_threshold_changed({
        let ui_handle = ui.as_weak();
        let state = state.clone();
        move |value| {
            let update = state.dispatch(Command::ThresholdChanged(value));
            if let Some(ui) = ui_handle.upgrade() {
                ui.global::<crate::ViewState>()
                    .set_threshold(state.threshold() as i32);
                apply_view_update(&ui, update);
            }
        }
    });

    // Save handler
    ui.global::<crate::Logic>().on_save_binary_image({
        let ui_handle = ui.as_weak();
        let state = state.clone();
        move || {
            let ui_handle = ui_handle.clone();
            let state = state.clone();
            let _ = slint::spawn_local(async move {
                let Some(file_handle) = image_dialog("Save binary image")
                    .set_file_name("binary.png")
                    .save_file()
                    .await
                else {
                    return;
                };

                save_binary_image(ui_handle, file_handle.path().to_path_buf(), &state);
            });
        }
    });
}
