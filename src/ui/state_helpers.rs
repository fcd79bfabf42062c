//! Helper functions to set groups of ViewState properties at once.

use crate::image_loader::{self, ImageInfo};
use crate::state::ViewUpdate;
use log::error;
use slint::ComponentHandle;

/// Pushes a dispatch result into the image panels.
pub fn apply_view_update(ui: &crate::AppWindow, update: ViewUpdate) {
    let view_state = ui.global::<crate::ViewState>();
    match update {
        ViewUpdate::Nothing => {}
        ViewUpdate::Binary(binary) => {
            view_state.set_binary_image(image_loader::create_slint_gray_image(&binary));
        }
        ViewUpdate::Full {
            original,
            gray,
            binary,
            info,
        } => {
            view_state.set_original_image(image_loader::create_slint_image(
                original.as_raw(),
                original.width(),
                original.height(),
            ));
            view_state.set_gray_image(image_loader::create_slint_gray_image(&gray));
            view_state.set_binary_image(image_loader::create_slint_gray_image(&binary));
            view_state.set_image_loaded(true);
            view_state.set_error_message("".into());
            set_image_info(ui, &info);
        }
        ViewUpdate::Error(message) => {
            error!("{}", message);
            view_state.set_error_message(message.into());
        }
    }
}

/// Sets file name and summary properties.
pub fn set_image_info(ui: &crate::AppWindow, info: &ImageInfo) {
    let view_state = ui.global::<crate::ViewState>();
    view_state.set_current_filename(info.file_name.as_str().into());
    view_state.set_image_info(info.summary().into());
}

/// Fills the three panels with blank placeholders.
pub fn set_placeholders(ui: &crate::AppWindow, size: u32) {
    let view_state = ui.global::<crate::ViewState>();
    view_state.set_original_image(image_loader::placeholder_image(size));
    view_state.set_gray_image(image_loader::placeholder_image(size));
    view_state.set_binary_image(image_loader::placeholder_image(size));
    view_state.set_image_loaded(false);
}

/// Sets an error message in the UI with a prefix.
///
/// Logs the error and updates the ViewState error-message property.
pub fn set_error_with_prefix(ui: &crate::AppWindow, prefix: &str, error: String) {
    let error_message = format!("{}: {}", prefix, error);
    error!("{}", error_message);
    ui.global::<crate::ViewState>()
        .set_error_message(error_message.into());
}
