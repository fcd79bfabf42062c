use slint::ComponentHandle;
use std::path::PathBuf;

use crate::file_utils::{self, PathExt};
use crate::state::AppState;
use crate::ui::image_display::load_and_display_image;

fn startup_image_from_args() -> Option<PathBuf> {
    std::env::args_os()
        .skip(1)
        .filter_map(|arg| {
            let arg_str = arg.to_string_lossy();
            if arg_str.starts_with('-') {
                None
            } else {
                Some(PathBuf::from(arg))
            }
        })
        .find(|path| file_utils::is_supported_image(path))
}

fn setup_drop_handler(app: &crate::AppWindow, app_state: &AppState) {
    use i_slint_backend_winit::WinitWindowAccessor;
    use i_slint_backend_winit::{EventResult, winit::event::WindowEvent};

    let ui_handle = app.as_weak();
    let state = app_state.clone();

    app.window().on_winit_window_event(move |_window, event| {
        if let WindowEvent::DroppedFile(path) = event {
            if file_utils::is_supported_image(path) {
                load_and_display_image(
                    ui_handle.clone(),
                    path.clone(),
                    "Failed to load dropped image".to_string(),
                    state.clone(),
                );
            } else {
                log::warn!("Ignoring dropped file {}", path.format_for_log());
            }
        }

        EventResult::Propagate
    });
}

pub fn configure_startup_opening(app: &crate::AppWindow, app_state: &AppState) {
    setup_drop_handler(app, app_state);

    if let Some(path) = startup_image_from_args() {
        load_and_display_image(
            app.as_weak(),
            path,
            "Failed to load startup image".to_string(),
            app_state.clone(),
        );
    }
}
