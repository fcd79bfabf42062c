// Prevent console window in addition to Slint window in Windows release builds when, e.g., starting the app via file manager. Ignored on other platforms.
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

slint::include_modules!();

mod config;
mod error;
mod file_utils;
mod image_loader;
mod startup;
mod state;
mod threshold;
mod ui;

use slint::ComponentHandle;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(debug_assertions)]
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Debug)
        .init();

    let app = AppWindow::new()?;
    let app_state = state::AppState::new();

    app.global::<ViewState>()
        .set_threshold(config::DEFAULT_THRESHOLD as i32);
    ui::set_placeholders(&app, config::PLACEHOLDER_SIZE);

    // Setup all UI event handlers
    ui::setup_handlers(&app, app_state.clone());
    startup::configure_startup_opening(&app, &app_state);

    app.run()?;

    Ok(())
}
