//! UI module for handling user interactions and UI updates.
//!
//! Threading model:
//! - `slint::spawn_local`: file dialogs, which must run on the main thread
//! - `rayon::spawn`: image decoding, scaling and encoding
//! - `slint::invoke_from_event_loop`: returning worker results to the UI thread
//! - threshold recomputation runs directly inside the slider callback

pub mod handlers;
pub mod image_display;
mod state_helpers;

pub use handlers::setup_handlers;
pub use state_helpers::*;
