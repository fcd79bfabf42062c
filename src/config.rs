//! Application configuration constants.

/// Supported image file extensions for the file dialog, command line and drag and drop.
pub const SUPPORTED_IMAGE_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "bmp"];

/// Initial slider position.
pub const DEFAULT_THRESHOLD: u8 = 127;

/// Longest side of a loaded image after it is scaled for display.
pub const MAX_DISPLAY_SIZE: u32 = 512;

/// Side length of the blank panels shown before any image is loaded.
pub const PLACEHOLDER_SIZE: u32 = 256;
