//! Unified error types for the binarization viewer.

use std::fmt;

/// Application-specific errors.
#[derive(Debug)]
pub enum AppError {
    /// Error loading or decoding an image file.
    /// Shown after a "Failed to load ..." prefix, so it displays the cause only.
    ImageLoad(String),
    /// Error encoding or writing the binary image, displayed like `ImageLoad`
    ImageSave(String),
    /// Error reading file metadata
    FileInfo(String),
    /// File extension is not one of the supported formats
    UnsupportedFormat(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ImageLoad(msg) => write!(f, "{}", msg),
            AppError::ImageSave(msg) => write!(f, "{}", msg),
            AppError::FileInfo(msg) => write!(f, "File info error: {}", msg),
            AppError::UnsupportedFormat(path) => write!(f, "Unsupported image format: {}", path),
        }
    }
}

impl std::error::Error for AppError {}

impl From<image::ImageError> for AppError {
    fn from(err: image::ImageError) -> Self {
        AppError::ImageLoad(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::FileInfo(err.to_string())
    }
}

/// Type alias for Results in this application.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixed_load_error_does_not_repeat_itself() {
        let err = AppError::ImageLoad("broken.png: unexpected end of file".to_string());
        let shown = format!("{}: {}", "Failed to load image", err);
        assert_eq!(shown, "Failed to load image: broken.png: unexpected end of file");

        let err = AppError::ImageSave("out.png: permission denied".to_string());
        assert_eq!(err.to_string(), "out.png: permission denied");
    }

    #[test]
    fn other_variants_name_their_kind() {
        let err = AppError::UnsupportedFormat("anim.gif".to_string());
        assert_eq!(err.to_string(), "Unsupported image format: anim.gif");
    }
}
