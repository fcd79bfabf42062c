use crate::config::SUPPORTED_IMAGE_EXTENSIONS;
use crate::error::{AppError, Result};
use chrono::{DateTime, Local};
use std::fs;
use std::path::Path;

/// Returns true if the path has one of the supported image extensions (case-insensitive).
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext_str| SUPPORTED_IMAGE_EXTENSIONS.contains(&ext_str.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Rejects paths whose extension is not a supported image format.
pub fn ensure_supported_image(path: &Path) -> Result<()> {
    if is_supported_image(path) {
        Ok(())
    } else {
        Err(AppError::UnsupportedFormat(path.format_for_log()))
    }
}

/// Size and modification date of a file on disk.
#[derive(Debug, Clone)]
pub struct FileStats {
    pub size_bytes: u64,
    pub modified: Option<DateTime<Local>>,
}

pub fn read_file_stats(path: &Path) -> Result<FileStats> {
    let metadata = fs::metadata(path)?;
    let modified = metadata.modified().ok().map(DateTime::<Local>::from);

    Ok(FileStats {
        size_bytes: metadata.len(),
        modified,
    })
}

/// Formats a byte count as B, KB or MB.
pub fn format_file_size(size_bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;

    let size = size_bytes as f64;
    if size >= MB {
        format!("{:.1} MB", size / MB)
    } else if size >= KB {
        format!("{:.1} KB", size / KB)
    } else {
        format!("{} B", size_bytes)
    }
}

pub trait PathExt {
    /// Short, lossy display form for log lines.
    fn format_for_log(&self) -> String;
}

impl PathExt for Path {
    fn format_for_log(&self) -> String {
        self.file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    #[test]
    fn supported_extensions_are_case_insensitive() {
        assert!(is_supported_image(Path::new("photo.JPG")));
        assert!(is_supported_image(Path::new("photo.jpeg")));
        assert!(is_supported_image(Path::new("scan.Png")));
        assert!(is_supported_image(Path::new("/tmp/dir/old.bmp")));
    }

    #[test]
    fn unsupported_extensions_are_rejected() {
        assert!(!is_supported_image(Path::new("anim.gif")));
        assert!(!is_supported_image(Path::new("notes.txt")));
        assert!(!is_supported_image(Path::new("no_extension")));

        let err = ensure_supported_image(Path::new("/somewhere/anim.webp")).unwrap_err();
        assert!(matches!(err, AppError::UnsupportedFormat(ref name) if name == "anim.webp"));
    }

    #[test]
    fn file_sizes_are_human_readable() {
        assert_eq!(format_file_size(512), "512 B");
        assert_eq!(format_file_size(2048), "2.0 KB");
        assert_eq!(format_file_size(3 * 1024 * 1024 + 512 * 1024), "3.5 MB");
    }

    #[test]
    fn stats_report_size_of_written_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.bin");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(&[0u8; 100]).unwrap();
        drop(file);

        let stats = read_file_stats(&path).unwrap();
        assert_eq!(stats.size_bytes, 100);
        assert!(stats.modified.is_some());
    }

    #[test]
    fn stats_for_missing_file_is_an_error() {
        let path = PathBuf::from("/definitely/not/here.png");
        assert!(matches!(read_file_stats(&path), Err(AppError::FileInfo(_))));
    }
}
