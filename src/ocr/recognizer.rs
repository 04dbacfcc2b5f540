use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;
use crate::errors::SolverError;

/// Image formats the OCR engines accept.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "tif", "tiff", "webp"];

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+").expect("static regex")
});

#[async_trait]
pub trait TextRecognizer: Send + Sync {
    /// Raw text recognized in the image.
    async fn recognize(&self, image: &Path) -> Result<String, SolverError>;

    /// Engine name for logging
    fn engine_name(&self) -> &str;
}

/// Progress notifications emitted while a batch of images is processed.
#[derive(Debug, Clone)]
pub enum OcrEvent {
    Started {
        path: PathBuf,
    },
    Recognized {
        path: PathBuf,
        chars: usize,
        duration_ms: u64,
    },
    Failed {
        path: PathBuf,
        error: String,
    },
}

/// Turn raw OCR output into a query: trimmed, optionally with every run of
/// whitespace folded into one space.
pub fn clean_text(raw: &str, collapse_whitespace: bool) -> String {
    let trimmed = raw.trim();
    if collapse_whitespace {
        WHITESPACE_RUN.replace_all(trimmed, " ").into_owned()
    } else {
        trimmed.to_string()
    }
}

pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| IMAGE_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text_trims_only_by_default() {
        assert_eq!(clean_text("  La Tierra\nes redonda \n\n", false), "La Tierra\nes redonda");
    }

    #[test]
    fn test_clean_text_collapses_whitespace() {
        assert_eq!(clean_text("  La Tierra\nes   redonda\t.\n", true), "La Tierra es redonda .");
    }

    #[test]
    fn test_clean_text_empty() {
        assert_eq!(clean_text(" \n\t ", true), "");
        assert_eq!(clean_text("", false), "");
    }

    #[test]
    fn test_supported_images() {
        assert!(is_supported_image(Path::new("shot.png")));
        assert!(is_supported_image(Path::new("dir/Shot.JPG")));
        assert!(!is_supported_image(Path::new("notes.txt")));
        assert!(!is_supported_image(Path::new("noextension")));
    }
}
