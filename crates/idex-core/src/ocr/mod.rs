//! OCR boundary.
//!
//! Recognition itself is delegated to an external engine; the rest of the
//! crate only ever sees the recognized text.

mod tesseract;

pub use tesseract::TesseractEngine;

use std::path::Path;

use crate::error::OcrError;

/// Result type for OCR operations.
pub type Result<T> = std::result::Result<T, OcrError>;

/// An engine that turns a document image into raw UTF-8 text.
pub trait OcrEngine: Send + Sync {
    /// Engine name for logs and metadata.
    fn name(&self) -> &str;

    /// Recognize the text in the image at `image`.
    fn recognize(&self, image: &Path) -> Result<String>;
}

/// Image extensions the bundled engine accepts.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "tif", "tiff", "bmp", "webp"];

/// Whether a path looks like an image the OCR engine can read.
pub fn is_image_path(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| IMAGE_EXTENSIONS.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_image_path() {
        assert!(is_image_path(Path::new("scan.PNG")));
        assert!(is_image_path(Path::new("dir/card.jpeg")));
        assert!(!is_image_path(Path::new("card.txt")));
        assert!(!is_image_path(Path::new("card")));
    }
}
