//! Identity document field extraction module.

mod classifier;
mod extractor;
mod lines;
pub mod registry;
pub mod rules;

pub use classifier::{classify_document, Classification, DocumentClassifier, Signature};
pub use extractor::{ExtractionResult, IdentityExtractor};
pub use lines::LineSequence;
pub use registry::{Fallback, FieldRegistry, FieldSpec};

use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::ocr::OcrEngine;

/// Trait for identity document extractors.
///
/// Extraction from text cannot fail: anything not found is reported as an
/// unresolved field. Only the OCR step of [`extract_from_image`] can error.
///
/// [`extract_from_image`]: DocumentExtractor::extract_from_image
pub trait DocumentExtractor {
    /// Extract a record from raw OCR text.
    fn extract_from_text(&self, text: &str) -> ExtractionResult;

    /// Recognize an image with `engine`, then extract from its text.
    fn extract_from_image(&self, engine: &dyn OcrEngine, image: &Path) -> Result<ExtractionResult> {
        let text = engine.recognize(image)?;
        debug!("{} returned {} characters", engine.name(), text.len());
        Ok(self.extract_from_text(&text))
    }
}
