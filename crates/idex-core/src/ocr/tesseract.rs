//! Tesseract adapter that shells out to the `tesseract` binary.

use std::path::Path;
use std::process::Command;
use std::time::Instant;

use tracing::{debug, info};

use super::{OcrEngine, Result};
use crate::error::OcrError;
use crate::models::config::OcrConfig;

/// OCR engine backed by the Tesseract command-line tool.
#[derive(Debug, Clone)]
pub struct TesseractEngine {
    config: OcrConfig,
}

impl TesseractEngine {
    /// Create an engine with the given configuration.
    pub fn new(config: OcrConfig) -> Self {
        Self { config }
    }

    /// Arguments passed after the program name for `image`.
    pub fn build_args(&self, image: &Path) -> Vec<String> {
        let mut args = vec![
            image.display().to_string(),
            "stdout".to_string(),
            "-l".to_string(),
            self.config.language.clone(),
        ];

        if let Some(psm) = self.config.page_segmentation_mode {
            args.push("--psm".to_string());
            args.push(psm.to_string());
        }

        args.extend(self.config.extra_args.iter().cloned());
        args
    }
}

impl Default for TesseractEngine {
    fn default() -> Self {
        Self::new(OcrConfig::default())
    }
}

impl OcrEngine for TesseractEngine {
    fn name(&self) -> &str {
        &self.config.command
    }

    fn recognize(&self, image: &Path) -> Result<String> {
        if !image.exists() {
            return Err(OcrError::InputNotFound(image.to_path_buf()));
        }

        let start = Instant::now();
        let args = self.build_args(image);
        debug!("Running {} {}", self.config.command, args.join(" "));

        let output = Command::new(&self.config.command)
            .args(&args)
            .output()
            .map_err(|source| OcrError::Spawn {
                command: self.config.command.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(OcrError::Failed {
                status: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let text = String::from_utf8(output.stdout)
            .map_err(|e| OcrError::InvalidOutput(e.to_string()))?;

        info!(
            "Recognized {} characters from {} in {}ms",
            text.len(),
            image.display(),
            start.elapsed().as_millis()
        );

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_args_defaults() {
        let engine = TesseractEngine::default();
        assert_eq!(
            engine.build_args(Path::new("card.png")),
            vec!["card.png", "stdout", "-l", "eng"]
        );
    }

    #[test]
    fn test_build_args_with_psm_and_extras() {
        let engine = TesseractEngine::new(OcrConfig {
            language: "eng+hin".to_string(),
            page_segmentation_mode: Some(6),
            extra_args: vec!["--oem".to_string(), "1".to_string()],
            ..OcrConfig::default()
        });
        assert_eq!(
            engine.build_args(Path::new("card.png")),
            vec!["card.png", "stdout", "-l", "eng+hin", "--psm", "6", "--oem", "1"]
        );
    }

    #[test]
    fn test_missing_input() {
        let engine = TesseractEngine::default();
        let err = engine.recognize(Path::new("/nonexistent/card.png")).unwrap_err();
        assert!(matches!(err, OcrError::InputNotFound(_)));
    }

    #[test]
    fn test_missing_program() {
        let dir = tempfile::tempdir().unwrap();
        let image = dir.path().join("card.png");
        std::fs::write(&image, b"not really a png").unwrap();

        let engine = TesseractEngine::new(OcrConfig {
            command: "idex-no-such-ocr-program".to_string(),
            ..OcrConfig::default()
        });
        let err = engine.recognize(&image).unwrap_err();
        assert!(matches!(err, OcrError::Spawn { .. }));
    }
}
