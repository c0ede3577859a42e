//! Configuration structures for the extraction pipeline.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::record::Gender;
use crate::error::{IdexError, Result};

/// Main configuration for the idex pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IdexConfig {
    /// OCR engine configuration.
    pub ocr: OcrConfig,

    /// Field extraction configuration.
    pub extraction: ExtractionConfig,
}

/// External OCR engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrConfig {
    /// Program to invoke (must accept `<image> stdout` like tesseract).
    pub command: String,

    /// Recognition language passed with `-l`.
    pub language: String,

    /// Page segmentation mode passed with `--psm`.
    pub page_segmentation_mode: Option<u8>,

    /// Additional arguments appended verbatim.
    pub extra_args: Vec<String>,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            command: "tesseract".to_string(),
            language: "eng".to_string(),
            page_segmentation_mode: None,
            extra_args: Vec::new(),
        }
    }
}

/// Which set of field locators to use for every document type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutProfile {
    /// Keyword and pattern driven search.
    #[default]
    Anchored,
    /// Fixed line offsets tied to the printed card layout.
    Fixed,
}

impl std::str::FromStr for LayoutProfile {
    type Err = IdexError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "anchored" => Ok(Self::Anchored),
            "fixed" => Ok(Self::Fixed),
            other => Err(IdexError::Config(format!("unknown layout profile: {other}"))),
        }
    }
}

/// Field extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Locator profile.
    pub layout: LayoutProfile,

    /// Gender reported when a document prints none we can read.
    pub default_gender: Gender,

    /// Value written for every field that could not be resolved.
    pub unresolved_marker: String,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            layout: LayoutProfile::Anchored,
            default_gender: Gender::Male,
            unresolved_marker: "Not found".to_string(),
        }
    }
}

impl IdexConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check values serde cannot reject on its own.
    pub fn validate(&self) -> Result<()> {
        if self.ocr.command.trim().is_empty() {
            return Err(IdexError::Config("ocr.command must not be empty".to_string()));
        }
        if self.extraction.unresolved_marker.is_empty() {
            return Err(IdexError::Config(
                "extraction.unresolved_marker must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
