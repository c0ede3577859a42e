//! CLI subcommands.

pub mod batch;
pub mod classify;
pub mod config;
pub mod process;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use idex_core::models::config::IdexConfig;
use idex_core::ocr::{is_image_path, OcrEngine, TesseractEngine};
use idex_core::{DocumentExtractor, ExtractionResult, IdentityExtractor};

/// Per-user configuration file, `<config dir>/idex/config.json`.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("idex")
        .join("config.json")
}

/// The file named by `--config`, or the per-user file.
pub fn resolve_config_path(config_path: Option<&str>) -> PathBuf {
    config_path
        .map(PathBuf::from)
        .unwrap_or_else(default_config_path)
}

/// Load the configuration every command runs with.
///
/// An explicit `--config` file must exist. Without one, the per-user file is
/// used when present and defaults otherwise.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<IdexConfig> {
    let path = resolve_config_path(config_path);

    if config_path.is_none() && !path.exists() {
        debug!("No config file at {}, using defaults", path.display());
        return Ok(IdexConfig::default());
    }

    debug!("Loading config from {}", path.display());
    Ok(IdexConfig::from_file(&path)?)
}

/// Whether the path is a document this CLI can read.
pub fn is_supported_input(path: &Path) -> bool {
    is_text_path(path) || is_image_path(path)
}

fn is_text_path(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("txt"))
        .unwrap_or(false)
}

/// Extract one document: `.txt` files hold OCR output already, images go
/// through the configured OCR engine first.
pub fn extract_document(
    path: &Path,
    extractor: &IdentityExtractor,
    config: &IdexConfig,
) -> anyhow::Result<ExtractionResult> {
    if !path.exists() {
        anyhow::bail!("Input file not found: {}", path.display());
    }

    if is_text_path(path) {
        debug!("Reading OCR text from {}", path.display());
        let text = fs::read_to_string(path)?;
        return Ok(extractor.extract_from_text(&text));
    }

    if is_image_path(path) {
        let engine = TesseractEngine::new(config.ocr.clone());
        debug!("Running {} on {}", engine.name(), path.display());
        return Ok(extractor.extract_from_image(&engine, path)?);
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("");
    anyhow::bail!("Unsupported file format: {}", extension)
}
