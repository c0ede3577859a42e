//! Core library for identity document OCR processing.
//!
//! This crate provides:
//! - Line normalization of raw OCR text
//! - Document classification (passport, national ID, tax ID)
//! - Field location and validation per document type
//! - Record assembly with explicit unresolved markers
//! - An OCR boundary with a Tesseract command-line adapter

pub mod error;
pub mod models;
pub mod ocr;
pub mod document;

pub use error::{IdexError, OcrError, Result};
pub use models::config::{ExtractionConfig, IdexConfig, LayoutProfile, OcrConfig};
pub use models::record::{DocumentType, FieldValue, Gender, Record, RecordField, ValueSource};
pub use ocr::{OcrEngine, TesseractEngine};
pub use document::{
    Classification, DocumentClassifier, DocumentExtractor, ExtractionResult, IdentityExtractor,
    LineSequence,
};
