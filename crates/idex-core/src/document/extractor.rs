//! Identity document extractor: classification, field resolution and record
//! assembly.

use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info, warn};

use super::classifier::{Classification, DocumentClassifier};
use super::registry::{Fallback, FieldRegistry, FieldSpec};
use super::rules::{FieldLocator, FieldNormalizer, Normalizer};
use super::{DocumentExtractor, LineSequence};
use crate::models::config::{ExtractionConfig, LayoutProfile};
use crate::models::record::{DocumentType, FieldValue, Gender, Record, RecordField};

/// Result of extracting one document.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionResult {
    /// How the document was classified.
    pub classification: Classification,
    /// Layout profile the fields were located with.
    pub layout: LayoutProfile,
    /// Extracted fields.
    pub record: Record,
    /// Extraction warnings.
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

impl ExtractionResult {
    pub fn document_type(&self) -> DocumentType {
        self.classification.document_type
    }
}

/// Rule-based extractor for passports, national ID and tax ID cards.
#[derive(Debug, Clone)]
pub struct IdentityExtractor {
    classifier: DocumentClassifier,
    layout: LayoutProfile,
    default_gender: Gender,
    unresolved_marker: String,
}

impl IdentityExtractor {
    /// Create an extractor with default settings.
    pub fn new() -> Self {
        Self::from_config(&ExtractionConfig::default())
    }

    /// Create an extractor from extraction configuration.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self {
            classifier: DocumentClassifier::new(),
            layout: config.layout,
            default_gender: config.default_gender,
            unresolved_marker: config.unresolved_marker.clone(),
        }
    }

    /// Set the layout profile.
    pub fn with_layout(mut self, layout: LayoutProfile) -> Self {
        self.layout = layout;
        self
    }

    /// Set the gender used where a document's gender defaults.
    pub fn with_default_gender(mut self, gender: Gender) -> Self {
        self.default_gender = gender;
        self
    }

    /// Set the marker written for unresolved fields.
    pub fn with_unresolved_marker(mut self, marker: impl Into<String>) -> Self {
        self.unresolved_marker = marker.into();
        self
    }

    /// Replace the document classifier.
    pub fn with_classifier(mut self, classifier: DocumentClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn layout(&self) -> LayoutProfile {
        self.layout
    }

    /// Classify raw text without extracting fields.
    pub fn classify(&self, text: &str) -> Classification {
        self.classifier.classify_text(text)
    }

    /// Extract fields from normalized lines.
    pub fn extract_lines(&self, lines: &LineSequence) -> ExtractionResult {
        let start = Instant::now();
        let classification = self.classifier.classify(lines);
        self.finish(classification, lines, start)
    }

    /// Extract fields treating the text as a known document type.
    pub fn extract_as(&self, text: &str, document_type: DocumentType) -> ExtractionResult {
        let start = Instant::now();
        let lines = LineSequence::from_text(text);
        let classification = Classification {
            document_type,
            signature: None,
            matched: None,
        };
        self.finish(classification, &lines, start)
    }

    fn finish(
        &self,
        classification: Classification,
        lines: &LineSequence,
        start: Instant,
    ) -> ExtractionResult {
        let document_type = classification.document_type;
        let mut warnings = Vec::new();

        if lines.is_empty() {
            warnings.push("No text lines in input".to_string());
        }
        if document_type == DocumentType::Unknown {
            warnings.push("Could not determine document type".to_string());
        }

        let record = self.assemble(document_type, lines, &mut warnings);

        info!(
            "Extracted {} record: {}/{} fields resolved from {} lines",
            document_type,
            record.resolved_count(),
            record.fields().len(),
            lines.len()
        );

        ExtractionResult {
            classification,
            layout: self.layout,
            record,
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }

    /// Run every field spec registered for the type.
    fn assemble(
        &self,
        document_type: DocumentType,
        lines: &LineSequence,
        warnings: &mut Vec<String>,
    ) -> Record {
        let specs = FieldRegistry::for_layout(self.layout).fields(document_type);

        let fields = specs
            .iter()
            .map(|spec| {
                let value = self.resolve_field(spec, lines);
                if !value.is_resolved() {
                    warnings.push(format!("Could not extract {}", spec.name));
                }
                RecordField {
                    name: spec.name,
                    value,
                }
            })
            .collect();

        Record::new(document_type, fields, self.unresolved_marker.clone())
    }

    fn resolve_field(&self, spec: &FieldSpec, lines: &LineSequence) -> FieldValue {
        let candidate = spec.locator.as_ref().and_then(|l| l.locate(lines));

        let value = match candidate {
            Some(raw) => match spec.normalizer.normalize(raw) {
                Some(value) => FieldValue::extracted(value),
                None => {
                    warn!("Rejected candidate {:?} for {}", raw, spec.name);
                    FieldValue::Rejected {
                        candidate: raw.to_string(),
                    }
                }
            },
            None => FieldValue::Missing,
        };

        let value = match (value, spec.fallback) {
            (value, Fallback::DefaultGender) if !value.is_resolved() => {
                FieldValue::defaulted(self.default_value(spec.normalizer))
            }
            (value, _) => value,
        };

        debug!(
            "{} via {}: {:?}",
            spec.name,
            spec.locator.as_ref().map(|l| l.kind()).unwrap_or("none"),
            value
        );

        value
    }

    fn default_value(&self, normalizer: Normalizer) -> &'static str {
        match normalizer {
            Normalizer::Gender(style) => style.render(self.default_gender),
            _ => self.default_gender.letter(),
        }
    }
}

impl Default for IdentityExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentExtractor for IdentityExtractor {
    fn extract_from_text(&self, text: &str) -> ExtractionResult {
        self.extract_lines(&LineSequence::from_text(text))
    }
}
