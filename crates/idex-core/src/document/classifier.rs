//! Document type classification from pattern signatures.

use regex::Regex;
use serde::Serialize;
use tracing::debug;

use super::LineSequence;
use super::rules::patterns::{NATIONAL_ID_SIGNATURE, PASSPORT_SIGNATURE, TAX_ID_SIGNATURE};
use crate::models::record::DocumentType;

/// A pattern whose presence identifies a document type.
#[derive(Debug, Clone)]
pub struct Signature {
    pub name: &'static str,
    pub pattern: &'static Regex,
    pub document_type: DocumentType,
}

/// Classification outcome with the evidence that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub document_type: DocumentType,
    /// Name of the signature that matched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<&'static str>,
    /// Text the signature matched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched: Option<String>,
}

impl Classification {
    fn unknown() -> Self {
        Self {
            document_type: DocumentType::Unknown,
            signature: None,
            matched: None,
        }
    }
}

/// Assigns a document type by evaluating an ordered signature list.
///
/// The first signature found anywhere in the text wins. Order matters:
/// noisy OCR output can match more than one signature.
#[derive(Debug, Clone)]
pub struct DocumentClassifier {
    signatures: Vec<Signature>,
}

impl DocumentClassifier {
    /// Classifier with the built-in signature list.
    pub fn new() -> Self {
        Self {
            signatures: default_signatures(),
        }
    }

    /// Classifier over a custom ordered signature list.
    pub fn with_signatures(signatures: Vec<Signature>) -> Self {
        Self { signatures }
    }

    pub fn signatures(&self) -> &[Signature] {
        &self.signatures
    }

    /// Classify normalized lines. Always returns a label.
    pub fn classify(&self, lines: &LineSequence) -> Classification {
        for signature in &self.signatures {
            if let Some(m) = lines.iter().find_map(|l| signature.pattern.find(l)) {
                debug!(
                    "Signature {} matched {:?} -> {}",
                    signature.name,
                    m.as_str(),
                    signature.document_type
                );
                return Classification {
                    document_type: signature.document_type,
                    signature: Some(signature.name),
                    matched: Some(m.as_str().to_string()),
                };
            }
        }

        debug!("No signature matched ({} lines)", lines.len());
        Classification::unknown()
    }

    /// Classify raw OCR text.
    pub fn classify_text(&self, text: &str) -> Classification {
        self.classify(&LineSequence::from_text(text))
    }
}

impl Default for DocumentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

fn default_signatures() -> Vec<Signature> {
    vec![
        Signature {
            name: "national-id-number",
            pattern: &NATIONAL_ID_SIGNATURE,
            document_type: DocumentType::NationalId,
        },
        Signature {
            name: "tax-id-number",
            pattern: &TAX_ID_SIGNATURE,
            document_type: DocumentType::TaxId,
        },
        Signature {
            name: "passport-number",
            pattern: &PASSPORT_SIGNATURE,
            document_type: DocumentType::Passport,
        },
    ]
}

/// Classify raw OCR text with the built-in signatures.
pub fn classify_document(text: &str) -> DocumentType {
    DocumentClassifier::new().classify_text(text).document_type
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_signature() {
        assert_eq!(classify_document("Aadhaar\n1234 5678 9012"), DocumentType::NationalId);
        assert_eq!(classify_document("INCOME TAX DEPARTMENT\nABCDE1234F"), DocumentType::TaxId);
        assert_eq!(classify_document("REPUBLIC OF INDIA\nA1234567"), DocumentType::Passport);
        assert_eq!(classify_document("Passport No.\nJK1234567"), DocumentType::Passport);
    }

    #[test]
    fn test_unknown() {
        assert_eq!(classify_document(""), DocumentType::Unknown);
        assert_eq!(classify_document("   \n\n"), DocumentType::Unknown);
        assert_eq!(classify_document("LIBRARY CARD\nMember 42"), DocumentType::Unknown);
    }

    #[test]
    fn test_earlier_rules_take_precedence() {
        // all three signatures present, in reverse priority order
        let text = "A1234567\nABCDE1234F\n1234 5678 9012";
        assert_eq!(classify_document(text), DocumentType::NationalId);

        let text = "A1234567\nABCDE1234F";
        assert_eq!(classify_document(text), DocumentType::TaxId);
    }

    #[test]
    fn test_deterministic_with_evidence() {
        let classifier = DocumentClassifier::new();
        let text = "Permanent Account Number\nABCDE1234F";
        let first = classifier.classify_text(text);
        let second = classifier.classify_text(text);

        assert_eq!(first, second);
        assert_eq!(first.signature, Some("tax-id-number"));
        assert_eq!(first.matched.as_deref(), Some("ABCDE1234F"));
    }

    #[test]
    fn test_custom_signature_order() {
        let mut signatures = DocumentClassifier::new().signatures().to_vec();
        signatures.reverse();
        let classifier = DocumentClassifier::with_signatures(signatures);

        let text = "A1234567\n1234 5678 9012";
        assert_eq!(
            classifier.classify_text(text).document_type,
            DocumentType::Passport
        );
    }
}
