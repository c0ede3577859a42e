//! Identity document number validation.

use super::FieldNormalizer;
use super::patterns::{NATIONAL_ID_FORMAT, PASSPORT_FORMAT, TAX_ID_FORMAT};

/// The identifier grammars we know.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdKind {
    /// Aadhaar: `1234 5678 9012`
    National,
    /// PAN: `ABCDE1234F`
    Tax,
    /// Passport: `A1234567` or `AB1234567`
    Passport,
    /// Whichever of the above matches first.
    Any,
}

/// Identifier normalizer for one grammar.
#[derive(Debug, Clone, Copy)]
pub struct IdNumberNormalizer {
    kind: IdKind,
}

impl IdNumberNormalizer {
    pub fn new(kind: IdKind) -> Self {
        Self { kind }
    }
}

impl FieldNormalizer for IdNumberNormalizer {
    fn normalize(&self, candidate: &str) -> Option<String> {
        match self.kind {
            IdKind::National => normalize_national_id(candidate),
            IdKind::Tax => normalize_tax_id(candidate),
            IdKind::Passport => normalize_passport_number(candidate),
            IdKind::Any => normalize_national_id(candidate)
                .or_else(|| normalize_tax_id(candidate))
                .or_else(|| normalize_passport_number(candidate)),
        }
    }
}

/// Validate an Aadhaar number. Groups must be separated by single spaces.
pub fn normalize_national_id(candidate: &str) -> Option<String> {
    let value = candidate.trim();
    NATIONAL_ID_FORMAT
        .is_match(value)
        .then(|| value.to_string())
}

/// Validate a PAN after removing spaces and uppercasing.
pub fn normalize_tax_id(candidate: &str) -> Option<String> {
    let value = candidate.replace(' ', "").trim().to_uppercase();
    TAX_ID_FORMAT.is_match(&value).then_some(value)
}

/// Validate a passport number after removing whitespace and uppercasing.
pub fn normalize_passport_number(candidate: &str) -> Option<String> {
    let value: String = candidate
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase();
    PASSPORT_FORMAT.is_match(&value).then_some(value)
}
