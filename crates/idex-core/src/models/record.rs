//! Extraction record models.

use std::fmt;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Classification label for a scanned document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentType {
    /// Passport booklet data page.
    Passport,
    /// National identity card (Aadhaar).
    NationalId,
    /// Tax identity card (PAN).
    TaxId,
    /// No signature matched.
    Unknown,
}

impl DocumentType {
    /// Stable upper-case tag, as used in serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Passport => "PASSPORT",
            Self::NationalId => "NATIONAL_ID",
            Self::TaxId => "TAX_ID",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Human readable name.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Passport => "Passport",
            Self::NationalId => "National ID card (Aadhaar)",
            Self::TaxId => "Tax ID card (PAN)",
            Self::Unknown => "Unknown document",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Gender as printed on identity documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Gender {
    #[default]
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

impl Gender {
    /// Single letter form (`M` / `F`).
    pub fn letter(&self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
        }
    }

    /// Word form (`Male` / `Female`).
    pub fn word(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

/// Where a resolved value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueSource {
    /// Located in the text and accepted by the field grammar.
    Extracted,
    /// Configured default policy, nothing usable was found.
    Default,
}

/// Outcome of resolving one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FieldValue {
    /// A canonical value.
    Resolved { value: String, source: ValueSource },
    /// A candidate was located but failed validation.
    Rejected { candidate: String },
    /// Nothing was located.
    Missing,
}

impl FieldValue {
    pub fn extracted(value: impl Into<String>) -> Self {
        Self::Resolved {
            value: value.into(),
            source: ValueSource::Extracted,
        }
    }

    pub fn defaulted(value: impl Into<String>) -> Self {
        Self::Resolved {
            value: value.into(),
            source: ValueSource::Default,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved { .. })
    }

    /// The canonical value, if resolved.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Resolved { value, .. } => Some(value),
            _ => None,
        }
    }
}

/// One named field of a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordField {
    pub name: &'static str,
    pub value: FieldValue,
}

/// Final field-name-to-value mapping for one processed document.
///
/// Every field registered for the document type is present, in registration
/// order. Serializes as a flat object of field name to string, with the
/// unresolved marker standing in for anything not resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    document_type: DocumentType,
    fields: Vec<RecordField>,
    unresolved_marker: String,
}

impl Record {
    pub(crate) fn new(
        document_type: DocumentType,
        fields: Vec<RecordField>,
        unresolved_marker: impl Into<String>,
    ) -> Self {
        Self {
            document_type,
            fields,
            unresolved_marker: unresolved_marker.into(),
        }
    }

    pub fn document_type(&self) -> DocumentType {
        self.document_type
    }

    pub fn fields(&self) -> &[RecordField] {
        &self.fields
    }

    pub fn unresolved_marker(&self) -> &str {
        &self.unresolved_marker
    }

    /// Field names in record order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.name)
    }

    /// Look up the full outcome for a field.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.iter().find(|f| f.name == name).map(|f| &f.value)
    }

    /// Rendered value for a field: the canonical value or the marker.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.get(name)
            .map(|v| v.as_str().unwrap_or(&self.unresolved_marker))
    }

    /// Rendered `(name, value)` pairs in record order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.fields.iter().map(|f| {
            (
                f.name,
                f.value.as_str().unwrap_or(&self.unresolved_marker),
            )
        })
    }

    /// Number of fields holding a resolved value.
    pub fn resolved_count(&self) -> usize {
        self.fields.iter().filter(|f| f.value.is_resolved()).count()
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in self.entries() {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
