//! Static field specifications per document type and layout profile.

use lazy_static::lazy_static;

use super::rules::patterns::{
    ANY_ID_NUMBER, BIRTH_YEAR_OR_DATE, DATE_DMY, GENDER_WORD, NATIONAL_ID_HEADER,
    NATIONAL_ID_NUMBER, PASSPORT_NUMBER, TAX_ID_HEADER,
};
use super::rules::{GenderStyle, IdKind, Locator, Normalizer};
use crate::models::config::LayoutProfile;
use crate::models::record::DocumentType;

/// What a field resolves to when nothing valid was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// Leave the field unresolved.
    Unresolved,
    /// Use the configured default gender.
    DefaultGender,
}

/// How to locate and validate one field of one document type.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: &'static str,
    /// `None` when the layout does not print this field at all.
    pub locator: Option<Locator>,
    pub normalizer: Normalizer,
    pub fallback: Fallback,
}

impl FieldSpec {
    fn new(name: &'static str, locator: impl Into<Locator>, normalizer: Normalizer) -> Self {
        Self {
            name,
            locator: Some(locator.into()),
            normalizer,
            fallback: Fallback::Unresolved,
        }
    }

    fn unlocated(name: &'static str, normalizer: Normalizer) -> Self {
        Self {
            name,
            locator: None,
            normalizer,
            fallback: Fallback::Unresolved,
        }
    }

    fn or_default_gender(mut self) -> Self {
        self.fallback = Fallback::DefaultGender;
        self
    }
}

/// Field specs for every document type under one layout profile.
#[derive(Debug, Clone)]
pub struct FieldRegistry {
    passport: Vec<FieldSpec>,
    national_id: Vec<FieldSpec>,
    tax_id: Vec<FieldSpec>,
    unknown: Vec<FieldSpec>,
}

impl FieldRegistry {
    /// The built-in registry for a layout profile.
    pub fn for_layout(layout: LayoutProfile) -> &'static FieldRegistry {
        match layout {
            LayoutProfile::Anchored => &ANCHORED,
            LayoutProfile::Fixed => &FIXED,
        }
    }

    /// Specs for a document type, in record order.
    pub fn fields(&self, document_type: DocumentType) -> &[FieldSpec] {
        match document_type {
            DocumentType::Passport => &self.passport,
            DocumentType::NationalId => &self.national_id,
            DocumentType::TaxId => &self.tax_id,
            DocumentType::Unknown => &self.unknown,
        }
    }

    /// Field names for a document type, in record order.
    pub fn field_names(&self, document_type: DocumentType) -> Vec<&'static str> {
        self.fields(document_type).iter().map(|s| s.name).collect()
    }

    fn anchored() -> Self {
        Self {
            passport: vec![
                FieldSpec::new("Surname", Locator::keyword("Surname"), Normalizer::Name),
                FieldSpec::new("First Name", Locator::keyword("Given Name"), Normalizer::Name),
                FieldSpec::new("Date of Birth", Locator::nth_pattern(&DATE_DMY, 0), Normalizer::Date),
                FieldSpec::new(
                    "Gender",
                    Locator::keyword("Sex"),
                    Normalizer::Gender(GenderStyle::Letter),
                )
                .or_default_gender(),
                FieldSpec::new(
                    "Number",
                    Locator::pattern(&PASSPORT_NUMBER),
                    Normalizer::IdNumber(IdKind::Passport),
                ),
                // birth, issue, expiry
                FieldSpec::new("Date of Expiry", Locator::nth_pattern(&DATE_DMY, 2), Normalizer::Date),
            ],
            national_id: vec![
                FieldSpec::new("Year of Birth", Locator::pattern(&BIRTH_YEAR_OR_DATE), Normalizer::Date),
                FieldSpec::new(
                    "Gender",
                    Locator::pattern(&GENDER_WORD),
                    Normalizer::Gender(GenderStyle::Word),
                ),
                FieldSpec::new(
                    "Aadhar",
                    Locator::pattern(&NATIONAL_ID_NUMBER),
                    Normalizer::IdNumber(IdKind::National),
                ),
            ],
            tax_id: vec![
                // the holder's name is the first line under the department header
                FieldSpec::new(
                    "Name",
                    Locator::positional(0).with_anchor(&TAX_ID_HEADER).with_skip(1),
                    Normalizer::Name,
                ),
                FieldSpec::new("Father Name", Locator::keyword("Father's Name"), Normalizer::Name),
                FieldSpec::new("Date of Birth", Locator::keyword("Date of Birth"), Normalizer::Date),
                FieldSpec::new(
                    "PAN",
                    Locator::keyword("Permanent Account Number"),
                    Normalizer::IdNumber(IdKind::Tax),
                ),
            ],
            unknown: unknown_fields(),
        }
    }

    fn fixed() -> Self {
        Self {
            passport: vec![
                FieldSpec::new("Surname", Locator::positional(3).with_skip(1), Normalizer::Name),
                FieldSpec::new("First Name", Locator::positional(5).with_skip(1), Normalizer::Name),
                FieldSpec::new("Date of Birth", Locator::positional(7).with_skip(1), Normalizer::Date),
                FieldSpec::unlocated("Gender", Normalizer::Gender(GenderStyle::Letter))
                    .or_default_gender(),
                // number sits at the end of the type/code line
                FieldSpec::new(
                    "Number",
                    Locator::positional(1).with_skip(1).with_tail(8),
                    Normalizer::IdNumber(IdKind::Passport),
                ),
                FieldSpec::new("Date of Expiry", Locator::positional(14).with_skip(1), Normalizer::Date),
            ],
            national_id: vec![
                FieldSpec::new(
                    "Year of Birth",
                    Locator::positional(1).with_anchor(&NATIONAL_ID_HEADER).with_skip(1),
                    Normalizer::Date,
                ),
                FieldSpec::new(
                    "Gender",
                    Locator::positional(2).with_anchor(&NATIONAL_ID_HEADER).with_skip(1),
                    Normalizer::Gender(GenderStyle::Word),
                ),
                FieldSpec::new(
                    "Aadhar",
                    Locator::positional(3).with_anchor(&NATIONAL_ID_HEADER).with_skip(1),
                    Normalizer::IdNumber(IdKind::National),
                ),
            ],
            tax_id: vec![
                FieldSpec::new(
                    "Name",
                    Locator::positional(0).with_anchor(&TAX_ID_HEADER).with_skip(1),
                    Normalizer::Name,
                ),
                FieldSpec::new(
                    "Father Name",
                    Locator::positional(2).with_anchor(&TAX_ID_HEADER).with_skip(1),
                    Normalizer::Name,
                ),
                FieldSpec::new(
                    "Date of Birth",
                    Locator::positional(4).with_anchor(&TAX_ID_HEADER).with_skip(1),
                    Normalizer::Date,
                ),
                FieldSpec::new(
                    "PAN",
                    Locator::positional(6).with_anchor(&TAX_ID_HEADER).with_skip(1),
                    Normalizer::IdNumber(IdKind::Tax),
                ),
            ],
            unknown: unknown_fields(),
        }
    }
}

// No layout is known for unclassified text; only label-driven search applies.
fn unknown_fields() -> Vec<FieldSpec> {
    vec![
        FieldSpec::new("Name", Locator::keyword("Name"), Normalizer::Name),
        FieldSpec::new("Date of Birth", Locator::keyword("Birth"), Normalizer::Date),
        FieldSpec::new(
            "Gender",
            Locator::pattern(&GENDER_WORD),
            Normalizer::Gender(GenderStyle::Word),
        ),
        FieldSpec::new(
            "Number",
            Locator::pattern(&ANY_ID_NUMBER),
            Normalizer::IdNumber(IdKind::Any),
        ),
    ]
}

lazy_static! {
    static ref ANCHORED: FieldRegistry = FieldRegistry::anchored();
    static ref FIXED: FieldRegistry = FieldRegistry::fixed();
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_TYPES: [DocumentType; 4] = [
        DocumentType::Passport,
        DocumentType::NationalId,
        DocumentType::TaxId,
        DocumentType::Unknown,
    ];

    #[test]
    fn test_layouts_share_field_names() {
        let anchored = FieldRegistry::for_layout(LayoutProfile::Anchored);
        let fixed = FieldRegistry::for_layout(LayoutProfile::Fixed);

        for document_type in ALL_TYPES {
            assert_eq!(
                anchored.field_names(document_type),
                fixed.field_names(document_type),
                "{document_type}"
            );
        }
    }

    #[test]
    fn test_field_names() {
        let registry = FieldRegistry::for_layout(LayoutProfile::Anchored);
        assert_eq!(
            registry.field_names(DocumentType::Passport),
            vec!["Surname", "First Name", "Date of Birth", "Gender", "Number", "Date of Expiry"]
        );
        assert_eq!(
            registry.field_names(DocumentType::TaxId),
            vec!["Name", "Father Name", "Date of Birth", "PAN"]
        );
        assert_eq!(
            registry.field_names(DocumentType::NationalId),
            vec!["Year of Birth", "Gender", "Aadhar"]
        );
        assert_eq!(
            registry.field_names(DocumentType::Unknown),
            vec!["Name", "Date of Birth", "Gender", "Number"]
        );
    }

    #[test]
    fn test_only_passport_gender_defaults() {
        for layout in [LayoutProfile::Anchored, LayoutProfile::Fixed] {
            let registry = FieldRegistry::for_layout(layout);
            for document_type in ALL_TYPES {
                for spec in registry.fields(document_type) {
                    let expected = document_type == DocumentType::Passport && spec.name == "Gender";
                    assert_eq!(spec.fallback == Fallback::DefaultGender, expected);
                }
            }
        }
    }
}
