//! Rule-based locators and normalizers for identity document fields.

pub mod dates;
pub mod gender;
pub mod identifiers;
pub mod locators;
pub mod names;
pub mod patterns;

pub use dates::{normalize_date, parse_date, DateNormalizer};
pub use gender::{parse_gender, GenderNormalizer, GenderStyle};
pub use identifiers::{
    normalize_national_id, normalize_passport_number, normalize_tax_id, IdKind,
    IdNumberNormalizer,
};
pub use locators::{KeywordLocator, Locator, PatternLocator, PositionalLocator};
pub use names::{normalize_name, NameNormalizer};

use super::LineSequence;

/// Finds a raw candidate for a field within a line sequence.
pub trait FieldLocator {
    /// The candidate text, or `None` when nothing matches.
    fn locate<'a>(&self, lines: &'a LineSequence) -> Option<&'a str>;
}

/// Accepts and reshapes a candidate into canonical form, or rejects it.
pub trait FieldNormalizer {
    /// The canonical value, or `None` when the candidate fails the grammar.
    fn normalize(&self, candidate: &str) -> Option<String>;
}

/// A field grammar, as configured in a field spec.
#[derive(Debug, Clone, Copy)]
pub enum Normalizer {
    Name,
    Date,
    Gender(GenderStyle),
    IdNumber(IdKind),
}

impl FieldNormalizer for Normalizer {
    fn normalize(&self, candidate: &str) -> Option<String> {
        match *self {
            Self::Name => NameNormalizer.normalize(candidate),
            Self::Date => DateNormalizer.normalize(candidate),
            Self::Gender(style) => GenderNormalizer::new(style).normalize(candidate),
            Self::IdNumber(kind) => IdNumberNormalizer::new(kind).normalize(candidate),
        }
    }
}
