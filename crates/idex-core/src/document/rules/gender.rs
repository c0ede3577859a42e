//! Gender normalization.

use super::FieldNormalizer;
use crate::models::record::Gender;

/// How a document prints gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenderStyle {
    /// `M` / `F`
    Letter,
    /// `Male` / `Female`
    Word,
}

impl GenderStyle {
    pub fn render(&self, gender: Gender) -> &'static str {
        match self {
            Self::Letter => gender.letter(),
            Self::Word => gender.word(),
        }
    }
}

/// Gender normalizer for one printing style.
#[derive(Debug, Clone, Copy)]
pub struct GenderNormalizer {
    style: GenderStyle,
}

impl GenderNormalizer {
    pub fn new(style: GenderStyle) -> Self {
        Self { style }
    }
}

impl FieldNormalizer for GenderNormalizer {
    fn normalize(&self, candidate: &str) -> Option<String> {
        parse_gender(candidate).map(|g| self.style.render(g).to_string())
    }
}

/// Parse `M`, `F`, `Male` or `Female`, ignoring case and surrounding space.
pub fn parse_gender(candidate: &str) -> Option<Gender> {
    match candidate.trim().to_lowercase().as_str() {
        "m" | "male" => Some(Gender::Male),
        "f" | "female" => Some(Gender::Female),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_gender() {
        assert_eq!(parse_gender("m"), Some(Gender::Male));
        assert_eq!(parse_gender(" F "), Some(Gender::Female));
        assert_eq!(parse_gender("FEMALE"), Some(Gender::Female));
        assert_eq!(parse_gender("Male"), Some(Gender::Male));
        assert_eq!(parse_gender("X"), None);
        assert_eq!(parse_gender("MF"), None);
        assert_eq!(parse_gender(""), None);
    }

    #[test]
    fn test_styles() {
        let letter = GenderNormalizer::new(GenderStyle::Letter);
        let word = GenderNormalizer::new(GenderStyle::Word);

        assert_eq!(letter.normalize("female"), Some("F".to_string()));
        assert_eq!(letter.normalize("m"), Some("M".to_string()));
        assert_eq!(word.normalize("MALE"), Some("Male".to_string()));
        assert_eq!(word.normalize("f"), Some("Female".to_string()));
        assert_eq!(word.normalize("Sex"), None);
    }
}
