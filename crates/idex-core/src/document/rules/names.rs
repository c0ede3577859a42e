//! Alphabetic name normalization.

use super::FieldNormalizer;

/// Name normalizer: letters and single spaces only.
#[derive(Debug, Clone, Copy, Default)]
pub struct NameNormalizer;

impl FieldNormalizer for NameNormalizer {
    fn normalize(&self, candidate: &str) -> Option<String> {
        normalize_name(candidate)
    }
}

/// Strip everything but ASCII letters and whitespace, then collapse
/// whitespace runs. An empty result is rejected.
pub fn normalize_name(candidate: &str) -> Option<String> {
    let kept: String = candidate
        .chars()
        .filter(|c| c.is_ascii_alphabetic() || c.is_whitespace())
        .collect();

    let name = kept.split_whitespace().collect::<Vec<_>>().join(" ");
    if name.is_empty() { None } else { Some(name) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_name_unchanged() {
        assert_eq!(normalize_name("JOHN SMITH"), Some("JOHN SMITH".to_string()));
    }

    #[test]
    fn test_strips_noise_and_collapses_spaces() {
        assert_eq!(normalize_name("  RAHUL   KUMAR. "), Some("RAHUL KUMAR".to_string()));
        assert_eq!(normalize_name("|SHARMA 7"), Some("SHARMA".to_string()));
        assert_eq!(normalize_name("D'SOUZA"), Some("DSOUZA".to_string()));
    }

    #[test]
    fn test_nothing_alphabetic_is_rejected() {
        assert_eq!(normalize_name("01/02/1990"), None);
        assert_eq!(normalize_name(" -- "), None);
        assert_eq!(normalize_name(""), None);
    }
}
