//! Line normalization of raw OCR text.

/// Ordered, cleaned lines derived from raw OCR text.
///
/// No element is empty or whitespace-only, and reading order is preserved;
/// positional locators index into it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineSequence {
    lines: Vec<String>,
}

impl LineSequence {
    /// Split raw text into trimmed, non-empty lines.
    pub fn from_text(text: &str) -> Self {
        let lines = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect();

        Self { lines }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Line at zero-based `index`.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.lines.iter().map(String::as_str)
    }

    /// Index of the first line satisfying `predicate`.
    pub fn position(&self, predicate: impl Fn(&str) -> bool) -> Option<usize> {
        self.iter().position(predicate)
    }
}

impl From<&str> for LineSequence {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}
