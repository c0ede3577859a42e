//! Field locator strategies.
//!
//! Every locator is a total function over a line sequence: when nothing
//! matches it returns `None`, never an error.

use regex::Regex;

use super::FieldLocator;
use crate::document::LineSequence;

/// Returns the line at a fixed offset from the start of the holder details.
///
/// The start is the first line after the run of consecutive `anchor` matches
/// (a header OCR split over several lines) when an anchor is configured and
/// present, otherwise `skip` lines from the top.
#[derive(Debug, Clone)]
pub struct PositionalLocator {
    anchor: Option<&'static Regex>,
    skip: usize,
    index: usize,
    tail: Option<usize>,
}

impl PositionalLocator {
    pub fn new(index: usize) -> Self {
        Self {
            anchor: None,
            skip: 0,
            index,
            tail: None,
        }
    }

    /// Skip a fixed number of header lines.
    pub fn with_skip(mut self, skip: usize) -> Self {
        self.skip = skip;
        self
    }

    /// Start counting after the first line matching `anchor`.
    pub fn with_anchor(mut self, anchor: &'static Regex) -> Self {
        self.anchor = Some(anchor);
        self
    }

    /// Keep only the last `chars` characters of the line.
    pub fn with_tail(mut self, chars: usize) -> Self {
        self.tail = Some(chars);
        self
    }

    fn start(&self, lines: &LineSequence) -> usize {
        self.anchor
            .and_then(|re| {
                let first = lines.position(|l| re.is_match(l))?;
                let run = lines.iter().skip(first).take_while(|l| re.is_match(l)).count();
                Some(first + run)
            })
            .unwrap_or(self.skip)
    }
}

impl FieldLocator for PositionalLocator {
    fn locate<'a>(&self, lines: &'a LineSequence) -> Option<&'a str> {
        let line = self
            .start(lines)
            .checked_add(self.index)
            .and_then(|i| lines.get(i))?;

        Some(match self.tail {
            Some(chars) => tail_chars(line, chars),
            None => line,
        })
    }
}

fn tail_chars(line: &str, chars: usize) -> &str {
    let count = line.chars().count();
    if count <= chars {
        return line;
    }
    line.char_indices()
        .nth(count - chars)
        .map(|(i, _)| &line[i..])
        .unwrap_or(line)
}

/// Returns the line following the first line containing a keyword.
#[derive(Debug, Clone)]
pub struct KeywordLocator {
    keyword: String,
}

impl KeywordLocator {
    pub fn new(keyword: &str) -> Self {
        Self {
            keyword: keyword.to_lowercase(),
        }
    }
}

impl FieldLocator for KeywordLocator {
    fn locate<'a>(&self, lines: &'a LineSequence) -> Option<&'a str> {
        let pos = lines.position(|l| l.to_lowercase().contains(&self.keyword))?;
        lines.get(pos + 1)
    }
}

/// Returns the matched text of the (skip+1)-th regex match in reading order.
#[derive(Debug, Clone)]
pub struct PatternLocator {
    pattern: &'static Regex,
    skip: usize,
}

impl PatternLocator {
    pub fn new(pattern: &'static Regex) -> Self {
        Self { pattern, skip: 0 }
    }

    /// Skip the first `skip` matches.
    pub fn with_skip(mut self, skip: usize) -> Self {
        self.skip = skip;
        self
    }
}

impl FieldLocator for PatternLocator {
    fn locate<'a>(&self, lines: &'a LineSequence) -> Option<&'a str> {
        let pattern = self.pattern;
        lines
            .iter()
            .flat_map(|line| pattern.find_iter(line))
            .nth(self.skip)
            .map(|m| m.as_str())
    }
}

/// A locator strategy, as configured in a field spec.
#[derive(Debug, Clone)]
pub enum Locator {
    Positional(PositionalLocator),
    Keyword(KeywordLocator),
    Pattern(PatternLocator),
}

impl Locator {
    pub fn positional(index: usize) -> PositionalLocator {
        PositionalLocator::new(index)
    }

    pub fn keyword(keyword: &str) -> Self {
        Self::Keyword(KeywordLocator::new(keyword))
    }

    pub fn pattern(pattern: &'static Regex) -> Self {
        Self::Pattern(PatternLocator::new(pattern))
    }

    pub fn nth_pattern(pattern: &'static Regex, skip: usize) -> Self {
        Self::Pattern(PatternLocator::new(pattern).with_skip(skip))
    }

    /// Short strategy name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Positional(_) => "positional",
            Self::Keyword(_) => "keyword",
            Self::Pattern(_) => "pattern",
        }
    }
}

impl From<PositionalLocator> for Locator {
    fn from(locator: PositionalLocator) -> Self {
        Self::Positional(locator)
    }
}

impl FieldLocator for Locator {
    fn locate<'a>(&self, lines: &'a LineSequence) -> Option<&'a str> {
        match self {
            Self::Positional(l) => l.locate(lines),
            Self::Keyword(l) => l.locate(lines),
            Self::Pattern(l) => l.locate(lines),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::rules::patterns::{DATE_DMY, TAX_ID_HEADER};

    fn lines(text: &str) -> LineSequence {
        LineSequence::from_text(text)
    }

    #[test]
    fn test_positional_with_skip() {
        let seq = lines("HEADER\nA\nB\nC");
        assert_eq!(PositionalLocator::new(0).with_skip(1).locate(&seq), Some("A"));
        assert_eq!(PositionalLocator::new(2).with_skip(1).locate(&seq), Some("C"));
        assert_eq!(PositionalLocator::new(3).with_skip(1).locate(&seq), None);
        assert_eq!(PositionalLocator::new(usize::MAX).with_skip(1).locate(&seq), None);
    }

    #[test]
    fn test_positional_anchor_and_fallback() {
        let seq = lines("noise\nINCOME TAX DEPARTMENT\nJOHN SMITH");
        let locator = PositionalLocator::new(0).with_anchor(&TAX_ID_HEADER).with_skip(1);
        assert_eq!(locator.locate(&seq), Some("JOHN SMITH"));

        // anchor absent: fall back to the fixed skip
        let seq = lines("noise\nJOHN SMITH");
        assert_eq!(locator.locate(&seq), Some("JOHN SMITH"));
    }

    #[test]
    fn test_positional_anchor_spans_split_header() {
        let seq = lines("INCOME TAX DEPARTMENT\nGOVT. OF INDIA\nJOHN SMITH\nROBERT SMITH");
        let locator = PositionalLocator::new(0).with_anchor(&TAX_ID_HEADER).with_skip(1);
        assert_eq!(locator.locate(&seq), Some("JOHN SMITH"));
        let locator = PositionalLocator::new(1).with_anchor(&TAX_ID_HEADER).with_skip(1);
        assert_eq!(locator.locate(&seq), Some("ROBERT SMITH"));
    }

    #[test]
    fn test_positional_tail() {
        let seq = lines("HEADER\nP IND A1234567");
        let locator = PositionalLocator::new(0).with_skip(1).with_tail(8);
        assert_eq!(locator.locate(&seq), Some("A1234567"));

        let seq = lines("HEADER\nA12");
        assert_eq!(locator.locate(&seq), Some("A12"));
    }

    #[test]
    fn test_tail_respects_char_boundaries() {
        assert_eq!(tail_chars("ÉÉÉabc", 4), "Éabc");
    }

    #[test]
    fn test_keyword_returns_next_line() {
        let seq = lines("Father's Name\nROBERT SMITH\nDate of Birth\n01/02/1990");
        assert_eq!(KeywordLocator::new("date of birth").locate(&seq), Some("01/02/1990"));
        assert_eq!(KeywordLocator::new("FATHER'S NAME").locate(&seq), Some("ROBERT SMITH"));
    }

    #[test]
    fn test_keyword_first_occurrence_wins() {
        let seq = lines("Name\nFIRST\nName\nSECOND");
        assert_eq!(KeywordLocator::new("name").locate(&seq), Some("FIRST"));
    }

    #[test]
    fn test_keyword_on_last_line_or_absent() {
        let seq = lines("JOHN SMITH\nDate of Birth");
        assert_eq!(KeywordLocator::new("Date of Birth").locate(&seq), None);
        assert_eq!(KeywordLocator::new("Expiry").locate(&seq), None);
        assert_eq!(KeywordLocator::new("Expiry").locate(&LineSequence::default()), None);
    }

    #[test]
    fn test_pattern_returns_matched_substring() {
        let seq = lines("DOB: 01/02/1990 M");
        assert_eq!(PatternLocator::new(&DATE_DMY).locate(&seq), Some("01/02/1990"));
    }

    #[test]
    fn test_pattern_skip_counts_in_reading_order() {
        let seq = lines("born 01/02/1990\nissued 05/06/2015 expires 04/06/2025\nnothing");
        let nth = |skip| PatternLocator::new(&DATE_DMY).with_skip(skip).locate(&seq);
        assert_eq!(nth(0), Some("01/02/1990"));
        assert_eq!(nth(1), Some("05/06/2015"));
        assert_eq!(nth(2), Some("04/06/2025"));
        assert_eq!(nth(3), None);
    }

    #[test]
    fn test_locator_dispatch() {
        let seq = lines("Sex\nF");
        let locator = Locator::keyword("sex");
        assert_eq!(locator.kind(), "keyword");
        assert_eq!(locator.locate(&seq), Some("F"));

        let locator: Locator = Locator::positional(1).into();
        assert_eq!(locator.locate(&seq), Some("F"));
    }
}
