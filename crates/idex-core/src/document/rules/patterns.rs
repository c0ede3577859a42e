//! Common regex patterns for identity document extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Classifier signatures, evaluated in this order
    pub static ref NATIONAL_ID_SIGNATURE: Regex = Regex::new(
        r"\b\d{4} \d{4} \d{4}\b"
    ).unwrap();

    pub static ref TAX_ID_SIGNATURE: Regex = Regex::new(
        r"\b[A-Z]{5}\d{4}[A-Z]\b"
    ).unwrap();

    pub static ref PASSPORT_SIGNATURE: Regex = Regex::new(
        r"\b[A-Z]{1,2}\d{7}\b"
    ).unwrap();

    // National ID (Aadhaar) number: XXXX XXXX XXXX
    pub static ref NATIONAL_ID_NUMBER: Regex = Regex::new(
        r"\d{4}\s\d{4}\s\d{4}"
    ).unwrap();

    pub static ref NATIONAL_ID_FORMAT: Regex = Regex::new(
        r"^\d{4} \d{4} \d{4}$"
    ).unwrap();

    // Tax ID (PAN): AAAAA9999A
    pub static ref TAX_ID_FORMAT: Regex = Regex::new(
        r"^[A-Z]{5}\d{4}[A-Z]$"
    ).unwrap();

    // Passport number: one or two letters, seven digits
    pub static ref PASSPORT_NUMBER: Regex = Regex::new(
        r"\b[A-Z]{1,2}\d{7}\b"
    ).unwrap();

    pub static ref PASSPORT_FORMAT: Regex = Regex::new(
        r"^[A-Z]{1,2}\d{7}$"
    ).unwrap();

    // Any of the three identifier grammars
    pub static ref ANY_ID_NUMBER: Regex = Regex::new(
        r"\b(?:\d{4} \d{4} \d{4}|[A-Z]{5}\d{4}[A-Z]|[A-Z]{1,2}\d{7})\b"
    ).unwrap();

    // Dates
    pub static ref DATE_DMY: Regex = Regex::new(
        r"\b\d{2}/\d{2}/\d{4}\b"
    ).unwrap();

    pub static ref DATE_CANONICAL: Regex = Regex::new(
        r"^\d{2}/\d{2}/\d{4}$"
    ).unwrap();

    pub static ref YEAR_ONLY: Regex = Regex::new(
        r"^\d{4}$"
    ).unwrap();

    // Aadhaar cards print either a birth year or a full date
    pub static ref BIRTH_YEAR_OR_DATE: Regex = Regex::new(
        r"\d{4}|\d{2}/\d{2}/\d{4}"
    ).unwrap();

    // Gender printed as a word
    pub static ref GENDER_WORD: Regex = Regex::new(
        r"(?i)\b(?:male|female)\b"
    ).unwrap();

    // Header lines that precede the holder's details
    pub static ref TAX_ID_HEADER: Regex = Regex::new(
        r"INCOMETAXDEPARTMENT|INCOME|TAX|GOVERNMENT|DEPARTMENT|INDIA"
    ).unwrap();

    pub static ref NATIONAL_ID_HEADER: Regex = Regex::new(
        r"GOVERNMENT|INDIA"
    ).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signatures_are_token_bounded() {
        assert!(PASSPORT_SIGNATURE.is_match("No. A1234567"));
        assert!(PASSPORT_SIGNATURE.is_match("AB1234567"));
        assert!(!PASSPORT_SIGNATURE.is_match("ABC1234567"));
        assert!(!PASSPORT_SIGNATURE.is_match("A12345678"));

        assert!(TAX_ID_SIGNATURE.is_match("ABCDE1234F"));
        assert!(!TAX_ID_SIGNATURE.is_match("XABCDE1234F"));

        assert!(NATIONAL_ID_SIGNATURE.is_match("1234 5678 9012"));
        assert!(!NATIONAL_ID_SIGNATURE.is_match("1234  5678 9012"));
    }

    #[test]
    fn test_birth_year_or_date_prefers_full_date_in_place() {
        let m = BIRTH_YEAR_OR_DATE.find("DOB: 01/02/1990").unwrap();
        assert_eq!(m.as_str(), "01/02/1990");

        let m = BIRTH_YEAR_OR_DATE.find("Year of Birth : 1987").unwrap();
        assert_eq!(m.as_str(), "1987");
    }
}
