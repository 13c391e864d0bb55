use std::sync::LazyLock;

use regex::Regex;

use super::{ContactSubmissionError, is_form_whitespace};

/// A `+`, a 1-3 digit country code and a 6-14 digit subscriber number.
/// Applied after all whitespace has been removed.
pub const PHONE_PATTERN: &str = r"\+[0-9]{1,3}[0-9]{6,14}";

/// [`PHONE_PATTERN`] for the raw, unstripped input of a browser form field.
pub const PHONE_INPUT_PATTERN: &str = r"\s*\+\s*([0-9]\s*){7,17}";

static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^{}$", PHONE_PATTERN)).expect("PHONE_PATTERN is a valid regex")
});

/// A phone number as the submitter typed it. Only the whitespace-free form is
/// validated; the original spacing is kept for display.
#[derive(Debug, Clone)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn parse(s: String) -> Result<PhoneNumber, ContactSubmissionError> {
        let compact: String = s.chars().filter(|c| !is_form_whitespace(*c)).collect();
        if PHONE_REGEX.is_match(&compact) {
            Ok(Self(s))
        } else {
            Err(ContactSubmissionError::InvalidPhoneNumber)
        }
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
