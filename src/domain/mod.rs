mod contact_email;
mod contact_fields;
mod contact_submission;
mod message_body;
mod phone_number;
mod required_text;

pub use contact_email::{ContactEmail, EMAIL_PATTERN};
pub use contact_fields::{ContactField, ContactFields};
pub use contact_submission::{ContactSubmission, ContactSubmissionError};
pub use message_body::{MIN_MESSAGE_LENGTH, MessageBody};
pub use phone_number::{PHONE_INPUT_PATTERN, PHONE_PATTERN, PhoneNumber};
pub use required_text::{FullName, Subject};

/// Whitespace as browsers see it in form input: Unicode `White_Space` plus the
/// byte order mark.
pub fn is_form_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// `s` without leading and trailing [form whitespace](is_form_whitespace).
pub fn trim_form_text(s: &str) -> &str {
    s.trim_matches(is_form_whitespace)
}
