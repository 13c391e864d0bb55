use super::{ContactSubmissionError, trim_form_text};

/// Minimum length of the trimmed message, in UTF-16 code units like a browser counts it.
pub const MIN_MESSAGE_LENGTH: usize = 10;

#[derive(Debug, Clone)]
pub struct MessageBody(String);

impl MessageBody {
    /// Returns an instance of `MessageBody` if the message, once trimmed, is at least
    /// [`MIN_MESSAGE_LENGTH`] UTF-16 code units long. The body itself is kept untrimmed.
    pub fn parse(s: String) -> Result<MessageBody, ContactSubmissionError> {
        if trim_form_text(&s).encode_utf16().count() < MIN_MESSAGE_LENGTH {
            Err(ContactSubmissionError::MessageTooShort)
        } else {
            Ok(Self(s))
        }
    }
}

impl AsRef<str> for MessageBody {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
