use super::{ContactEmail, ContactFields, FullName, MessageBody, PhoneNumber, Subject};

/// A contact request whose every field has been validated.
#[derive(Debug, Clone)]
pub struct ContactSubmission {
    pub full_name: FullName,
    pub email: ContactEmail,
    pub phone_number: PhoneNumber,
    pub subject: Subject,
    pub message: MessageBody,
}

/// Why a submission was refused. The `Display` output is what the submitter gets to see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ContactSubmissionError {
    #[error("All fields are required")]
    MissingFields,
    #[error("Invalid email format")]
    InvalidEmail,
    #[error("Invalid phone number format")]
    InvalidPhoneNumber,
    #[error("Message must be at least 10 characters long")]
    MessageTooShort,
}

impl ContactSubmission {
    /// Validates the raw fields, stopping at the first failure. Checks run in a fixed
    /// order: presence of every field, then email, phone number and message length.
    pub fn parse(fields: ContactFields) -> Result<ContactSubmission, ContactSubmissionError> {
        let ContactFields {
            full_name,
            email,
            phone_number,
            subject,
            message,
        } = fields;

        // Name and subject only need to be present, so parsing them is the presence check
        let full_name = FullName::parse(full_name)?;
        let subject = Subject::parse(subject)?;
        if [&email, &phone_number, &message]
            .iter()
            .any(|value| value.is_empty())
        {
            return Err(ContactSubmissionError::MissingFields);
        }

        Ok(Self {
            full_name,
            email: ContactEmail::parse(email)?,
            phone_number: PhoneNumber::parse(phone_number)?,
            subject,
            message: MessageBody::parse(message)?,
        })
    }

    /// The submitted values, exactly as they were typed.
    pub fn to_fields(&self) -> ContactFields {
        ContactFields {
            full_name: self.full_name.as_ref().to_owned(),
            email: self.email.as_ref().to_owned(),
            phone_number: self.phone_number.as_ref().to_owned(),
            subject: self.subject.as_ref().to_owned(),
            message: self.message.as_ref().to_owned(),
        }
    }
}

impl TryFrom<ContactFields> for ContactSubmission {
    type Error = ContactSubmissionError;

    fn try_from(value: ContactFields) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}
