use super::ContactSubmissionError;

fn parse_required(s: String) -> Result<String, ContactSubmissionError> {
    if s.is_empty() {
        Err(ContactSubmissionError::MissingFields)
    } else {
        Ok(s)
    }
}

#[derive(Debug, Clone)]
pub struct FullName(String);

impl FullName {
    pub fn parse(s: String) -> Result<FullName, ContactSubmissionError> {
        parse_required(s).map(Self)
    }
}

impl AsRef<str> for FullName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone)]
pub struct Subject(String);

impl Subject {
    pub fn parse(s: String) -> Result<Subject, ContactSubmissionError> {
        parse_required(s).map(Self)
    }
}

impl AsRef<str> for Subject {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
