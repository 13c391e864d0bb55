/// The five contact form fields as typed, before any validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactFields {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub subject: String,
    pub message: String,
}

/// Identifies one of the [`ContactFields`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    FullName,
    Email,
    PhoneNumber,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 5] = [
        ContactField::FullName,
        ContactField::Email,
        ContactField::PhoneNumber,
        ContactField::Subject,
        ContactField::Message,
    ];

    /// The JSON key and form input name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactField::FullName => "fullName",
            ContactField::Email => "email",
            ContactField::PhoneNumber => "phoneNumber",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
        }
    }
}

impl ContactFields {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::FullName => &self.full_name,
            ContactField::Email => &self.email,
            ContactField::PhoneNumber => &self.phone_number,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        let slot = match field {
            ContactField::FullName => &mut self.full_name,
            ContactField::Email => &mut self.email,
            ContactField::PhoneNumber => &mut self.phone_number,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        };
        *slot = value;
    }
}
