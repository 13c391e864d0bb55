//! Client side of the contact form: field-level feedback, the editing / submitting /
//! submitted states, and a small HTTP client for `POST /api/contact`.

use std::collections::HashMap;

use crate::domain::{
    ContactEmail, ContactField, ContactFields, ContactSubmission, MessageBody, PhoneNumber,
    trim_form_text,
};

pub const FULL_NAME_REQUIRED: &str = "Full name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";
pub const PHONE_REQUIRED: &str = "Phone number is required";
pub const PHONE_INVALID: &str =
    "Please enter a valid phone number with country code (e.g., +1234567890)";
pub const SUBJECT_REQUIRED: &str = "Subject is required";
pub const MESSAGE_REQUIRED: &str = "Message is required";
pub const MESSAGE_TOO_SHORT: &str = "Message must be at least 10 characters long";
pub const SEND_FAILED_ALERT: &str = "Failed to send message. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Editing,
    /// A request is in flight; further submits are refused.
    Submitting,
    /// The last submission was delivered. The form stays here until `send_another`.
    Submitted,
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum FormError {
    #[error("A submission is already in progress")]
    AlreadySubmitting,
    #[error("The form has already been submitted")]
    AlreadySubmitted,
    #[error("Some fields are invalid")]
    Invalid,
}

#[derive(Debug)]
pub struct ContactForm {
    fields: ContactFields,
    errors: HashMap<ContactField, &'static str>,
    state: FormState,
    alert: Option<&'static str>,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            fields: ContactFields::default(),
            errors: HashMap::new(),
            state: FormState::Editing,
            alert: None,
        }
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn error(&self, field: ContactField) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    /// Message to surface after a failed submission, if any.
    pub fn alert(&self) -> Option<&'static str> {
        self.alert
    }

    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        self.fields.set(field, value.into());
        self.errors.remove(&field);
    }

    /// Checks every field and records a message for each one that fails.
    /// Returns `true` when there is nothing to report.
    pub fn validate(&mut self) -> bool {
        self.errors = ContactField::ALL
            .into_iter()
            .filter_map(|field| field_error(field, self.fields.get(field)).map(|e| (field, e)))
            .collect();
        self.errors.is_empty()
    }

    /// Moves to `Submitting` and hands back the submission to send.
    pub fn begin_submit(&mut self) -> Result<ContactSubmission, FormError> {
        match self.state {
            FormState::Editing => {}
            FormState::Submitting => return Err(FormError::AlreadySubmitting),
            FormState::Submitted => return Err(FormError::AlreadySubmitted),
        }
        if !self.validate() {
            return Err(FormError::Invalid);
        }
        let submission =
            ContactSubmission::parse(self.fields.clone()).map_err(|_| FormError::Invalid)?;
        self.alert = None;
        self.state = FormState::Submitting;
        Ok(submission)
    }

    /// Records the result of the request started by `begin_submit`.
    /// On failure the input is kept so that the user can try again.
    pub fn finish_submit(&mut self, delivered: bool) {
        if self.state != FormState::Submitting {
            return;
        }
        if delivered {
            self.fields = ContactFields::default();
            self.errors.clear();
            self.state = FormState::Submitted;
        } else {
            self.alert = Some(SEND_FAILED_ALERT);
            self.state = FormState::Editing;
        }
    }

    pub fn send_another(&mut self) {
        if self.state == FormState::Submitted {
            self.state = FormState::Editing;
        }
    }

    /// Validates, sends and records the outcome in one go.
    pub async fn submit(&mut self, client: &ContactApiClient) -> Result<(), FormError> {
        let submission = self.begin_submit()?;
        let delivered = match client.submit(&submission).await {
            Ok(outcome) => outcome == SubmitOutcome::Sent,
            Err(e) => {
                tracing::warn!(error.cause_chain = ?e, "Failed to reach the contact endpoint");
                false
            }
        };
        self.finish_submit(delivered);
        Ok(())
    }
}

fn field_error(field: ContactField, value: &str) -> Option<&'static str> {
    let blank = trim_form_text(value).is_empty();
    let value = value.to_owned();
    match field {
        ContactField::FullName if blank => Some(FULL_NAME_REQUIRED),
        ContactField::Email if blank => Some(EMAIL_REQUIRED),
        ContactField::Email => ContactEmail::parse(value).err().map(|_| EMAIL_INVALID),
        ContactField::PhoneNumber if blank => Some(PHONE_REQUIRED),
        ContactField::PhoneNumber => PhoneNumber::parse(value).err().map(|_| PHONE_INVALID),
        ContactField::Subject if blank => Some(SUBJECT_REQUIRED),
        ContactField::Message if blank => Some(MESSAGE_REQUIRED),
        ContactField::Message => MessageBody::parse(value).err().map(|_| MESSAGE_TOO_SHORT),
        ContactField::FullName | ContactField::Subject => None,
    }
}

/// What the contact endpoint made of a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent,
    Rejected { status: u16, error: String },
}

#[derive(serde::Deserialize)]
struct ErrorReply {
    error: Option<String>,
}

pub struct ContactApiClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl ContactApiClient {
    pub fn new(base_url: String) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url,
        }
    }

    #[tracing::instrument(name = "Submitting the contact form", skip(self, submission))]
    pub async fn submit(
        &self,
        submission: &ContactSubmission,
    ) -> Result<SubmitOutcome, reqwest::Error> {
        let url = format!("{}/api/contact", self.base_url.trim_end_matches('/'));
        let response = self
            .http_client
            .post(&url)
            .json(&submission.to_fields())
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(SubmitOutcome::Sent);
        }
        let error = response
            .json::<ErrorReply>()
            .await
            .ok()
            .and_then(|reply| reply.error)
            .unwrap_or_default();
        Ok(SubmitOutcome::Rejected {
            status: status.as_u16(),
            error,
        })
    }
}
