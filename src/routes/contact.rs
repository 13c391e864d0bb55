use actix_web::{HttpResponse, ResponseError, http::StatusCode, web};
use anyhow::anyhow;
use serde_json::Value;

use crate::{
    domain::{ContactField, ContactFields, ContactSubmission, ContactSubmissionError},
    notification::format_notification,
    routes::error_chain_fmt,
    startup::ApplicationSiteName,
    telegram_client::{TelegramClient, TelegramError},
};

/// The request body as received. Any JSON value is accepted: fields are looked up by
/// name, and anything that is not a non-empty string is treated as a missing field.
#[derive(serde::Deserialize)]
#[serde(transparent)]
pub struct ContactRequest(Value);

impl TryFrom<ContactRequest> for ContactFields {
    type Error = anyhow::Error;

    fn try_from(value: ContactRequest) -> Result<Self, Self::Error> {
        let body = value.0;
        // There is nothing to look fields up in
        if body.is_null() {
            return Err(anyhow!("The request body is `null`"));
        }
        let mut fields = ContactFields::default();
        for field in ContactField::ALL {
            if let Some(Value::String(s)) = body.get(field.as_str()) {
                fields.set(field, s.clone());
            }
        }
        Ok(fields)
    }
}

#[derive(thiserror::Error)]
pub enum ContactError {
    #[error(transparent)]
    ValidationError(#[from] ContactSubmissionError),
    #[error("Failed to send message to Telegram")]
    DeliveryError(#[source] TelegramError),
    #[error("Internal server error")]
    UnexpectedError(#[source] anyhow::Error),
}

impl std::fmt::Debug for ContactError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl From<TelegramError> for ContactError {
    fn from(e: TelegramError) -> Self {
        match e {
            TelegramError::Rejected { .. } => ContactError::DeliveryError(e),
            TelegramError::Transport(_) => ContactError::UnexpectedError(anyhow::Error::new(e)),
        }
    }
}

#[derive(serde::Serialize)]
struct ErrorBody {
    error: String,
}

impl ResponseError for ContactError {
    fn status_code(&self) -> StatusCode {
        match self {
            ContactError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ContactError::DeliveryError(_) | ContactError::UnexpectedError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    // `Display` never includes the cause, so nothing internal reaches the caller
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.to_string(),
        })
    }
}

/// Extractor configuration for [`submit_contact`]: the body is parsed regardless of its
/// content type, and a body that is not valid JSON ends up as an unexpected error.
pub fn contact_json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(|err, _req| {
            ContactError::UnexpectedError(anyhow!("Failed to parse the request body: {}", err))
                .into()
        })
}

/// Validates a contact form submission and relays it to the configured Telegram chat.
#[tracing::instrument(
    name = "Relaying a contact submission",
    skip(body, telegram_client, site_name),
    fields(
        submitter_email = tracing::field::Empty,
        submission_subject = tracing::field::Empty
    )
)]
pub async fn submit_contact(
    body: web::Json<ContactRequest>,
    telegram_client: web::Data<TelegramClient>,
    site_name: web::Data<ApplicationSiteName>,
) -> Result<HttpResponse, ContactError> {
    let fields =
        ContactFields::try_from(body.into_inner()).map_err(ContactError::UnexpectedError)?;
    let submission = ContactSubmission::try_from(fields)
        .inspect_err(|e| tracing::info!(reason = %e, "Rejected an invalid submission"))?;

    let span = tracing::Span::current();
    span.record("submitter_email", tracing::field::display(&submission.email));
    span.record(
        "submission_subject",
        tracing::field::display(submission.subject.as_ref()),
    );

    let text = format_notification(&submission, &site_name.0);
    telegram_client.send_message(&text).await.map_err(|e| {
        tracing::error!(error.cause_chain = ?e, "Failed to relay the submission to Telegram");
        ContactError::from(e)
    })?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "message": "Message sent successfully" })))
}
