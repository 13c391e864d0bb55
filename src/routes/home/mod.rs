use std::sync::LazyLock;

use actix_web::{HttpResponse, http::header::ContentType};

use crate::contact_form::{
    EMAIL_INVALID, FULL_NAME_REQUIRED, MESSAGE_TOO_SHORT, PHONE_INVALID, SEND_FAILED_ALERT,
    SUBJECT_REQUIRED,
};
use crate::domain::{EMAIL_PATTERN, MIN_MESSAGE_LENGTH, PHONE_INPUT_PATTERN};

// Native form constraints are rendered from the same rules the server enforces
static HOME_PAGE: LazyLock<String> = LazyLock::new(|| {
    include_str!("home.html")
        .replace("{email_pattern}", EMAIL_PATTERN)
        .replace("{phone_pattern}", PHONE_INPUT_PATTERN)
        .replace("{message_min_length}", &MIN_MESSAGE_LENGTH.to_string())
        .replace("{full_name_required}", FULL_NAME_REQUIRED)
        .replace("{email_invalid}", EMAIL_INVALID)
        .replace("{phone_invalid}", PHONE_INVALID)
        .replace("{subject_required}", SUBJECT_REQUIRED)
        .replace("{message_too_short}", MESSAGE_TOO_SHORT)
        .replace("{send_failed}", SEND_FAILED_ALERT)
});

pub async fn home() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(HOME_PAGE.as_str())
}
