//! Text of the Telegram message sent for every accepted submission.

use crate::domain::ContactSubmission;

/// Renders `submission` with Telegram's legacy Markdown markup.
///
/// Submitted values are inserted verbatim.
pub fn format_notification(submission: &ContactSubmission, site_name: &str) -> String {
    format!(
        "🔔 *New Contact Form Submission*\n\
         \n\
         👤 *Full Name:* {full_name}\n\
         📧 *Email:* {email}\n\
         📱 *Phone:* {phone}\n\
         📋 *Subject:* {subject}\n\
         \n\
         💬 *Message:*\n\
         {message}\n\
         \n\
         ---\n\
         Sent from {site_name}",
        full_name = submission.full_name.as_ref(),
        email = submission.email.as_ref(),
        phone = submission.phone_number.as_ref(),
        subject = submission.subject.as_ref(),
        message = submission.message.as_ref(),
    )
    .trim()
    .to_owned()
}
