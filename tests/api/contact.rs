use contact_relay::contact_form::{ContactApiClient, ContactForm, FormState};
use contact_relay::domain::ContactField;
use serde_json::json;
use wiremock::{
    Mock, ResponseTemplate,
    matchers::{any, method, path},
};

use crate::helpers::{TEST_CHAT_ID, TestApp, spawn_app, valid_body};

async fn mock_telegram_success(app: &TestApp, times: u64) {
    Mock::given(path(app.send_message_path()))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .expect(times)
        .mount(&app.telegram_server)
        .await;
}

async fn assert_error(response: reqwest::Response, status: u16, error: &str) {
    assert_eq!(status, response.status().as_u16());
    let body: serde_json::Value = response.json().await.expect("Response was not JSON");
    assert_eq!(json!({ "error": error }), body);
}

#[tokio::test]
async fn contact_returns_a_200_for_valid_data() {
    // Arrange
    let app = spawn_app().await;
    mock_telegram_success(&app, 1).await;

    // Act
    let response = app.post_contact(&valid_body()).await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(json!({ "message": "Message sent successfully" }), body);
}

#[tokio::test]
async fn contact_relays_every_field_to_the_configured_chat() {
    // Arrange
    let app = spawn_app().await;
    mock_telegram_success(&app, 1).await;
    let body = valid_body();

    // Act
    app.post_contact(&body).await;

    // Assert
    let requests = app.telegram_requests().await;
    let sent = &requests[0];
    assert_eq!(sent["chat_id"], TEST_CHAT_ID);
    assert_eq!(sent["parse_mode"], "Markdown");
    let text = sent["text"].as_str().unwrap();
    for field in ["fullName", "email", "phoneNumber", "subject", "message"] {
        let value = body[field].as_str().unwrap();
        assert!(
            text.contains(value),
            "The notification does not contain the {}: {}",
            field,
            text
        );
    }
    assert!(text.starts_with("🔔 *New Contact Form Submission*"));
    assert!(text.ends_with("Sent from Contact Marc Website"));
}

#[tokio::test]
async fn identical_submissions_are_delivered_twice() {
    // Arrange
    let app = spawn_app().await;
    mock_telegram_success(&app, 2).await;

    // Act
    let response_1 = app.post_contact(&valid_body()).await;
    let response_2 = app.post_contact(&valid_body()).await;

    // Assert
    assert_eq!(200, response_1.status().as_u16());
    assert_eq!(200, response_2.status().as_u16());
    let requests = app.telegram_requests().await;
    assert_eq!(requests[0], requests[1]);
}

#[tokio::test]
async fn contact_returns_a_400_when_a_field_is_missing() {
    // Arrange
    let app = spawn_app().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.telegram_server)
        .await;

    for field in ["fullName", "email", "phoneNumber", "subject", "message"] {
        let mut without = valid_body();
        without.as_object_mut().unwrap().remove(field);
        let mut empty = valid_body();
        empty[field] = json!("");
        let mut null = valid_body();
        null[field] = json!(null);
        let mut not_text = valid_body();
        not_text[field] = json!(12345678901234_u64);

        for body in [without, empty, null, not_text] {
            // Act
            let response = app.post_contact(&body).await;

            // Assert
            assert_error(response, 400, "All fields are required").await;
        }
    }
}

#[tokio::test]
async fn contact_returns_a_400_for_an_empty_object() {
    let app = spawn_app().await;

    let response = app.post_contact(&json!({})).await;

    assert_error(response, 400, "All fields are required").await;
}

#[tokio::test]
async fn contact_returns_a_400_for_an_invalid_email() {
    // Arrange
    let app = spawn_app().await;
    let test_cases = vec![
        ("definitely-not-an-email", "no @"),
        ("ursula@localhost", "no dot in the domain"),
        ("ursula le guin@gmail.com", "whitespace"),
        ("@gmail.com", "no local part"),
    ];

    for (email, description) in test_cases {
        let mut body = valid_body();
        body["email"] = json!(email);

        // Act
        let response = app.post_contact(&body).await;

        // Assert
        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not return a 400 Bad Request when the email had {}.",
            description
        );
        assert_error(response, 400, "Invalid email format").await;
    }
}

#[tokio::test]
async fn contact_returns_a_400_for_an_invalid_phone_number() {
    // Arrange
    let app = spawn_app().await;
    let test_cases = vec![
        ("4155551234", "missing the +"),
        ("+123456", "too few digits"),
        ("+1 (415) 555-1234", "punctuation"),
        ("+1415555123456789012", "too many digits"),
    ];

    for (phone, description) in test_cases {
        let mut body = valid_body();
        body["phoneNumber"] = json!(phone);

        // Act
        let response = app.post_contact(&body).await;

        // Assert
        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not return a 400 Bad Request when the phone number had {}.",
            description
        );
        assert_error(response, 400, "Invalid phone number format").await;
    }
}

#[tokio::test]
async fn contact_accepts_phone_numbers_with_spaces() {
    let app = spawn_app().await;
    mock_telegram_success(&app, 1).await;
    let mut body = valid_body();
    body["phoneNumber"] = json!("+1 415 555 1234");

    let response = app.post_contact(&body).await;

    assert_eq!(200, response.status().as_u16());
    let requests = app.telegram_requests().await;
    // The number is relayed the way it was typed
    assert!(requests[0]["text"].as_str().unwrap().contains("+1 415 555 1234"));
}

#[tokio::test]
async fn contact_enforces_the_minimum_message_length_after_trimming() {
    // Arrange
    let app = spawn_app().await;
    mock_telegram_success(&app, 1).await;

    let mut too_short = valid_body();
    too_short["message"] = json!("   123456789   ");
    let mut exactly_ten = valid_body();
    exactly_ten["message"] = json!("   1234567890   ");

    // Act
    let rejected = app.post_contact(&too_short).await;
    let accepted = app.post_contact(&exactly_ten).await;

    // Assert
    assert_error(rejected, 400, "Message must be at least 10 characters long").await;
    assert_eq!(200, accepted.status().as_u16());
}

#[tokio::test]
async fn validation_failures_are_reported_in_order() {
    // Arrange
    let app = spawn_app().await;
    let everything_wrong = json!({
        "fullName": "Ursula",
        "email": "nope",
        "phoneNumber": "nope",
        "subject": "Hi",
        "message": "short"
    });
    let phone_and_message_wrong = json!({
        "fullName": "Ursula",
        "email": "ursula@example.com",
        "phoneNumber": "nope",
        "subject": "Hi",
        "message": "short"
    });

    // Act & Assert
    assert_error(
        app.post_contact(&everything_wrong).await,
        400,
        "Invalid email format",
    )
    .await;
    assert_error(
        app.post_contact(&phone_and_message_wrong).await,
        400,
        "Invalid phone number format",
    )
    .await;
}

#[tokio::test]
async fn contact_returns_a_500_when_telegram_rejects_the_message() {
    // Arrange
    let app = spawn_app().await;
    Mock::given(path(app.send_message_path()))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "ok": false,
            "error_code": 400,
            "description": "Bad Request: chat not found"
        })))
        // A single attempt, no retries
        .expect(1)
        .mount(&app.telegram_server)
        .await;

    // Act
    let response = app.post_contact(&valid_body()).await;

    // Assert
    assert_error(response, 500, "Failed to send message to Telegram").await;
}

#[tokio::test]
async fn contact_returns_a_500_when_telegram_fails() {
    // Arrange
    let app = spawn_app().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&app.telegram_server)
        .await;

    // Act
    let response = app.post_contact(&valid_body()).await;

    // Assert
    assert_error(response, 500, "Failed to send message to Telegram").await;
}

#[tokio::test]
async fn contact_returns_a_generic_500_when_telegram_is_unreachable() {
    // Arrange
    let app = spawn_app().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_delay(std::time::Duration::from_secs(30)))
        .mount(&app.telegram_server)
        .await;

    // Act
    let response = app.post_contact(&valid_body()).await;

    // Assert
    assert_error(response, 500, "Internal server error").await;
}

#[tokio::test]
async fn malformed_bodies_get_a_generic_500() {
    // Arrange
    let app = spawn_app().await;
    let test_cases = vec![
        ("{\"fullName\": ", "truncated JSON"),
        ("not json at all", "plain text"),
        ("null", "null"),
    ];

    for (body, description) in test_cases {
        // Act
        let response = app.post_contact_raw(body).await;

        // Assert
        assert_eq!(
            500,
            response.status().as_u16(),
            "The API did not fail with 500 when the payload was {}",
            description
        );
        assert_error(response, 500, "Internal server error").await;
    }
}

#[tokio::test]
async fn json_bodies_without_fields_get_a_400() {
    // Arrange
    let app = spawn_app().await;
    let test_cases = vec![
        ("[1, 2, 3]", "an array"),
        ("\"hello\"", "a string"),
        ("42", "a number"),
    ];

    for (body, description) in test_cases {
        // Act
        let response = app.post_contact_raw(body).await;

        // Assert
        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not return a 400 Bad Request when the payload was {}",
            description
        );
        assert_error(response, 400, "All fields are required").await;
    }
}

#[tokio::test]
async fn contact_counts_message_length_in_utf16_code_units() {
    // Arrange
    let app = spawn_app().await;
    mock_telegram_success(&app, 1).await;
    let mut body = valid_body();
    body["message"] = json!("😀😀😀😀😀");

    // Act
    let response = app.post_contact(&body).await;

    // Assert
    assert_eq!(200, response.status().as_u16());
}

#[tokio::test]
async fn the_contact_form_client_round_trips_through_the_api() {
    // Arrange
    let app = spawn_app().await;
    mock_telegram_success(&app, 1).await;
    let client = ContactApiClient::new(app.address.clone());
    let mut form = ContactForm::new();
    form.set_field(ContactField::FullName, "Ursula Le Guin");
    form.set_field(ContactField::Email, "ursula@example.com");
    form.set_field(ContactField::PhoneNumber, "+44 20 7946 0958");
    form.set_field(ContactField::Subject, "Consulting");
    form.set_field(ContactField::Message, "Could we schedule a call next week?");

    // Act
    form.submit(&client).await.unwrap();

    // Assert
    assert_eq!(form.state(), FormState::Submitted);
    let requests = app.telegram_requests().await;
    assert_eq!(requests.len(), 1);
    assert!(requests[0]["text"].as_str().unwrap().contains("+44 20 7946 0958"));
}
