use crate::helpers::{spawn_form, spawn_form_with_warmup, spawn_offline_form};
use article_submitter::controller::{FormState, SubmitReport};
use article_submitter::domain::{
    Field, FormInput, SubmissionOutcome, CONNECTIVITY_MESSAGE, GENERIC_REJECTION_MESSAGE,
};
use article_submitter::view::TriggerState;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

const EMAIL: &str = "a@b.com";
const ARTICLE_URL: &str = "https://site.com/article";

fn expected_body() -> serde_json::Value {
    serde_json::json!({ "email": EMAIL, "article_url": ARTICLE_URL })
}

#[tokio::test]
async fn accepted_submission_shows_session_id_and_clears_form() {
    let form = spawn_form().await;
    form.type_input(EMAIL, ARTICLE_URL);

    Mock::given(path("/submit"))
        .and(method("POST"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(expected_body()))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "session_id": "abc123",
            "forwarded": true,
        })))
        .expect(1)
        .mount(&form.endpoint)
        .await;

    let report = form.controller.handle_submit().await;

    assert_eq!(
        report,
        SubmitReport::Completed(SubmissionOutcome::Success {
            session_id: "abc123".to_string()
        })
    );
    assert_eq!(form.controller.state(), FormState::Succeeded);
    let screen = form.view().screen();
    assert_eq!(screen.panel.unwrap().session_id(), Some("abc123"));
    assert_eq!(screen.input, FormInput::default());
    assert_eq!(screen.trigger, Some(TriggerState::READY));
    assert!(!screen.progress_active);
}

#[tokio::test]
async fn rejected_submission_shows_server_detail_and_keeps_form() {
    let form = spawn_form().await;
    form.type_input(EMAIL, ARTICLE_URL);

    Mock::given(path("/submit"))
        .and(method("POST"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(serde_json::json!({ "detail": "Invalid URL" })),
        )
        .expect(1)
        .mount(&form.endpoint)
        .await;

    let report = form.controller.handle_submit().await;

    assert_eq!(
        report,
        SubmitReport::Completed(SubmissionOutcome::Failure {
            message: "Invalid URL".to_string()
        })
    );
    assert_eq!(form.controller.state(), FormState::Failed);
    let screen = form.view().screen();
    let panel = screen.panel.unwrap();
    assert_eq!(panel.heading(), "Submission Failed");
    assert_eq!(panel.message(), Some("Invalid URL"));
    assert_eq!(screen.input, FormInput::new(EMAIL, ARTICLE_URL));
    assert_eq!(screen.trigger, Some(TriggerState::READY));
    assert!(!screen.progress_active);
}

#[tokio::test]
async fn success_status_without_success_flag_is_generic_failure() {
    let form = spawn_form().await;
    form.type_input(EMAIL, ARTICLE_URL);

    Mock::given(path("/submit"))
        .and(method("POST"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "success": false })),
        )
        .expect(1)
        .mount(&form.endpoint)
        .await;

    let report = form.controller.handle_submit().await;

    assert_eq!(
        report,
        SubmitReport::Completed(SubmissionOutcome::Failure {
            message: GENERIC_REJECTION_MESSAGE.to_string()
        })
    );
    assert_eq!(form.controller.state(), FormState::Failed);
}

#[tokio::test]
async fn unreachable_endpoint_shows_connectivity_message() {
    let controller = spawn_offline_form();
    controller.view().type_input(EMAIL, ARTICLE_URL);

    let report = controller.handle_submit().await;

    assert_eq!(
        report,
        SubmitReport::Completed(SubmissionOutcome::NetworkError {
            message: CONNECTIVITY_MESSAGE.to_string()
        })
    );
    assert_eq!(controller.state(), FormState::Failed);
    let screen = controller.view().screen();
    assert_eq!(screen.panel.unwrap().message(), Some(CONNECTIVITY_MESSAGE));
    assert_eq!(screen.trigger, Some(TriggerState::READY));
    assert_eq!(screen.input, FormInput::new(EMAIL, ARTICLE_URL));
}

#[tokio::test]
async fn invalid_input_never_reaches_endpoint() {
    let form = spawn_form().await;
    form.type_input("not-an-email", "ftp://example.com");

    Mock::given(path("/submit"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&form.endpoint)
        .await;

    let report = form.controller.handle_submit().await;

    match report {
        SubmitReport::Invalid(result) => {
            assert!(!result.valid);
            assert!(result.email_error.is_some());
            assert!(result.url_error.is_some());
        }
        other => panic!("expected invalid report, got {:?}", other),
    }
    assert_eq!(form.controller.state(), FormState::Idle);
    let screen = form.view().screen();
    assert_eq!(
        screen.email_error.as_deref(),
        Some("Please enter a valid email address")
    );
    assert!(screen.url_error.is_some());
    assert!(screen.panel.is_none());
    assert!(!screen.trigger_history.contains(&TriggerState::BUSY));
}

#[tokio::test]
async fn typing_clears_only_that_fields_error() {
    let form = spawn_form().await;
    form.type_input("", "");

    form.controller.handle_submit().await;
    form.controller.on_field_input(Field::Email);

    let screen = form.view().screen();
    assert_eq!(screen.email_error, None);
    assert_eq!(screen.url_error.as_deref(), Some("Article URL is required"));
}

#[tokio::test]
async fn trigger_disabled_while_submitting() {
    let form = spawn_form_with_warmup(Duration::from_millis(300)).await;
    form.type_input(EMAIL, ARTICLE_URL);

    Mock::given(path("/submit"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "session_id": "abc123",
        })))
        .expect(1)
        .mount(&form.endpoint)
        .await;

    let (first, second) = tokio::join!(form.controller.handle_submit(), async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(form.controller.state(), FormState::Submitting);
        let screen = form.view().screen();
        assert_eq!(screen.trigger, Some(TriggerState::BUSY));
        assert!(screen.progress_active);
        form.controller.handle_submit().await
    });

    assert!(matches!(first, SubmitReport::Completed(SubmissionOutcome::Success { .. })));
    assert_eq!(second, SubmitReport::Ignored);
    assert_eq!(form.view().screen().trigger, Some(TriggerState::READY));
}

#[tokio::test]
async fn resubmitting_after_failure_sends_again() {
    let form = spawn_form().await;

    Mock::given(path("/submit"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(2)
        .mount(&form.endpoint)
        .await;

    form.type_input(EMAIL, ARTICLE_URL);
    form.controller.handle_submit().await;
    let report = form.controller.handle_submit().await;

    assert_eq!(
        report,
        SubmitReport::Completed(SubmissionOutcome::Failure {
            message: GENERIC_REJECTION_MESSAGE.to_string()
        })
    );
}

#[tokio::test]
async fn dropped_submission_restores_trigger() {
    let form = spawn_form_with_warmup(Duration::from_secs(10)).await;
    form.type_input(EMAIL, ARTICLE_URL);

    Mock::given(path("/submit"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&form.endpoint)
        .await;

    let result =
        tokio::time::timeout(Duration::from_millis(100), form.controller.handle_submit()).await;

    assert!(result.is_err());
    assert_eq!(form.controller.state(), FormState::Idle);
    let screen = form.view().screen();
    assert_eq!(screen.trigger, Some(TriggerState::READY));
    assert!(!screen.progress_active);
}
