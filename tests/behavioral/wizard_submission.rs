// ABOUTME: Behavioral tests for submitting a job posting from the wizard
//
// Covers the happy path, server rejection, transport failure and the
// at-most-one-request guarantee, against a wiremock server.

use super::fixtures::{api_config, feed, go_to, type_text, FakeSession};
use crossterm::event::KeyCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use viecnong::api::ApiClient;
use viecnong::config::ApiConfig;
use viecnong::wizard::{MessageKind, PostJobState, SubmitOutcome, WizardEffect, WizardStep};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Fill the wizard the way an owner would, ending on the review step
fn filled_wizard(session: std::sync::Arc<FakeSession>) -> PostJobState {
    let mut state = PostJobState::new(session);

    // Step 1: pick "Hồ tiêu", auto-advances with a suggested title
    feed(&mut state, KeyCode::Down);
    feed(&mut state, KeyCode::Enter);
    assert_eq!(state.current_step, WizardStep::Title);

    // Step 3: quantity -> price type -> price
    go_to(&mut state, WizardStep::Details);
    feed(&mut state, KeyCode::Tab);
    feed(&mut state, KeyCode::Tab);
    type_text(&mut state, "350.000");

    go_to(&mut state, WizardStep::Review);
    state
}

#[tokio::test]
async fn test_submit_posts_job_once_with_normalized_price() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/jobs"))
        .and(header("Authorization", "Bearer test-token"))
        .and(body_partial_json(json!({
            "title": "Tuyển thợ hồ tiêu",
            "price_min": 350000,
            "price_max": 350000,
            "location": "Chưa cập nhật",
            "benefits": "Bao ăn ở, Có xe đưa đón",
            "deadline": "2025-12-31",
            "requirements": "Số điện thoại (Bắt buộc)"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "success": true,
            "data": {"id": 77}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let session = FakeSession::logged_in();
    let client = ApiClient::new(&api_config(&server), session_token(&session)).unwrap();
    let mut state = filled_wizard(session);

    // Two quick activations: only the first starts a request
    let first = feed(&mut state, KeyCode::Enter);
    let second = feed(&mut state, KeyCode::Enter);
    let WizardEffect::StartSubmit(payload) = first else {
        panic!("first Enter should start a submission, got {first:?}");
    };
    assert_eq!(second, WizardEffect::None);
    assert!(state.busy);

    let result = client.create_job(&payload).await;
    assert_eq!(state.finish_submit(result), SubmitOutcome::Posted);
    assert!(!state.busy);
    assert!(state.posted);

    // Posted wizards refuse another submission
    assert_eq!(feed(&mut state, KeyCode::Enter), WizardEffect::None);
}

#[tokio::test]
async fn test_rejected_submission_keeps_state_and_shows_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/jobs"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "success": false,
            "message": "Đăng tin thất bại"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let session = FakeSession::logged_in();
    let client = ApiClient::new(&api_config(&server), session_token(&session)).unwrap();
    let mut state = filled_wizard(session);
    let draft_before = state.draft.clone();

    let outcome = submit_once(&mut state, &client).await;

    assert_eq!(
        outcome,
        SubmitOutcome::Failed {
            message: "Đăng tin thất bại".to_string()
        }
    );
    assert_eq!(state.current_step, WizardStep::Review);
    assert!(!state.busy);
    assert!(!state.posted);
    assert_eq!(state.draft, draft_before);
    let status = state.status_message.clone().unwrap();
    assert_eq!(status.kind, MessageKind::Error);
    assert_eq!(status.text, "Đăng tin thất bại");
}

#[tokio::test]
async fn test_transport_failure_surfaces_generic_message_and_allows_retry() {
    // Nothing listens on port 9 on a test host
    let config = ApiConfig {
        base_url: "http://127.0.0.1:9/api/v1".to_string(),
        timeout_secs: 2,
        ..ApiConfig::default()
    };
    let session = FakeSession::logged_in();
    let client = ApiClient::new(&config, session_token(&session)).unwrap();
    let mut state = filled_wizard(session);

    let outcome = submit_once(&mut state, &client).await;

    assert_eq!(
        outcome,
        SubmitOutcome::Failed {
            message: "Có lỗi xảy ra".to_string()
        }
    );
    assert!(!state.busy);
    assert!(matches!(
        feed(&mut state, KeyCode::Enter),
        WizardEffect::StartSubmit(_)
    ));
}

#[tokio::test]
async fn test_logged_out_owner_never_reaches_the_server() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/jobs"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"success": true})))
        .expect(0)
        .mount(&server)
        .await;

    let session = FakeSession::logged_out();
    let mut state = filled_wizard(session.clone());
    assert_eq!(feed(&mut state, KeyCode::Enter), WizardEffect::None);

    // Logging in elsewhere unlocks the submit action on the next activation
    session.set_logged_in(true);
    assert!(matches!(
        feed(&mut state, KeyCode::Enter),
        WizardEffect::StartSubmit(_)
    ));
}

/// Press Enter on the review step and feed the request result back, as the TUI loop does
async fn submit_once(state: &mut PostJobState, client: &ApiClient) -> SubmitOutcome {
    let effect = feed(state, KeyCode::Enter);
    let WizardEffect::StartSubmit(payload) = effect else {
        panic!("Enter on the review step should start a submission, got {effect:?}");
    };
    assert!(state.busy);
    let result = client.create_job(&payload).await;
    state.finish_submit(result)
}

fn session_token(session: &FakeSession) -> Option<String> {
    use viecnong::session::SessionProvider;
    session.token()
}
