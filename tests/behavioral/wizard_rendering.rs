// ABOUTME: Behavioral tests for what the wizard draws on each step

use super::fixtures::{feed, go_to, screen_text, FakeSession};
use crossterm::event::KeyCode;
use viecnong::wizard::{PostJobState, WizardStep};

#[test]
fn test_header_tracks_step_number() {
    let mut state = PostJobState::new(FakeSession::logged_out());
    assert!(screen_text(&state).contains("Bước 1/8"));

    feed(&mut state, KeyCode::Enter);
    let text = screen_text(&state);
    assert!(text.contains("Bước 2/8"));
    assert!(text.contains("Tuyển thợ cà phê"));
}

#[test]
fn test_review_shows_auth_prompt_when_logged_out() {
    let mut state = PostJobState::new(FakeSession::logged_out());
    go_to(&mut state, WizardStep::Review);

    let text = screen_text(&state);
    assert!(text.contains("Đăng nhập để đăng tin"));
    assert!(text.contains("viecnong login"));
    assert!(!text.contains("Xác nhận & Đăng tin ngay"));
}

#[test]
fn test_review_shows_summary_and_busy_label() {
    let mut state = PostJobState::new(FakeSession::logged_in());
    state.select_job_type(2);
    go_to(&mut state, WizardStep::Review);

    let text = screen_text(&state);
    assert!(text.contains("Sẵn sàng đăng tin!"));
    assert!(text.contains("Sầu riêng"));
    assert!(text.contains("Xác nhận & Đăng tin ngay"));

    feed(&mut state, KeyCode::Enter);
    let text = screen_text(&state);
    assert!(text.contains("Đang xử lý..."));
}

#[test]
fn test_requirements_survive_navigation() {
    let mut state = PostJobState::new(FakeSession::logged_out());
    go_to(&mut state, WizardStep::Requirements);
    feed(&mut state, KeyCode::Down);
    feed(&mut state, KeyCode::Down);
    feed(&mut state, KeyCode::Char(' '));

    go_to(&mut state, WizardStep::JobType);
    go_to(&mut state, WizardStep::Requirements);

    let text = screen_text(&state);
    assert!(text.contains("[x] Số điện thoại (Bắt buộc)"));
    assert!(text.contains("[x] Zalo (SĐT hoặc Link)"));
    assert!(text.contains("[ ] Ảnh chân dung"));
}
