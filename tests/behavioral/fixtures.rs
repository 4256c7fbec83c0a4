// ABOUTME: Shared test fixtures for behavioral tests
//
// Provides:
// - FakeSession: switchable SessionProvider
// - api_config(): ApiConfig pointing at a wiremock server
// - press()/feed(): key event helpers
// - screen_text(): render the wizard into a TestBackend and read it back

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use viecnong::api::User;
use viecnong::config::ApiConfig;
use viecnong::session::SessionProvider;
use viecnong::wizard::{
    apply_action, map_key, PostJobComponent, PostJobState, WizardEffect, WizardStep,
};
use wiremock::MockServer;

/// Session whose login state can be flipped mid-test
#[derive(Default)]
pub struct FakeSession {
    logged_in: AtomicBool,
}

impl FakeSession {
    pub fn logged_in() -> Arc<Self> {
        let session = Self::default();
        session.set_logged_in(true);
        Arc::new(session)
    }

    pub fn logged_out() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn set_logged_in(&self, value: bool) {
        self.logged_in.store(value, Ordering::SeqCst);
    }
}

impl SessionProvider for FakeSession {
    fn token(&self) -> Option<String> {
        self.is_authenticated().then(|| "test-token".to_string())
    }

    fn user(&self) -> Option<User> {
        self.is_authenticated().then(|| User {
            id: 1,
            name: "Chú Năm".to_string(),
            phone: "0905111222".to_string(),
            role: None,
            address: None,
        })
    }

    fn is_authenticated(&self) -> bool {
        self.logged_in.load(Ordering::SeqCst)
    }
}

pub fn api_config(server: &MockServer) -> ApiConfig {
    ApiConfig {
        base_url: format!("{}/api/v1", server.uri()),
        ..ApiConfig::default()
    }
}

pub fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// Map and apply one key press
pub fn feed(state: &mut PostJobState, code: KeyCode) -> WizardEffect {
    let action = map_key(state, press(code));
    apply_action(state, action)
}

pub fn type_text(state: &mut PostJobState, text: &str) {
    for c in text.chars() {
        feed(state, KeyCode::Char(c));
    }
}

pub fn go_to(state: &mut PostJobState, step: WizardStep) {
    while state.current_step.number() < step.number() {
        state.advance();
    }
    while state.current_step.number() > step.number() {
        state.retreat();
    }
}

/// Render one frame and return the screen as text, one line per row
pub fn screen_text(state: &PostJobState) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 32)).unwrap();
    let component = PostJobComponent::new();
    terminal
        .draw(|frame| {
            let area = frame.size();
            component.render(frame, area, state);
        })
        .unwrap();

    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer.get(x, y).symbol());
        }
        text.push('\n');
    }
    text
}
