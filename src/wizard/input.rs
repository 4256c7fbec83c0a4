// ABOUTME: Keyboard handling for the job-posting wizard
// Maps key events to wizard actions and applies them; no terminal needed

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::debug;

use super::state::{FieldFocus, PostJobState, WizardStep};
use crate::api::CreateJobRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardAction {
    Next,
    Back,
    FocusNext,
    FocusPrevious,
    CursorUp,
    CursorDown,
    /// Enter: select, advance or submit depending on the step
    Activate,
    /// Space on toggles and option lists
    Toggle,
    Input(char),
    Backspace,
    Exit,
    Ignore,
}

/// What the event loop must do after an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardEffect {
    None,
    /// Send this payload; feed the result back into `finish_submit`
    StartSubmit(CreateJobRequest),
    Exit,
}

fn is_text_field(focus: Option<FieldFocus>) -> bool {
    matches!(focus, Some(f) if f != FieldFocus::PriceType)
}

/// Translate a key press for the current wizard state
pub fn map_key(state: &PostJobState, key: KeyEvent) -> WizardAction {
    if key.kind != KeyEventKind::Press {
        return WizardAction::Ignore;
    }
    let wants_exit = key.code == KeyCode::Esc
        || (key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c'));
    if wants_exit {
        // An in-flight request runs to completion; leaving now would abort it
        return if state.busy {
            WizardAction::Ignore
        } else {
            WizardAction::Exit
        };
    }

    let step = state.current_step;
    let has_options = step.option_count() > 0;
    let multi_field = step.fields().len() > 1;

    match key.code {
        KeyCode::Enter => WizardAction::Activate,
        KeyCode::Tab => WizardAction::FocusNext,
        KeyCode::BackTab => WizardAction::FocusPrevious,
        KeyCode::Left => WizardAction::Back,
        KeyCode::Right => WizardAction::Next,
        KeyCode::Up if has_options => WizardAction::CursorUp,
        KeyCode::Down if has_options => WizardAction::CursorDown,
        KeyCode::Up if multi_field => WizardAction::FocusPrevious,
        KeyCode::Down if multi_field => WizardAction::FocusNext,
        KeyCode::Backspace => WizardAction::Backspace,
        KeyCode::Char(' ') if !is_text_field(state.focused_field()) => WizardAction::Toggle,
        KeyCode::Char(c) if is_text_field(state.focused_field()) => WizardAction::Input(c),
        _ => WizardAction::Ignore,
    }
}

/// Apply an action to the wizard
pub fn apply_action(state: &mut PostJobState, action: WizardAction) -> WizardEffect {
    debug!("Wizard action {:?} on step {}", action, state.current_step.number());

    match action {
        WizardAction::Next => {
            state.advance();
        }
        WizardAction::Back => {
            state.retreat();
        }
        WizardAction::FocusNext => state.focus_next(),
        WizardAction::FocusPrevious => state.focus_previous(),
        WizardAction::CursorUp => state.cursor_up(),
        WizardAction::CursorDown => state.cursor_down(),
        WizardAction::Toggle => state.toggle_current(),
        WizardAction::Input(c) => state.input_char(c),
        WizardAction::Backspace => state.backspace(),
        WizardAction::Exit => return WizardEffect::Exit,
        WizardAction::Activate => return activate(state),
        WizardAction::Ignore => {}
    }
    WizardEffect::None
}

fn activate(state: &mut PostJobState) -> WizardEffect {
    match state.current_step {
        WizardStep::JobType => {
            state.select_job_type(state.cursor);
        }
        WizardStep::Package => {
            state.toggle_current();
            state.advance();
        }
        WizardStep::Review => match state.begin_submit() {
            Ok(payload) => return WizardEffect::StartSubmit(payload),
            Err(reason) => debug!("Submit not started: {}", reason),
        },
        _ => {
            state.advance();
        }
    }
    WizardEffect::None
}
