// ABOUTME: Event handling system for keyboard input and wizard actions

use crate::app::AppState;
use crate::wizard::WizardStep;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde_json::{Map, Value};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    Quit,
    FocusUp,
    FocusDown,
    ToggleField,
    NextStep,
    PreviousStep,
    Submit,
}

pub struct EventHandler;

impl EventHandler {
    /// Map a key press to a wizard action
    pub fn handle_key_event(key_event: KeyEvent, state: &AppState) -> Option<AppEvent> {
        if key_event.modifiers.contains(KeyModifiers::CONTROL)
            && key_event.code == KeyCode::Char('c')
        {
            return Some(AppEvent::Quit);
        }

        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(AppEvent::Quit),
            KeyCode::Up | KeyCode::Char('k') => Some(AppEvent::FocusUp),
            KeyCode::Down | KeyCode::Char('j') => Some(AppEvent::FocusDown),
            KeyCode::Char(' ') => Some(AppEvent::ToggleField),
            KeyCode::Left | KeyCode::Char('h') => Some(AppEvent::PreviousStep),
            KeyCode::Right | KeyCode::Char('l') => Some(AppEvent::NextStep),
            KeyCode::Char('s') => Some(AppEvent::Submit),
            // Enter confirms on the review step and advances elsewhere
            KeyCode::Enter if state.wizard.current_step() == WizardStep::Review => {
                Some(AppEvent::Submit)
            }
            KeyCode::Enter => Some(AppEvent::NextStep),
            _ => None,
        }
    }

    /// Apply an event to the state. Returns a payload when a submission should be dispatched.
    pub fn process_event(event: AppEvent, state: &mut AppState) -> Option<Map<String, Value>> {
        match event {
            AppEvent::Quit => {
                info!("Quit requested");
                state.should_quit = true;
            }
            AppEvent::FocusUp => state.focus_up(),
            AppEvent::FocusDown => state.focus_down(),
            AppEvent::ToggleField => state.toggle_focused(),
            AppEvent::NextStep => state.next_step(),
            AppEvent::PreviousStep => state.previous_step(),
            AppEvent::Submit => return state.begin_submission(),
        }
        None
    }
}
