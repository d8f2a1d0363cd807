// ABOUTME: TUI application state wrapping one wizard session
// Tracks focus within the current step, the tenant table rows and transient notices

use crate::api::Tenant;
use crate::view::{step_fields, toggle_field, FieldView};
use crate::wizard::{WizardController, WizardError, WizardStep};
use serde_json::{Map, Value};
use tracing::{debug, warn};

#[derive(Debug, Default)]
pub struct AppState {
    /// The wizard session driven by this TUI
    pub wizard: WizardController,
    /// Rows of the tenant table
    pub tenants: Vec<Tenant>,
    /// Why the tenant table could not be loaded, if it failed
    pub tenant_error: Option<String>,
    /// Focused field index on the current step
    pub focus: usize,
    /// Last rejected action, shown in the footer
    pub notice: Option<String>,
    pub should_quit: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> Vec<FieldView> {
        step_fields(&self.wizard, &self.tenants)
    }

    pub fn focus_up(&mut self) {
        self.focus = self.focus.saturating_sub(1);
    }

    pub fn focus_down(&mut self) {
        let count = self.fields().len();
        if self.focus + 1 < count {
            self.focus += 1;
        }
    }

    /// Toggle the focused field, if it is interactive
    pub fn toggle_focused(&mut self) {
        let Some(field) = self.fields().into_iter().nth(self.focus) else {
            return;
        };
        if !field.is_interactive() {
            return;
        }
        let result = toggle_field(&mut self.wizard, &field);
        self.record(result);
        self.clamp_focus();
    }

    pub fn next_step(&mut self) {
        let before = self.wizard.current_step();
        let result = self.wizard.go_next();
        if self.wizard.current_step() != before {
            self.focus = 0;
        }
        self.record(result);
    }

    pub fn previous_step(&mut self) {
        let before = self.wizard.current_step();
        let result = self.wizard.go_back();
        if self.wizard.current_step() != before {
            self.focus = 0;
        }
        self.record(result);
    }

    /// Start a submission from the review step, returning the payload to dispatch
    pub fn begin_submission(&mut self) -> Option<Map<String, Value>> {
        if self.wizard.current_step() != WizardStep::Review {
            self.notice = Some(WizardError::NotOnReviewStep.to_string());
            return None;
        }
        match self.wizard.begin_submission() {
            Ok(payload) => {
                self.notice = None;
                Some(payload)
            }
            Err(e) => {
                self.record::<()>(Err(e));
                None
            }
        }
    }

    fn record<T>(&mut self, result: Result<T, WizardError>) {
        match result {
            Ok(_) => self.notice = None,
            // Validation errors are already shown on the step itself
            Err(WizardError::Validation(e)) => {
                debug!("Validation blocked navigation: {}", e);
                self.notice = None;
            }
            Err(e) => {
                warn!("Wizard action rejected: {}", e);
                self.notice = Some(e.to_string());
            }
        }
    }

    fn clamp_focus(&mut self) {
        let count = self.fields().len();
        if count == 0 {
            self.focus = 0;
        } else if self.focus >= count {
            self.focus = count - 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_tenants() -> AppState {
        let mut state = AppState::new();
        state.tenants = vec![
            Tenant::new("Contoso", "contoso.com"),
            Tenant::new("Fabrikam", "fabrikam.com"),
        ];
        state
    }

    #[test]
    fn test_focus_stays_in_bounds() {
        let mut state = state_with_tenants();
        state.focus_up();
        assert_eq!(state.focus, 0);
        state.focus_down();
        state.focus_down();
        state.focus_down();
        assert_eq!(state.focus, 1);
    }

    #[test]
    fn test_toggle_and_advance() {
        let mut state = state_with_tenants();
        state.focus_down();
        state.toggle_focused();
        assert!(state.wizard.form().is_tenant_selected("fabrikam.com"));

        state.next_step();
        assert_eq!(state.wizard.current_step(), WizardStep::LegacyAlerts);
        assert_eq!(state.focus, 0);
    }

    #[test]
    fn test_blocked_advance_keeps_focus() {
        let mut state = state_with_tenants();
        state.focus_down();
        state.next_step();
        assert_eq!(state.wizard.current_step(), WizardStep::TenantChoice);
        assert_eq!(state.focus, 1);
        assert!(state.notice.is_none());
        assert!(state.wizard.visible_error().is_some());
    }

    #[test]
    fn test_submission_only_from_review() {
        let mut state = state_with_tenants();
        assert!(state.begin_submission().is_none());
        assert!(state.notice.is_some());
    }

    #[test]
    fn test_pending_submission_rejects_navigation() {
        let mut state = state_with_tenants();
        state.toggle_focused();
        for _ in 0..3 {
            state.next_step();
        }
        assert!(state.begin_submission().is_some());
        state.previous_step();
        assert_eq!(state.wizard.current_step(), WizardStep::Review);
        assert_eq!(
            state.notice.as_deref(),
            Some("A submission is already in flight")
        );
    }
}
