// ABOUTME: State machine driving the alerting wizard through its steps
// Owns the current step, the form state, the visible validation error and the submission status

use super::fields::{FieldValue, FormState, LegacyAlerts, AUDIT_LOG_ENABLE, SET_ALERTS};
use super::review::{review_items, ReviewItem};
use super::step::WizardStep;
use super::submission::{shape_payload, SubmissionAdapter, SubmissionResult};
use super::validator::{validate_step, ValidationError};
use crate::alerts::AlertFlag;
use crate::api::{AlertApi, Tenant};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, info, warn};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("A submission is already in flight")]
    SubmissionPending,

    #[error("The configuration was already submitted")]
    AlreadySubmitted,

    #[error("Submission is only possible from the review step")]
    NotOnReviewStep,

    #[error("Wizard session not found: {0}")]
    UnknownSession(Uuid),
}

/// One wizard session
#[derive(Debug, Clone, Default)]
pub struct WizardController {
    step: WizardStep,
    form: FormState,
    /// Error shown on the current step after a rejected `go_next`
    visible_error: Option<ValidationError>,
    submission: Option<SubmissionResult>,
}

impl WizardController {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn current_step(&self) -> WizardStep {
        self.step
    }

    pub const fn step_index(&self) -> usize {
        self.step.index()
    }

    pub const fn form(&self) -> &FormState {
        &self.form
    }

    pub const fn visible_error(&self) -> Option<&ValidationError> {
        self.visible_error.as_ref()
    }

    pub const fn submission(&self) -> Option<&SubmissionResult> {
        self.submission.as_ref()
    }

    pub fn is_pending(&self) -> bool {
        self.submission.as_ref().is_some_and(SubmissionResult::is_pending)
    }

    /// True once the backend acknowledged the configuration
    pub fn is_complete(&self) -> bool {
        self.submission.as_ref().is_some_and(SubmissionResult::is_success)
    }

    pub fn is_final_step(&self) -> bool {
        self.step.next().is_none()
    }

    pub fn can_go_back(&self) -> bool {
        self.step.previous().is_some()
    }

    fn ensure_interactive(&self) -> Result<(), WizardError> {
        if self.is_pending() {
            return Err(WizardError::SubmissionPending);
        }
        if self.is_complete() {
            return Err(WizardError::AlreadySubmitted);
        }
        Ok(())
    }

    /// Merge a field value into the form
    pub fn set_field(
        &mut self,
        name: impl Into<String>,
        value: impl Into<FieldValue>,
    ) -> Result<(), WizardError> {
        self.ensure_interactive()?;
        let name = name.into();
        debug!("Setting field {}", name);
        self.form.set(name, value);
        self.refresh_visible_error();
        Ok(())
    }

    pub fn select_tenant(&mut self, tenant: Tenant) -> Result<bool, WizardError> {
        self.ensure_interactive()?;
        let added = self.form.select_tenant(tenant);
        self.refresh_visible_error();
        Ok(added)
    }

    pub fn deselect_tenant(&mut self, domain: &str) -> Result<bool, WizardError> {
        self.ensure_interactive()?;
        Ok(self.form.deselect_tenant(domain))
    }

    /// Select the tenant if it is not selected, otherwise deselect it
    pub fn toggle_tenant(&mut self, tenant: &Tenant) -> Result<bool, WizardError> {
        if self.form.is_tenant_selected(&tenant.default_domain_name) {
            self.deselect_tenant(&tenant.default_domain_name)?;
            Ok(false)
        } else {
            self.select_tenant(tenant.clone())?;
            Ok(true)
        }
    }

    pub fn set_flag(&mut self, flag: AlertFlag, enabled: bool) -> Result<(), WizardError> {
        self.set_field(flag.key(), enabled)
    }

    pub fn set_alerts_enabled(&mut self, enabled: bool) -> Result<(), WizardError> {
        self.set_field(SET_ALERTS, enabled)
    }

    pub fn set_audit_log(&mut self, enabled: bool) -> Result<(), WizardError> {
        self.set_field(AUDIT_LOG_ENABLE, enabled)
    }

    /// Drop the visible error once the current step validates again
    fn refresh_visible_error(&mut self) {
        if self.visible_error.is_some() && validate_step(self.step, &self.form).is_ok() {
            self.visible_error = None;
        }
    }

    pub fn legacy_alerts(&self) -> LegacyAlerts {
        LegacyAlerts::from_form(&self.form)
    }

    pub fn selected_tenants(&self) -> &[Tenant] {
        self.form.selected_tenants()
    }

    pub fn review(&self) -> impl ExactSizeIterator<Item = ReviewItem> + Clone + '_ {
        review_items(&self.form)
    }

    /// Move to the next step if the current one validates.
    ///
    /// On the last step this is a no-op returning the current step.
    pub fn go_next(&mut self) -> Result<WizardStep, WizardError> {
        self.ensure_interactive()?;

        if let Err(e) = validate_step(self.step, &self.form) {
            warn!("Step '{}' rejected: {}", self.step, e);
            self.visible_error = Some(e.clone());
            return Err(e.into());
        }

        if let Some(next) = self.step.next() {
            info!("Wizard advanced: {} -> {}", self.step, next);
            self.step = next;
            self.visible_error = None;
        }
        Ok(self.step)
    }

    /// Move to the previous step. On the first step this is a no-op.
    pub fn go_back(&mut self) -> Result<WizardStep, WizardError> {
        self.ensure_interactive()?;

        if let Some(prev) = self.step.previous() {
            info!("Wizard went back: {} -> {}", self.step, prev);
            self.step = prev;
            self.visible_error = None;
        }
        Ok(self.step)
    }

    /// Mark the submission as pending and return the shaped payload to dispatch
    pub fn begin_submission(&mut self) -> Result<Map<String, Value>, WizardError> {
        self.ensure_interactive()?;
        if !self.is_final_step() {
            return Err(WizardError::NotOnReviewStep);
        }
        // Tenants can still be deselected after the first step was passed
        if let Err(e) = validate_step(WizardStep::TenantChoice, &self.form) {
            warn!("Submission rejected: {}", e);
            self.visible_error = Some(e.clone());
            return Err(e.into());
        }

        let payload = shape_payload(&self.form);
        self.submission = Some(SubmissionResult::Pending);
        info!(
            "Submission started for {} tenant(s)",
            self.form.selected_tenants().len()
        );
        Ok(payload)
    }

    /// Settle a pending submission. Outcomes arriving when nothing is pending are ignored.
    pub fn finish_submission(&mut self, outcome: SubmissionResult) -> Option<&SubmissionResult> {
        if self.is_pending() && !outcome.is_pending() {
            match &outcome {
                SubmissionResult::Success(messages) => {
                    info!("Submission succeeded: {} message(s)", messages.len());
                }
                SubmissionResult::Failure(error) => warn!("Submission failed: {}", error),
                SubmissionResult::Pending => {}
            }
            self.submission = Some(outcome);
        } else {
            warn!("Ignoring submission outcome with no pending submission");
        }
        self.submission.as_ref()
    }

    /// Submit from the review step and wait for the backend to settle it
    pub async fn submit<A: AlertApi>(
        &mut self,
        adapter: &SubmissionAdapter<A>,
    ) -> Result<SubmissionResult, WizardError> {
        let payload = self.begin_submission()?;
        let outcome = adapter.dispatch(&payload).await;
        self.finish_submission(outcome.clone());
        Ok(outcome)
    }
}
