// ABOUTME: Per-step validation gating forward navigation in the wizard

use super::fields::{FormState, SELECTED_TENANTS};
use super::step::WizardStep;
use thiserror::Error;

/// A required field is missing or invalid on the current step
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn required(field: &str) -> Self {
        Self {
            field: field.to_string(),
            message: "Required".to_string(),
        }
    }
}

/// Check the fields a step requires before the wizard may leave it forwards
pub fn validate_step(step: WizardStep, form: &FormState) -> Result<(), ValidationError> {
    match step {
        WizardStep::TenantChoice => {
            if form.selected_tenants().is_empty() {
                return Err(ValidationError::required(SELECTED_TENANTS));
            }
            Ok(())
        }
        // Switches default to off
        WizardStep::LegacyAlerts | WizardStep::Webhook | WizardStep::Review => Ok(()),
    }
}
