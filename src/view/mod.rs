// ABOUTME: Rendering interface for the wizard and the projection that drives it
// A view receives the step header, each field the step presents and any callouts

pub mod text;
pub mod tui;

pub use text::TextView;
pub use tui::{draw_app, TuiView};

use crate::api::Tenant;
use crate::wizard::{
    LegacyAlerts, ReviewItem, SubmissionResult, WizardController, WizardError, WizardStep,
};
use crate::wizard::fields::{AUDIT_LOG_ENABLE, SET_ALERTS};

/// A single field as presented on the current step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldView {
    /// A row of the tenant table
    Tenant { tenant: Tenant, selected: bool },
    /// An on/off switch bound to a form field
    Switch {
        name: &'static str,
        label: &'static str,
        on: bool,
    },
    /// A read-only line of the review summary
    Review(ReviewItem),
}

impl FieldView {
    pub const fn is_interactive(&self) -> bool {
        !matches!(self, Self::Review(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalloutKind {
    Danger,
    Info,
    Success,
}

/// A highlighted message block under the step's fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Callout {
    pub kind: CalloutKind,
    pub lines: Vec<String>,
}

impl Callout {
    pub fn new(kind: CalloutKind, lines: Vec<String>) -> Self {
        Self { kind, lines }
    }
}

/// Rendering capabilities a front end supplies to the wizard
#[cfg_attr(test, mockall::automock)]
pub trait WizardView {
    fn render_step(&mut self, step: WizardStep, index: usize, total: usize);
    fn render_field(&mut self, field: &FieldView, focused: bool);
    fn render_callout(&mut self, callout: &Callout);
}

/// Fields presented on the wizard's current step.
///
/// `tenants` is the tenant table's source rows; only the tenant step uses it.
pub fn step_fields(wizard: &WizardController, tenants: &[Tenant]) -> Vec<FieldView> {
    let form = wizard.form();
    match wizard.current_step() {
        WizardStep::TenantChoice => tenants
            .iter()
            .map(|tenant| FieldView::Tenant {
                selected: form.is_tenant_selected(&tenant.default_domain_name),
                tenant: tenant.clone(),
            })
            .collect(),
        WizardStep::LegacyAlerts => {
            let mut fields = vec![FieldView::Switch {
                name: SET_ALERTS,
                label: "Setup alerts for the selected tenants",
                on: form.flag(SET_ALERTS),
            }];
            if let LegacyAlerts::Enabled(settings) = wizard.legacy_alerts() {
                fields.extend(settings.into_iter().map(|s| FieldView::Switch {
                    name: s.flag.key(),
                    label: s.flag.label(),
                    on: s.enabled,
                }));
            }
            fields
        }
        WizardStep::Webhook => vec![FieldView::Switch {
            name: AUDIT_LOG_ENABLE,
            label: "Subscribe this tenant to receive audit logs",
            on: form.flag(AUDIT_LOG_ENABLE),
        }],
        WizardStep::Review if wizard.is_complete() => Vec::new(),
        WizardStep::Review => wizard.review().map(FieldView::Review).collect(),
    }
}

/// Callouts for the current state: validation error, then submission status
pub fn callouts(wizard: &WizardController) -> Vec<Callout> {
    let mut out = Vec::new();
    if let Some(error) = wizard.visible_error() {
        out.push(Callout::new(CalloutKind::Danger, vec![error.message.clone()]));
    }
    if wizard.current_step() == WizardStep::Review {
        match wizard.submission() {
            Some(SubmissionResult::Pending) => {
                out.push(Callout::new(CalloutKind::Info, vec!["Loading".to_string()]));
            }
            Some(SubmissionResult::Success(messages)) => {
                out.push(Callout::new(CalloutKind::Success, messages.clone()));
            }
            Some(SubmissionResult::Failure(error)) => {
                out.push(Callout::new(CalloutKind::Danger, vec![error.clone()]));
            }
            None => {}
        }
    }
    out
}

/// Drive a view with the wizard's current step
pub fn render_wizard<V: WizardView + ?Sized>(
    wizard: &WizardController,
    tenants: &[Tenant],
    focus: Option<usize>,
    view: &mut V,
) {
    let step = wizard.current_step();
    view.render_step(step, step.index(), WizardStep::total());
    for (idx, field) in step_fields(wizard, tenants).iter().enumerate() {
        view.render_field(field, focus == Some(idx));
    }
    for callout in callouts(wizard) {
        view.render_callout(&callout);
    }
}

/// Apply the default action of an interactive field: toggle it
pub fn toggle_field(wizard: &mut WizardController, field: &FieldView) -> Result<(), WizardError> {
    match field {
        FieldView::Tenant { tenant, .. } => wizard.toggle_tenant(tenant).map(|_| ()),
        FieldView::Switch { name, on, .. } => wizard.set_field(*name, !*on),
        FieldView::Review(_) => Ok(()),
    }
}
