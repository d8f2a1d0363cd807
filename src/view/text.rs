// ABOUTME: Plain-text wizard view used by the non-interactive CLI

use super::{Callout, CalloutKind, FieldView, WizardView};
use crate::wizard::WizardStep;
use std::fmt::Write;

/// Accumulates the rendered wizard as plain text
#[derive(Debug, Default)]
pub struct TextView {
    out: String,
}

impl TextView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.out
    }

    pub fn into_string(self) -> String {
        self.out
    }
}

const fn mark(on: bool) -> &'static str {
    if on {
        "✓"
    } else {
        "✗"
    }
}

impl WizardView for TextView {
    fn render_step(&mut self, step: WizardStep, index: usize, total: usize) {
        let _ = writeln!(
            self.out,
            "Step {}/{}: {} - {}",
            index + 1,
            total,
            step.title(),
            step.description()
        );
    }

    fn render_field(&mut self, field: &FieldView, focused: bool) {
        let cursor = if focused { ">" } else { " " };
        let _ = match field {
            FieldView::Tenant { tenant, selected } => writeln!(
                self.out,
                "{cursor} [{}] {} ({})",
                if *selected { "x" } else { " " },
                tenant.display_name,
                tenant.default_domain_name
            ),
            FieldView::Switch { label, on, .. } => {
                writeln!(self.out, "{cursor} [{}] {label}", if *on { "x" } else { " " })
            }
            FieldView::Review(item) => {
                writeln!(self.out, "{cursor} {} {}", mark(item.satisfied), item.label)
            }
        };
    }

    fn render_callout(&mut self, callout: &Callout) {
        let prefix = match callout.kind {
            CalloutKind::Danger => "!",
            CalloutKind::Info => "…",
            CalloutKind::Success => "•",
        };
        for line in &callout.lines {
            let _ = writeln!(self.out, "{prefix} {line}");
        }
    }
}
