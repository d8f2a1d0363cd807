// ABOUTME: CLI add command - walk the wizard non-interactively and submit
//
// Drives the same controller the TUI uses: tenant choice, legacy alerts,
// webhook subscription, then review and submission to /api/AddAlert.

use super::{AddArgs, OutputFormat};
use crate::api::{AlertApi, HttpAlertApi, Tenant};
use crate::config::AppConfig;
use crate::view::{callouts, render_wizard, TextView, WizardView};
use crate::wizard::{
    shape_payload, SubmissionAdapter, SubmissionResult, WizardController, WizardStep,
};
use anyhow::{anyhow, bail, Context, Result};
use serde_json::json;
use tracing::info;

/// Execute the add command
pub async fn execute(args: AddArgs, config: &AppConfig, format: OutputFormat) -> Result<()> {
    let api = HttpAlertApi::new(&config.api).context("Failed to create API client")?;

    let tenants: Vec<Tenant> = if args.dry_run {
        // No backend round trip; the domain doubles as display name
        args.tenants.iter().map(|d| Tenant::new(d.clone(), d.clone())).collect()
    } else {
        let known = api
            .list_tenants()
            .await
            .context("Failed to list tenants")?;
        resolve_tenants(&args.tenants, &known)?
    };

    let mut wizard = build_wizard(&args, tenants)?;

    if args.dry_run {
        let payload = shape_payload(wizard.form());
        match format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&payload)?),
            OutputFormat::Text => {
                print!("{}", render_text(&wizard));
                println!();
                println!("{}", serde_json::to_string_pretty(&payload)?);
            }
        }
        return Ok(());
    }

    if format == OutputFormat::Text {
        print!("{}", render_text(&wizard));
    }

    let adapter = SubmissionAdapter::new(api);
    let outcome = wizard.submit(&adapter).await?;

    match format {
        OutputFormat::Json => {
            let body = match &outcome {
                SubmissionResult::Success(messages) => json!({ "results": messages }),
                SubmissionResult::Failure(error) => json!({ "error": error }),
                SubmissionResult::Pending => json!({ "pending": true }),
            };
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
        OutputFormat::Text => {
            let mut view = TextView::new();
            for callout in callouts(&wizard) {
                view.render_callout(&callout);
            }
            print!("{}", view.into_string());
        }
    }

    match outcome {
        SubmissionResult::Failure(error) => bail!("Submission failed: {}", error),
        _ => Ok(()),
    }
}

/// Match requested domains against the tenant listing
pub fn resolve_tenants(domains: &[String], known: &[Tenant]) -> Result<Vec<Tenant>> {
    domains
        .iter()
        .map(|domain| {
            known
                .iter()
                .find(|t| t.default_domain_name.eq_ignore_ascii_case(domain))
                .cloned()
                .ok_or_else(|| anyhow!("Unknown tenant: {}", domain))
        })
        .collect()
}

/// Walk the wizard from tenant choice to the review step using the CLI arguments
pub fn build_wizard(args: &AddArgs, tenants: Vec<Tenant>) -> Result<WizardController> {
    let mut wizard = WizardController::new();

    for tenant in tenants {
        wizard.select_tenant(tenant)?;
    }
    wizard.go_next()?;

    wizard.set_alerts_enabled(!args.no_legacy)?;
    for flag in &args.alerts {
        wizard.set_flag(*flag, true)?;
    }
    wizard.go_next()?;

    wizard.set_audit_log(args.audit_log)?;
    wizard.go_next()?;

    debug_assert_eq!(wizard.current_step(), WizardStep::Review);
    info!(
        "Prepared alert configuration for {} tenant(s)",
        wizard.selected_tenants().len()
    );
    Ok(wizard)
}

fn render_text(wizard: &WizardController) -> String {
    let mut view = TextView::new();
    render_wizard(wizard, &[], None, &mut view);
    view.into_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alerts::AlertFlag;
    use pretty_assertions::assert_eq;

    fn args() -> AddArgs {
        AddArgs {
            tenants: vec!["contoso.com".to_string()],
            alerts: vec![AlertFlag::MfaAlertUsers],
            no_legacy: false,
            audit_log: true,
            dry_run: true,
        }
    }

    #[test]
    fn test_build_wizard_reaches_review() {
        let wizard = build_wizard(&args(), vec![Tenant::new("Contoso", "contoso.com")]).unwrap();
        assert_eq!(wizard.current_step(), WizardStep::Review);

        let payload = shape_payload(wizard.form());
        assert_eq!(payload["SetAlerts"], true);
        assert_eq!(payload["MFAAlertUsers"], true);
        assert_eq!(payload["AuditLogEnable"], true);
        assert_eq!(payload["Select_contoso.com"], "contoso.com");
    }

    #[test]
    fn test_build_wizard_requires_tenant() {
        let err = build_wizard(&args(), Vec::new()).unwrap_err();
        assert!(err.to_string().contains("Required"));
    }

    #[test]
    fn test_resolve_tenants() {
        let known = vec![
            Tenant::new("Contoso", "contoso.com"),
            Tenant::new("Fabrikam", "fabrikam.com"),
        ];
        let resolved = resolve_tenants(&["Fabrikam.com".to_string()], &known).unwrap();
        assert_eq!(resolved, vec![Tenant::new("Fabrikam", "fabrikam.com")]);

        let err = resolve_tenants(&["unknown.com".to_string()], &known).unwrap_err();
        assert_eq!(err.to_string(), "Unknown tenant: unknown.com");
    }

    #[test]
    fn test_review_text_lists_fourteen_rows() {
        let wizard = build_wizard(&args(), vec![Tenant::new("Contoso", "contoso.com")]).unwrap();
        let text = render_text(&wizard);
        assert_eq!(text.lines().count(), 1 + 14);
        assert!(text.contains("✓ Alert on users without any form of MFA"));
    }
}
