// ABOUTME: CLI tenants command - list tenants available for alert configuration

use super::OutputFormat;
use crate::api::{AlertApi, HttpAlertApi, Tenant};
use crate::config::AppConfig;
use anyhow::{Context, Result};

/// Execute the tenants command
pub async fn execute(config: &AppConfig, format: OutputFormat) -> Result<()> {
    let api = HttpAlertApi::new(&config.api).context("Failed to create API client")?;
    let tenants = api
        .list_tenants()
        .await
        .context("Failed to list tenants")?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&tenants)?),
        OutputFormat::Text => print!("{}", format_table(&tenants)),
    }

    Ok(())
}

/// Render tenants as an aligned two-column table
pub fn format_table(tenants: &[Tenant]) -> String {
    if tenants.is_empty() {
        return "No tenants found.\n".to_string();
    }

    let name_width = tenants
        .iter()
        .map(|t| t.display_name.chars().count())
        .chain(std::iter::once("DISPLAY NAME".len()))
        .max()
        .unwrap_or(0);

    let mut out = format!("{:<name_width$}  DEFAULT DOMAIN NAME\n", "DISPLAY NAME");
    for tenant in tenants {
        out.push_str(&format!(
            "{:<name_width$}  {}\n",
            tenant.display_name, tenant.default_domain_name
        ));
    }
    out
}
