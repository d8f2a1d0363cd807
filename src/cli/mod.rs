// ABOUTME: CLI argument parsing and command routing for alert-wizard
//
// Provides command-line interface for:
// - Launching the interactive wizard (tui, default)
// - Listing managed tenants (tenants)
// - Applying an alert configuration non-interactively (add)

pub mod add;
pub mod tenants;

use crate::alerts::AlertFlag;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Configure legacy alerts and audit log subscriptions across tenants
#[derive(Parser)]
#[command(name = "alert-wizard")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Extra config file, applied after the default locations
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Output format for commands
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Launch the interactive wizard (default if no command given)
    Tui,

    /// List the tenants available for selection
    Tenants,

    /// Walk the wizard non-interactively and submit the configuration
    Add(AddArgs),
}

/// Arguments for the add command
#[derive(clap::Args, Debug)]
pub struct AddArgs {
    /// Default domain name of a tenant to configure (repeatable)
    #[arg(long = "tenant", required = true)]
    pub tenants: Vec<String>,

    /// Legacy alert to enable, by key, e.g. MFAAlertUsers (repeatable)
    #[arg(long = "alert", value_parser = parse_alert_flag)]
    pub alerts: Vec<AlertFlag>,

    /// Leave legacy alerts switched off
    #[arg(long, conflicts_with = "alerts")]
    pub no_legacy: bool,

    /// Subscribe the tenants to audit log delivery
    #[arg(long)]
    pub audit_log: bool,

    /// Print the review and payload without contacting the backend
    #[arg(long)]
    pub dry_run: bool,
}

fn parse_alert_flag(value: &str) -> Result<AlertFlag, String> {
    AlertFlag::from_key(value).ok_or_else(|| {
        let known: Vec<&str> = AlertFlag::all().iter().map(AlertFlag::key).collect();
        format!("unknown alert '{value}', expected one of: {}", known.join(", "))
    })
}
