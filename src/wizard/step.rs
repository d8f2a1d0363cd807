// ABOUTME: The ordered steps of the tenant alerting wizard

/// Steps in the alerting wizard, strictly linear
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WizardStep {
    TenantChoice,
    LegacyAlerts,
    Webhook,
    Review,
}

impl WizardStep {
    /// Get all steps in order
    pub const fn all() -> &'static [Self] {
        &[
            Self::TenantChoice,
            Self::LegacyAlerts,
            Self::Webhook,
            Self::Review,
        ]
    }

    /// Get the total number of steps
    pub const fn total() -> usize {
        4
    }

    /// Zero-based position in the step sequence
    pub const fn index(&self) -> usize {
        match self {
            Self::TenantChoice => 0,
            Self::LegacyAlerts => 1,
            Self::Webhook => 2,
            Self::Review => 3,
        }
    }

    /// Get the step number (1-indexed for display)
    pub const fn number(&self) -> usize {
        self.index() + 1
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::all().get(index).copied()
    }

    /// Get display title for this step
    pub const fn title(&self) -> &'static str {
        match self {
            Self::TenantChoice => "Tenant Choice",
            Self::LegacyAlerts => "Select Alerts",
            Self::Webhook => "Select Webhook Alerts",
            Self::Review => "Review and Confirm",
        }
    }

    /// Get description for this step
    pub const fn description(&self) -> &'static str {
        match self {
            Self::TenantChoice => "Choose the tenants to send alerts for",
            Self::LegacyAlerts => "Select which alerts you want to receive.",
            Self::Webhook => "Select which alerts you want to receive.",
            Self::Review => "Confirm the settings to apply",
        }
    }

    /// Get the next step, if any
    pub const fn next(&self) -> Option<Self> {
        match self {
            Self::TenantChoice => Some(Self::LegacyAlerts),
            Self::LegacyAlerts => Some(Self::Webhook),
            Self::Webhook => Some(Self::Review),
            Self::Review => None,
        }
    }

    /// Get the previous step, if any
    pub const fn previous(&self) -> Option<Self> {
        match self {
            Self::TenantChoice => None,
            Self::LegacyAlerts => Some(Self::TenantChoice),
            Self::Webhook => Some(Self::LegacyAlerts),
            Self::Review => Some(Self::Webhook),
        }
    }
}

impl Default for WizardStep {
    fn default() -> Self {
        Self::TenantChoice
    }
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}
