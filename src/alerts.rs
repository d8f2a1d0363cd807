// ABOUTME: Catalogue of legacy alert switches offered by the wizard
// Each flag knows its wire key, its form label and (for most) its review label

/// A legacy alert switch. Legacy alerts run on a fixed schedule on the backend
/// and do not go through the rule-based alerting engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlertFlag {
    MfaAlertUsers,
    MfaAdmins,
    NoCaConfig,
    AdminPassword,
    QuotaUsed,
    SharePointQuota,
    ExpiringLicenses,
    SecDefaultsUpsell,
    DefenderStatus,
    DefenderMalware,
    UnusedLicenses,
    OverusedLicenses,
    AppSecretExpiry,
    ApnCertExpiry,
    VppTokenExpiry,
    DepTokenExpiry,
}

impl AlertFlag {
    /// All switches in the order the legacy alerts step presents them
    pub const fn all() -> &'static [Self] {
        &[
            Self::MfaAlertUsers,
            Self::MfaAdmins,
            Self::NoCaConfig,
            Self::AdminPassword,
            Self::QuotaUsed,
            Self::SharePointQuota,
            Self::ExpiringLicenses,
            Self::SecDefaultsUpsell,
            Self::DefenderStatus,
            Self::DefenderMalware,
            Self::UnusedLicenses,
            Self::OverusedLicenses,
            Self::AppSecretExpiry,
            Self::ApnCertExpiry,
            Self::VppTokenExpiry,
            Self::DepTokenExpiry,
        ]
    }

    /// Flags listed on the review step, in review order.
    ///
    /// `SharePointQuota` and `ExpiringLicenses` can be toggled but are not
    /// summarised on the review step.
    pub const fn reviewed() -> &'static [Self] {
        &[
            Self::MfaAlertUsers,
            Self::MfaAdmins,
            Self::AdminPassword,
            Self::DefenderStatus,
            Self::DefenderMalware,
            Self::QuotaUsed,
            Self::UnusedLicenses,
            Self::OverusedLicenses,
            Self::AppSecretExpiry,
            Self::ApnCertExpiry,
            Self::VppTokenExpiry,
            Self::DepTokenExpiry,
            Self::NoCaConfig,
            Self::SecDefaultsUpsell,
        ]
    }

    /// Field name used in the form state and the request payload
    pub const fn key(&self) -> &'static str {
        match self {
            Self::MfaAlertUsers => "MFAAlertUsers",
            Self::MfaAdmins => "MFAAdmins",
            Self::NoCaConfig => "NoCAConfig",
            Self::AdminPassword => "AdminPassword",
            Self::QuotaUsed => "QuotaUsed",
            Self::SharePointQuota => "SharePointQuota",
            Self::ExpiringLicenses => "ExpiringLicenses",
            Self::SecDefaultsUpsell => "SecDefaultsUpsell",
            Self::DefenderStatus => "DefenderStatus",
            Self::DefenderMalware => "DefenderMalware",
            Self::UnusedLicenses => "UnusedLicenses",
            Self::OverusedLicenses => "OverusedLicenses",
            Self::AppSecretExpiry => "AppSecretExpiry",
            Self::ApnCertExpiry => "ApnCertExpiry",
            Self::VppTokenExpiry => "VppTokenExpiry",
            Self::DepTokenExpiry => "DepTokenExpiry",
        }
    }

    /// Label shown next to the switch on the legacy alerts step
    pub const fn label(&self) -> &'static str {
        match self {
            Self::MfaAlertUsers => "Alert on users without any form of MFA",
            Self::MfaAdmins => "Alert on admins without any form of MFA",
            Self::NoCaConfig => {
                "Alert on tenants without a Conditional Access policy, while having Conditional Access licensing available."
            }
            Self::AdminPassword => "Alert on changed admin Passwords",
            Self::QuotaUsed => "Alert on 90% mailbox quota used",
            Self::SharePointQuota => "Alert on 90% SharePoint quota used",
            Self::ExpiringLicenses => "Alert on licenses expiring in 30 days",
            Self::SecDefaultsUpsell => "Alert on Security Defaults automatic enablement",
            Self::DefenderStatus => {
                "Alert if Defender is not running (Tenant must be on-boarded in Lighthouse)"
            }
            Self::DefenderMalware => {
                "Alert on Defender Malware found (Tenant must be on-boarded in Lighthouse)"
            }
            Self::UnusedLicenses => "Alert on unused licenses",
            Self::OverusedLicenses => "Alert on overused licenses",
            Self::AppSecretExpiry => "Alert on expiring application secrets",
            Self::ApnCertExpiry => "Alert on expiring APN certificates",
            Self::VppTokenExpiry => "Alert on expiring VPP tokens",
            Self::DepTokenExpiry => "Alert on expiring DEP tokens",
        }
    }

    /// Shorter label used on the review step, `None` if the flag is not reviewed
    pub const fn review_label(&self) -> Option<&'static str> {
        match self {
            Self::MfaAlertUsers => Some("Alert on users without any form of MFA"),
            Self::MfaAdmins => Some("Alert on admins without any form of MFA"),
            Self::AdminPassword => Some("Alert on changed admin Passwords"),
            Self::DefenderStatus => Some("Alert if Defender is not running"),
            Self::DefenderMalware => Some("Alert on Defender Malware"),
            Self::QuotaUsed => Some("Alert on 90% mailbox quota used"),
            Self::UnusedLicenses => Some("Alert on unused licenses"),
            Self::OverusedLicenses => Some("Alert on overused licenses"),
            Self::AppSecretExpiry => Some("Alert on expiring application secrets"),
            Self::ApnCertExpiry => Some("Alert on expiring APN certificates"),
            Self::VppTokenExpiry => Some("Alert on expiring VPP tokens"),
            Self::DepTokenExpiry => Some("Alert on expiring DEP tokens"),
            Self::NoCaConfig => Some("Alert on no CA policies"),
            Self::SecDefaultsUpsell => Some("Alert on Security Defaults automatic enablement"),
            Self::SharePointQuota | Self::ExpiringLicenses => None,
        }
    }

    /// Parse a wire key (case-insensitive)
    pub fn from_key(key: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|flag| flag.key().eq_ignore_ascii_case(key))
    }
}

impl std::fmt::Display for AlertFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_sizes() {
        assert_eq!(AlertFlag::all().len(), 16);
        assert_eq!(AlertFlag::reviewed().len(), 14);
    }

    #[test]
    fn test_reviewed_flags_have_review_labels() {
        for flag in AlertFlag::reviewed() {
            assert!(flag.review_label().is_some(), "{flag} has no review label");
        }
        let unreviewed: Vec<_> = AlertFlag::all()
            .iter()
            .filter(|f| f.review_label().is_none())
            .collect();
        assert_eq!(
            unreviewed,
            vec![&AlertFlag::SharePointQuota, &AlertFlag::ExpiringLicenses]
        );
    }

    #[test]
    fn test_from_key() {
        assert_eq!(AlertFlag::from_key("MFAAlertUsers"), Some(AlertFlag::MfaAlertUsers));
        assert_eq!(AlertFlag::from_key("nocaconfig"), Some(AlertFlag::NoCaConfig));
        assert_eq!(AlertFlag::from_key("NewRole"), None);
    }

    #[test]
    fn test_keys_round_trip_through_from_key() {
        for flag in AlertFlag::all() {
            assert_eq!(AlertFlag::from_key(flag.key()), Some(*flag));
        }
    }
}
