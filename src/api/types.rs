// ABOUTME: Wire types exchanged with the alert-configuration backend

use serde::{Deserialize, Serialize};

/// A managed customer organization, keyed by its default domain name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    pub display_name: String,
    pub default_domain_name: String,
}

impl Tenant {
    pub fn new(display_name: impl Into<String>, default_domain_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            default_domain_name: default_domain_name.into(),
        }
    }

    /// Payload key the backend uses to mark this tenant as selected
    pub fn select_key(&self) -> String {
        format!("Select_{}", self.default_domain_name)
    }
}

/// Acknowledgement returned by `POST /api/AddAlert`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AddAlertResponse {
    #[serde(rename = "Results")]
    pub results: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tenant_deserializes_from_listing() {
        let json = r#"[
            {"displayName": "Contoso", "defaultDomainName": "contoso.com", "customerId": "abc"},
            {"displayName": "Fabrikam", "defaultDomainName": "fabrikam.com"}
        ]"#;
        let tenants: Vec<Tenant> = serde_json::from_str(json).unwrap();
        assert_eq!(tenants.len(), 2);
        assert_eq!(tenants[0], Tenant::new("Contoso", "contoso.com"));
    }

    #[test]
    fn test_select_key() {
        let tenant = Tenant::new("Contoso", "contoso.com");
        assert_eq!(tenant.select_key(), "Select_contoso.com");
    }

    #[test]
    fn test_add_alert_response_requires_results() {
        let ok: AddAlertResponse =
            serde_json::from_str(r#"{"Results": ["Alert added for contoso.com"]}"#).unwrap();
        assert_eq!(ok.results, vec!["Alert added for contoso.com".to_string()]);

        assert!(serde_json::from_str::<AddAlertResponse>(r#"{"Message": "ok"}"#).is_err());
    }
}
