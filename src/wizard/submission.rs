// ABOUTME: Shapes the wizard's form state into a backend payload and dispatches it
// Null fields are pruned and every selected tenant gets a Select_<domain> entry

use super::fields::FormState;
use crate::api::AlertApi;
use serde_json::{Map, Value};
use tracing::{info, warn};

/// Outcome of one submission attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    Pending,
    Success(Vec<String>),
    Failure(String),
}

impl SubmissionResult {
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

/// Build the request body for `POST /api/AddAlert`.
///
/// The form itself is left untouched.
pub fn shape_payload(form: &FormState) -> Map<String, Value> {
    let mut payload: Map<String, Value> = form
        .iter()
        .filter(|(_, value)| !value.is_null())
        .map(|(name, value)| (name.to_string(), value.to_json()))
        .collect();

    for tenant in form.selected_tenants() {
        payload.insert(
            tenant.select_key(),
            Value::String(tenant.default_domain_name.clone()),
        );
    }

    payload
}

/// Sends shaped payloads through an [`AlertApi`]
#[derive(Debug, Clone)]
pub struct SubmissionAdapter<A> {
    api: A,
}

impl<A: AlertApi> SubmissionAdapter<A> {
    pub const fn new(api: A) -> Self {
        Self { api }
    }

    pub const fn api(&self) -> &A {
        &self.api
    }

    /// Shape the form and dispatch it in one step
    pub async fn submit(&self, form: &FormState) -> SubmissionResult {
        let payload = shape_payload(form);
        self.dispatch(&payload).await
    }

    /// Dispatch an already shaped payload. Never retries.
    pub async fn dispatch(&self, payload: &Map<String, Value>) -> SubmissionResult {
        info!("Submitting alert configuration ({} fields)", payload.len());
        match self.api.add_alert(payload).await {
            Ok(messages) => {
                info!("Alert configuration accepted with {} result(s)", messages.len());
                SubmissionResult::Success(messages)
            }
            Err(e) => {
                warn!("Alert configuration failed: {}", e);
                SubmissionResult::Failure(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiError, Tenant};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::sync::Mutex;

    /// Records payloads and answers with a canned response
    struct RecordingApi {
        reply: Result<Vec<String>, u16>,
        seen: Mutex<Vec<Map<String, Value>>>,
    }

    impl RecordingApi {
        fn replying(reply: Result<Vec<String>, u16>) -> Self {
            Self {
                reply,
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    impl AlertApi for RecordingApi {
        async fn list_tenants(&self) -> Result<Vec<Tenant>, ApiError> {
            Ok(Vec::new())
        }

        async fn add_alert(&self, payload: &Map<String, Value>) -> Result<Vec<String>, ApiError> {
            self.seen.lock().unwrap().push(payload.clone());
            self.reply.clone().map_err(|status| ApiError::Status {
                status,
                body: "boom".to_string(),
            })
        }
    }

    fn contoso_form() -> FormState {
        let mut form = FormState::new();
        form.select_tenant(Tenant::new("Contoso", "contoso.com"));
        form.set("MFAAlertUsers", true);
        form
    }

    #[test]
    fn test_payload_drops_nulls() {
        let mut form = contoso_form();
        form.set("MFAAdmins", None::<bool>);

        let payload = shape_payload(&form);
        assert!(!payload.contains_key("MFAAdmins"));
        assert!(payload.values().all(|v| !v.is_null()));
        // the live form keeps the key
        assert!(form.contains("MFAAdmins"));
    }

    #[test]
    fn test_payload_adds_select_entries() {
        let mut form = contoso_form();
        form.select_tenant(Tenant::new("Fabrikam", "fabrikam.com"));

        let payload = shape_payload(&form);
        assert_eq!(payload["Select_contoso.com"], json!("contoso.com"));
        assert_eq!(payload["Select_fabrikam.com"], json!("fabrikam.com"));
        assert!(!form.contains("Select_contoso.com"));
    }

    #[test]
    fn test_contoso_scenario_payload() {
        let payload = shape_payload(&contoso_form());
        assert_eq!(
            Value::Object(payload),
            json!({
                "selectedTenants": [
                    {"displayName": "Contoso", "defaultDomainName": "contoso.com"}
                ],
                "MFAAlertUsers": true,
                "Select_contoso.com": "contoso.com"
            })
        );
    }

    #[tokio::test]
    async fn test_submit_success() {
        let adapter = SubmissionAdapter::new(RecordingApi::replying(Ok(vec![
            "Alert added for contoso.com".to_string(),
        ])));

        let result = adapter.submit(&contoso_form()).await;
        assert_eq!(
            result,
            SubmissionResult::Success(vec!["Alert added for contoso.com".to_string()])
        );
        assert_eq!(adapter.api().seen.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_submit_failure_carries_error_text() {
        let adapter = SubmissionAdapter::new(RecordingApi::replying(Err(500)));

        let result = adapter.submit(&contoso_form()).await;
        let SubmissionResult::Failure(message) = result else {
            panic!("expected failure, got {result:?}");
        };
        assert!(message.contains("500"));
        assert!(message.contains("boom"));
        assert_eq!(adapter.api().seen.lock().unwrap().len(), 1, "no retries");
    }
}
