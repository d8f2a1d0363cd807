// ABOUTME: HTTP client tests against a mock alert backend

use alert_wizard::api::{AlertApi, ApiError, HttpAlertApi, Tenant};
use alert_wizard::config::ApiConfig;
use alert_wizard::wizard::{SubmissionAdapter, SubmissionResult, WizardController};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer, api_key: Option<&str>) -> HttpAlertApi {
    let config = ApiConfig {
        base_url: server.uri(),
        api_key: api_key.map(str::to_string),
        ..ApiConfig::default()
    };
    HttpAlertApi::new(&config).unwrap()
}

fn contoso_at_review() -> WizardController {
    let mut wizard = WizardController::new();
    wizard
        .select_tenant(Tenant::new("Contoso", "contoso.com"))
        .unwrap();
    for _ in 0..3 {
        wizard.go_next().unwrap();
    }
    wizard
}

#[tokio::test]
async fn test_list_tenants_requests_all_tenants() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/ListTenants"))
        .and(query_param("AllTenantSelector", "true"))
        .and(header("authorization", "Bearer secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "displayName": "Contoso", "defaultDomainName": "contoso.com" },
            { "displayName": "Fabrikam", "defaultDomainName": "fabrikam.com" }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let tenants = client_for(&server, Some("secret")).list_tenants().await.unwrap();
    assert_eq!(
        tenants,
        vec![
            Tenant::new("Contoso", "contoso.com"),
            Tenant::new("Fabrikam", "fabrikam.com"),
        ]
    );
}

#[tokio::test]
async fn test_submission_success_carries_results() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/AddAlert"))
        .and(body_partial_json(json!({ "Select_contoso.com": "contoso.com" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "Results": ["Alert added for contoso.com"] })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let adapter = SubmissionAdapter::new(client_for(&server, None));
    let mut wizard = contoso_at_review();
    let outcome = wizard.submit(&adapter).await.unwrap();

    assert_eq!(
        outcome,
        SubmissionResult::Success(vec!["Alert added for contoso.com".to_string()])
    );
    assert!(wizard.is_complete());
}

#[tokio::test]
async fn test_submission_failure_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/AddAlert"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&server)
        .await;

    let adapter = SubmissionAdapter::new(client_for(&server, None));
    let mut wizard = contoso_at_review();
    let outcome = wizard.submit(&adapter).await.unwrap();

    let SubmissionResult::Failure(message) = outcome else {
        panic!("expected a failure outcome");
    };
    assert!(message.contains("500"));
    assert!(!wizard.is_pending());

    // A failed submission can be resubmitted
    assert!(wizard.begin_submission().is_ok());
}

#[tokio::test]
async fn test_add_alert_without_results_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/AddAlert"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .mount(&server)
        .await;

    let err = client_for(&server, None)
        .add_alert(&serde_json::Map::new())
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::MalformedResponse(_)));
}

#[tokio::test]
async fn test_unreachable_backend_is_transport_error() {
    let config = ApiConfig {
        base_url: "http://127.0.0.1:9".to_string(),
        timeout_secs: Some(2),
        ..ApiConfig::default()
    };
    let err = HttpAlertApi::new(&config)
        .unwrap()
        .list_tenants()
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}
