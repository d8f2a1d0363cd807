// ABOUTME: End-to-end tests of the TUI app driving a submission in the background

use alert_wizard::api::{HttpAlertApi, Tenant};
use alert_wizard::app::{App, AppEvent};
use alert_wizard::config::ApiConfig;
use alert_wizard::wizard::{SubmissionResult, WizardStep};
use serde_json::json;
use std::time::Duration;
use tokio::time::timeout;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn app_against(server: &MockServer) -> App<HttpAlertApi> {
    let config = ApiConfig {
        base_url: server.uri(),
        ..ApiConfig::default()
    };
    let mut app = App::new(HttpAlertApi::new(&config).unwrap());
    app.init().await;
    app
}

async fn mount_tenants(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/ListTenants"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "displayName": "Contoso", "defaultDomainName": "contoso.com" }
        ])))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_walk_and_submit_in_background() {
    let server = MockServer::start().await;
    mount_tenants(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/AddAlert"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "Results": ["Alert added for contoso.com"] })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut app = app_against(&server).await;
    assert_eq!(app.state.tenants, vec![Tenant::new("Contoso", "contoso.com")]);

    for event in [
        AppEvent::ToggleField,
        AppEvent::NextStep,
        AppEvent::NextStep,
        AppEvent::NextStep,
        AppEvent::Submit,
    ] {
        app.handle_event(event);
    }
    assert_eq!(app.state.wizard.current_step(), WizardStep::Review);
    assert!(app.state.wizard.is_pending());

    // A second submit while in flight is rejected, not dispatched
    app.handle_event(AppEvent::Submit);
    assert!(app.state.notice.is_some());

    let outcome = timeout(Duration::from_secs(5), app.wait_for_submission())
        .await
        .expect("submission should settle")
        .expect("channel stays open");
    assert_eq!(
        outcome,
        SubmissionResult::Success(vec!["Alert added for contoso.com".to_string()])
    );
    assert!(app.state.wizard.is_complete());
}

#[tokio::test]
async fn test_tenant_load_failure_is_kept_on_state() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/ListTenants"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let app = app_against(&server).await;
    assert!(app.state.tenants.is_empty());
    let error = app.state.tenant_error.as_deref().unwrap();
    assert!(error.contains("503"));
}
