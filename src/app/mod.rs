// ABOUTME: Main application structure for the interactive wizard TUI
// Owns the app state and dispatches submissions on the tokio runtime

pub mod events;
pub mod state;

pub use events::{AppEvent, EventHandler};
pub use state::AppState;

use crate::api::AlertApi;
use crate::wizard::{SubmissionAdapter, SubmissionResult};
use serde_json::{Map, Value};
use tokio::sync::mpsc;
use tracing::{error, info};

pub struct App<A> {
    pub state: AppState,
    adapter: SubmissionAdapter<A>,
    outcome_tx: mpsc::UnboundedSender<SubmissionResult>,
    outcome_rx: mpsc::UnboundedReceiver<SubmissionResult>,
}

impl<A> App<A>
where
    A: AlertApi + Clone + Send + Sync + 'static,
{
    pub fn new(api: A) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::new(),
            adapter: SubmissionAdapter::new(api),
            outcome_tx,
            outcome_rx,
        }
    }

    /// Load the tenant table. A failure is kept on the state instead of aborting the wizard.
    pub async fn init(&mut self) {
        match self.adapter.api().list_tenants().await {
            Ok(tenants) => {
                info!("Tenant table loaded with {} rows", tenants.len());
                self.state.tenants = tenants;
                self.state.tenant_error = None;
            }
            Err(e) => {
                error!("Failed to load tenants: {}", e);
                self.state.tenant_error = Some(e.to_string());
            }
        }
    }

    /// Apply an event, dispatching a submission in the background if one was started
    pub fn handle_event(&mut self, event: AppEvent) {
        if let Some(payload) = EventHandler::process_event(event, &mut self.state) {
            self.dispatch(payload);
        }
    }

    fn dispatch(&self, payload: Map<String, Value>) {
        let adapter = self.adapter.clone();
        let tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            let outcome = adapter.dispatch(&payload).await;
            // Receiver only goes away when the app shuts down
            let _ = tx.send(outcome);
        });
    }

    /// Settle any submission outcomes that arrived since the last tick
    pub fn tick(&mut self) {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.state.wizard.finish_submission(outcome);
        }
    }

    /// Wait for the next submission outcome and settle it
    pub async fn wait_for_submission(&mut self) -> Option<SubmissionResult> {
        let outcome = self.outcome_rx.recv().await?;
        self.state.wizard.finish_submission(outcome.clone());
        Some(outcome)
    }
}
