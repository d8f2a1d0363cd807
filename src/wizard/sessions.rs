// ABOUTME: Arena of wizard sessions keyed by session id

use super::controller::{WizardController, WizardError};
use std::collections::HashMap;
use tracing::info;
use uuid::Uuid;

/// Owns one controller per open wizard
#[derive(Debug, Default)]
pub struct WizardSessions {
    sessions: HashMap<Uuid, WizardController>,
}

impl WizardSessions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount a fresh wizard and return its id
    pub fn open(&mut self) -> Uuid {
        let id = Uuid::new_v4();
        self.sessions.insert(id, WizardController::new());
        info!("Opened wizard session {}", id);
        id
    }

    pub fn get(&self, id: Uuid) -> Result<&WizardController, WizardError> {
        self.sessions.get(&id).ok_or(WizardError::UnknownSession(id))
    }

    pub fn get_mut(&mut self, id: Uuid) -> Result<&mut WizardController, WizardError> {
        self.sessions
            .get_mut(&id)
            .ok_or(WizardError::UnknownSession(id))
    }

    /// Discard a session and its form state
    pub fn close(&mut self, id: Uuid) -> Result<WizardController, WizardError> {
        let session = self
            .sessions
            .remove(&id)
            .ok_or(WizardError::UnknownSession(id))?;
        info!("Closed wizard session {}", id);
        Ok(session)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
