use std::sync::atomic::{AtomicBool, Ordering};

use thiserror::Error;
use tokio::sync::Mutex;

use titlesmith_core::{CredentialGate, Outcome, StructuredLlm, TitlesmithError};

use crate::TitleRequestOrchestrator;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("A title request is already in progress")]
    Busy,
    #[error("No valid API key is selected")]
    CredentialRequired,
    #[error(transparent)]
    Core(#[from] TitlesmithError),
}

/// Caller-side state around an orchestrator: at most one request in flight,
/// and a cached credential-validity flag that a credential failure clears.
pub struct TitleSession<L, G> {
    orchestrator: TitleRequestOrchestrator<L>,
    gate: G,
    busy: AtomicBool,
    credential_valid: AtomicBool,
    last_outcome: Mutex<Option<Outcome>>,
}

struct BusyGuard<'a>(&'a AtomicBool);

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl<L, G> TitleSession<L, G>
where
    L: StructuredLlm,
    G: CredentialGate,
{
    /// The credential flag starts closed; call [`Self::refresh_credential`]
    /// or [`Self::select_credential`] before generating.
    pub fn new(orchestrator: TitleRequestOrchestrator<L>, gate: G) -> Self {
        Self {
            orchestrator,
            gate,
            busy: AtomicBool::new(false),
            credential_valid: AtomicBool::new(false),
            last_outcome: Mutex::new(None),
        }
    }

    pub fn orchestrator(&self) -> &TitleRequestOrchestrator<L> {
        &self.orchestrator
    }

    pub fn gate(&self) -> &G {
        &self.gate
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    pub fn has_valid_credential(&self) -> bool {
        self.credential_valid.load(Ordering::Acquire)
    }

    pub async fn refresh_credential(&self) -> bool {
        let present = self.gate.has_credential().await;
        self.credential_valid.store(present, Ordering::Release);
        present
    }

    pub async fn select_credential(&self) -> Result<(), SessionError> {
        self.gate.request_selection().await?;
        self.credential_valid.store(true, Ordering::Release);
        tracing::info!("credential selection completed");
        Ok(())
    }

    pub async fn last_outcome(&self) -> Option<Outcome> {
        self.last_outcome.lock().await.clone()
    }

    pub async fn generate(&self, topic: &str) -> Result<Outcome, SessionError> {
        if !self.has_valid_credential() {
            return Err(SessionError::CredentialRequired);
        }
        if self
            .busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::debug!("title request rejected while another is in flight");
            return Err(SessionError::Busy);
        }
        let _guard = BusyGuard(&self.busy);

        *self.last_outcome.lock().await = None;

        let credential = self.gate.credential();
        let outcome = self.orchestrator.generate(topic, credential.as_ref()).await;
        if outcome.requires_credential_reset() {
            self.credential_valid.store(false, Ordering::Release);
        }

        *self.last_outcome.lock().await = Some(outcome.clone());
        Ok(outcome)
    }
}
