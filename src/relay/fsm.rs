use crate::{Error, Result};
use tracing::{debug, warn};

// Request states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestState {
    Received,
    Validated,
    Configured,
    Invoked,
    Succeeded,
    Failed,
}

// Request events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestEvent {
    InputAccepted,
    ClientAvailable,
    ProviderCalled,
    TextReceived,
    ErrorOccurred,
}

/// Lifecycle of a single relay request.
#[derive(Debug)]
pub struct RequestStateMachine {
    state: RequestState,
}

impl Default for RequestStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestStateMachine {
    pub fn new() -> Self {
        Self {
            state: RequestState::Received,
        }
    }

    pub fn current_state(&self) -> RequestState {
        self.state
    }

    pub fn transition(&mut self, event: RequestEvent) -> Result<()> {
        let old_state = self.state;

        let new_state = match (old_state, event) {
            (RequestState::Received, RequestEvent::InputAccepted) => RequestState::Validated,
            (RequestState::Validated, RequestEvent::ClientAvailable) => RequestState::Configured,
            (RequestState::Configured, RequestEvent::ProviderCalled) => RequestState::Invoked,
            (RequestState::Invoked, RequestEvent::TextReceived) => RequestState::Succeeded,
            (state, RequestEvent::ErrorOccurred) if !state.is_terminal() => RequestState::Failed,
            _ => {
                warn!(
                    "❌ Invalid request transition from {:?} with event {:?}",
                    old_state, event
                );
                return Err(Error::InvalidTransition {
                    current: format!("{old_state:?}"),
                    requested: format!("{event:?}"),
                });
            }
        };

        debug!(
            "🔄 Request state: {:?} -> {:?} (event: {:?})",
            old_state, new_state, event
        );

        self.state = new_state;
        Ok(())
    }

    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }
}

impl RequestState {
    pub fn is_terminal(self) -> bool {
        matches!(self, RequestState::Succeeded | RequestState::Failed)
    }
}
