use super::{
    fsm::{RequestEvent, RequestStateMachine},
    invoke::{self, GenerationResult},
    validate::PromptRequest,
};
use crate::{Result, provider::ProviderHandle};
use tracing::{debug, error};

/// Composes validation, the client check and generation for one request.
///
/// Holds no mutable state, so a single instance is shared across all
/// concurrent requests.
#[derive(Debug, Clone)]
pub struct Relay {
    provider: ProviderHandle,
}

impl Relay {
    pub fn new(provider: ProviderHandle) -> Self {
        Self { provider }
    }

    pub async fn answer(&self, body: &[u8]) -> Result<GenerationResult> {
        let mut fsm = RequestStateMachine::new();

        match self.run(&mut fsm, body).await {
            Ok(result) => {
                fsm.transition(RequestEvent::TextReceived)?;
                Ok(result)
            }
            Err(e) => {
                fsm.transition(RequestEvent::ErrorOccurred)?;
                Err(e)
            }
        }
    }

    async fn run(&self, fsm: &mut RequestStateMachine, body: &[u8]) -> Result<GenerationResult> {
        let request = PromptRequest::from_body(body)?;
        fsm.transition(RequestEvent::InputAccepted)?;

        let client = self.provider.client().inspect_err(|_| {
            error!("Rejecting generation request: provider client is not configured");
        })?;
        fsm.transition(RequestEvent::ClientAvailable)?;

        debug!("Invoking provider model {}", client.model());
        fsm.transition(RequestEvent::ProviderCalled)?;

        invoke::generate(client.as_ref(), &request.question).await
    }
}
