pub mod classify;
mod executor;
pub mod fsm;
mod invoke;
mod validate;

pub use classify::{ErrorKind, classify};
pub use executor::Relay;
pub use fsm::{RequestEvent, RequestState, RequestStateMachine};
pub use invoke::{GenerationResult, generate};
pub use validate::PromptRequest;
