mod client;
mod handle;
mod types;

pub use client::{GeminiClient, ProviderClient};
pub use handle::ProviderHandle;
pub use types::*;
