//! Oracle: the single point of entry for all completion calls.
//!
//! No other module talks to the model provider directly. Handlers receive an
//! `Arc<dyn CompletionOracle>` through `AppState`, so tests swap in a stub.
//!
//! Model: gpt-4o-mini (hardcoded, echoed back in every response)
use async_trait::async_trait;
use thiserror::Error;

use crate::models::Usage;
use crate::prompts::PromptPair;

pub mod openai;
#[cfg(test)]
pub mod stub;

pub use openai::OpenAiClient;

/// The model used for every completion call.
pub const MODEL: &str = "gpt-4o-mini";

/// Sampling parameters sent with every call. Not configurable per request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sampling {
    pub temperature: f32,
    pub top_p: f32,
    pub frequency_penalty: f32,
    pub presence_penalty: f32,
}

pub const SAMPLING: Sampling = Sampling {
    temperature: 0.2,
    top_p: 1.0,
    frequency_penalty: 0.0,
    presence_penalty: 0.0,
};

#[derive(Debug, Error)]
pub enum OracleError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Malformed completion envelope: {0}")]
    Decode(#[from] serde_json::Error),
}

/// One chat-completion call: a system + user message pair, a JSON-object
/// output directive and an output token cap.
#[derive(Debug, Clone, Copy)]
pub struct CompletionRequest<'a> {
    pub model: &'a str,
    pub system: &'a str,
    pub user: &'a str,
    pub max_tokens: u32,
    pub sampling: Sampling,
}

impl<'a> CompletionRequest<'a> {
    pub fn new(prompt: &'a PromptPair, max_tokens: u32) -> Self {
        Self {
            model: MODEL,
            system: &prompt.system,
            user: &prompt.user,
            max_tokens,
            sampling: SAMPLING,
        }
    }
}

/// Raw text of the first choice plus whatever usage the provider reported.
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    pub text: String,
    pub usage: Usage,
}

/// A chat-style completion endpoint treated as a black box.
#[async_trait]
pub trait CompletionOracle: Send + Sync {
    async fn complete(
        &self,
        api_key: &str,
        request: CompletionRequest<'_>,
    ) -> Result<Completion, OracleError>;
}
