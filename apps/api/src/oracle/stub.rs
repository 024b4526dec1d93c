//! Recording oracle used by handler and pipeline tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::models::Usage;
use crate::oracle::{Completion, CompletionOracle, CompletionRequest, OracleError};

/// What the stub saw for one call.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub api_key: String,
    pub system: String,
    pub user: String,
    pub max_tokens: u32,
}

enum Reply {
    Text(String, Usage),
    Fail(u16, String),
}

pub struct StubOracle {
    reply: Reply,
    calls: Mutex<Vec<RecordedCall>>,
}

impl StubOracle {
    pub fn replying(text: &str) -> Self {
        Self::replying_with_usage(text, Usage::default())
    }

    pub fn replying_with_usage(text: &str, usage: Usage) -> Self {
        Self {
            reply: Reply::Text(text.to_string(), usage),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(status: u16, message: &str) -> Self {
        Self {
            reply: Reply::Fail(status, message.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionOracle for StubOracle {
    async fn complete(
        &self,
        api_key: &str,
        request: CompletionRequest<'_>,
    ) -> Result<Completion, OracleError> {
        self.calls.lock().unwrap().push(RecordedCall {
            api_key: api_key.to_string(),
            system: request.system.to_string(),
            user: request.user.to_string(),
            max_tokens: request.max_tokens,
        });

        match &self.reply {
            Reply::Text(text, usage) => Ok(Completion {
                text: text.clone(),
                usage: *usage,
            }),
            Reply::Fail(status, message) => Err(OracleError::Api {
                status: *status,
                message: message.clone(),
            }),
        }
    }
}
