//! OpenAI-compatible chat-completions client.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::Usage;
use crate::oracle::{Completion, CompletionOracle, CompletionRequest, OracleError};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Returned as the completion text when the provider sends no content.
const EMPTY_OBJECT: &str = "{}";

#[derive(Debug, Serialize)]
struct ChatCompletionBody<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
    max_tokens: u32,
    top_p: f32,
    frequency_penalty: f32,
    presence_penalty: f32,
    response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
}

impl<'a> From<CompletionRequest<'a>> for ChatCompletionBody<'a> {
    fn from(request: CompletionRequest<'a>) -> Self {
        Self {
            model: request.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: request.system,
                },
                ChatMessage {
                    role: "user",
                    content: request.user,
                },
            ],
            temperature: request.sampling.temperature,
            max_tokens: request.max_tokens,
            top_p: request.sampling.top_p,
            frequency_penalty: request.sampling.frequency_penalty,
            presence_penalty: request.sampling.presence_penalty,
            response_format: ResponseFormat {
                format_type: "json_object",
            },
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    #[serde(default)]
    usage: Option<WireUsage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    #[serde(default)]
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct WireUsage {
    prompt_tokens: Option<u32>,
    completion_tokens: Option<u32>,
    total_tokens: Option<u32>,
}

impl From<WireUsage> for Usage {
    fn from(wire: WireUsage) -> Self {
        Usage {
            prompt_tokens: wire.prompt_tokens.unwrap_or(0),
            completion_tokens: wire.completion_tokens.unwrap_or(0),
            total_tokens: wire.total_tokens.unwrap_or(0),
        }
    }
}

impl ChatCompletionResponse {
    fn into_completion(self) -> Completion {
        let text = self
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message)
            .and_then(|m| m.content)
            .unwrap_or_else(|| EMPTY_OBJECT.to_string());

        Completion {
            text,
            usage: self.usage.map(Usage::from).unwrap_or_default(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct OpenAiError {
    error: OpenAiErrorBody,
}

#[derive(Debug, Deserialize)]
struct OpenAiErrorBody {
    message: String,
}

fn decode_completion(body: &str) -> Result<Completion, OracleError> {
    let response: ChatCompletionResponse = serde_json::from_str(body)?;
    Ok(response.into_completion())
}

/// Unwraps `{"error": {"message": ...}}` when present, otherwise returns the raw body.
fn error_message(body: String) -> String {
    serde_json::from_str::<OpenAiError>(&body)
        .map(|e| e.error.message)
        .unwrap_or(body)
}

/// Chat-completions client. Cheap to clone; the credential is supplied per call.
#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    endpoint: String,
    organization: Option<String>,
}

impl OpenAiClient {
    pub fn new(base_url: &str, organization: Option<String>) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: Client::builder()
                .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
                .build()?,
            endpoint: format!("{}/chat/completions", base_url.trim_end_matches('/')),
            organization,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl CompletionOracle for OpenAiClient {
    /// Single attempt. Any failure is returned to the caller as-is.
    async fn complete(
        &self,
        api_key: &str,
        request: CompletionRequest<'_>,
    ) -> Result<Completion, OracleError> {
        let body = ChatCompletionBody::from(request);

        let mut builder = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&body);
        if let Some(org) = &self.organization {
            builder = builder.header("OpenAI-Organization", org);
        }

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(OracleError::Api {
                status: status.as_u16(),
                message: error_message(text),
            });
        }

        let completion = decode_completion(&text)?;

        debug!(
            "Completion succeeded: prompt_tokens={}, completion_tokens={}, total_tokens={}",
            completion.usage.prompt_tokens,
            completion.usage.completion_tokens,
            completion.usage.total_tokens
        );

        Ok(completion)
    }
}
