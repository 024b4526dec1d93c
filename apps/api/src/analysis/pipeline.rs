//! Validator → Prompt Builder → Model Invoker → Response Shaper.
//!
//! Both endpoints share this runner. Each request type supplies its prompt,
//! output token cap and shaping rules through [`AnalysisTask`].

use serde::Serialize;
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::analysis::shaper::{shape_sentiment, shape_summary};
use crate::analysis::validator::validate;
use crate::errors::AppError;
use crate::models::{
    AnalyzeSentimentRequest, AnalyzeSentimentResponse, SummarizeRequest, SummarizeResponse, Usage,
};
use crate::oracle::CompletionRequest;
use crate::prompts::{build_prompt, PromptPair, Task};
use crate::state::AppState;

pub const SUMMARIZE_MAX_TOKENS: u32 = 400;
pub const SENTIMENT_MAX_TOKENS: u32 = 250;

pub trait AnalysisTask: Sync {
    type Response: Serialize + Send;

    /// Short task name used in log spans.
    const NAME: &'static str;
    /// Output token cap passed to the oracle.
    const MAX_TOKENS: u32;

    fn input_text(&self) -> &str;
    fn prompt(&self) -> PromptPair;
    fn shape(&self, raw: &str, usage: Usage) -> Self::Response;
}

impl AnalysisTask for SummarizeRequest {
    type Response = SummarizeResponse;
    const NAME: &'static str = "summarize";
    const MAX_TOKENS: u32 = SUMMARIZE_MAX_TOKENS;

    fn input_text(&self) -> &str {
        &self.input_text
    }

    fn prompt(&self) -> PromptPair {
        build_prompt(Task::Summarize(self))
    }

    fn shape(&self, raw: &str, usage: Usage) -> SummarizeResponse {
        shape_summary(self, raw, usage)
    }
}

impl AnalysisTask for AnalyzeSentimentRequest {
    type Response = AnalyzeSentimentResponse;
    const NAME: &'static str = "analyze_sentiment";
    const MAX_TOKENS: u32 = SENTIMENT_MAX_TOKENS;

    fn input_text(&self) -> &str {
        &self.input_text
    }

    fn prompt(&self) -> PromptPair {
        build_prompt(Task::Sentiment(self))
    }

    fn shape(&self, raw: &str, usage: Usage) -> AnalyzeSentimentResponse {
        shape_sentiment(self, raw, usage)
    }
}

/// Runs one request through all four stages. Single attempt, no retry.
pub async fn run<T: AnalysisTask>(state: &AppState, request: &T) -> Result<T::Response, AppError> {
    let span = info_span!("analysis", task = T::NAME, request_id = %Uuid::new_v4());

    async move {
        let api_key = validate(request.input_text(), &state.config)?;

        let prompt = request.prompt();
        let completion = state
            .oracle
            .complete(&api_key, CompletionRequest::new(&prompt, T::MAX_TOKENS))
            .await?;

        info!(
            "Oracle replied: {} chars, {} total tokens",
            completion.text.chars().count(),
            completion.usage.total_tokens
        );

        Ok(request.shape(&completion.text, completion.usage))
    }
    .instrument(span)
    .await
}
