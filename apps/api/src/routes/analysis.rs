//! Axum route handlers for the analysis API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};

use crate::analysis::pipeline::run;
use crate::errors::AppError;
use crate::models::{
    AnalyzeSentimentRequest, AnalyzeSentimentResponse, SummarizeRequest, SummarizeResponse,
};
use crate::state::AppState;

/// POST /summarize
///
/// Summarizes `input_text`, optionally grounded in and citing `documents`.
pub async fn handle_summarize(
    State(state): State<AppState>,
    payload: Result<Json<SummarizeRequest>, JsonRejection>,
) -> Result<Json<SummarizeResponse>, AppError> {
    let Json(request) = payload?;
    let response = run(&state, &request).await?;
    Ok(Json(response))
}

/// POST /analyze-sentiment
///
/// Overall sentiment, plus per-aspect sentiment when `granularity` is `aspect`.
pub async fn handle_analyze_sentiment(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeSentimentRequest>, JsonRejection>,
) -> Result<Json<AnalyzeSentimentResponse>, AppError> {
    let Json(request) = payload?;
    let response = run(&state, &request).await?;
    Ok(Json(response))
}
