//! Response Shaper: turns the oracle's raw text into a typed response.
//!
//! Decoding is best-effort. Text that is not a JSON object degrades to the
//! all-defaults reply; that is the only fallback path. Inside an object, a
//! wrong-typed field falls back to its own default and malformed list entries
//! are dropped.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::analysis::lenient::{self, Entry};
use crate::models::{
    AnalyzeSentimentRequest, AnalyzeSentimentResponse, AspectSentiment, Citation, Granularity,
    Sentiment, SummarizeRequest, SummarizeResponse, Usage,
};
use crate::oracle::MODEL;

#[derive(Debug, Default, Deserialize)]
struct SummaryReply {
    #[serde(default, deserialize_with = "lenient::or_default")]
    summary: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    citations: Vec<Entry<Citation>>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Label {
    Known(Sentiment),
    Other(Value),
}

#[derive(Debug, Default, Deserialize)]
struct SentimentReply {
    #[serde(default)]
    sentiment: Option<Label>,
    #[serde(default, deserialize_with = "lenient::number_or_zero")]
    confidence: f64,
    #[serde(default, deserialize_with = "lenient::or_default")]
    rationale: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    aspect_sentiments: Vec<Entry<AspectSentiment>>,
}

fn decode<T: DeserializeOwned + Default>(raw: &str) -> T {
    serde_json::from_str::<Map<String, Value>>(raw)
        .and_then(|object| serde_json::from_value(Value::Object(object)))
        .unwrap_or_else(|e| {
            warn!("Oracle reply is not a JSON object, using defaults: {e}");
            T::default()
        })
}

fn keep_valid<T>(entries: Vec<Entry<T>>, what: &str) -> Vec<T> {
    entries
        .into_iter()
        .filter_map(|entry| match entry {
            Entry::Valid(item) => Some(item),
            Entry::Malformed(value) => {
                debug!("Dropping malformed {what}: {value}");
                None
            }
        })
        .collect()
}

pub fn shape_summary(req: &SummarizeRequest, raw: &str, usage: Usage) -> SummarizeResponse {
    let reply: SummaryReply = decode(raw);

    let citations = if req.include_citations {
        keep_valid(reply.citations, "citation")
    } else {
        Vec::new()
    };

    SummarizeResponse {
        summary: reply.summary,
        citations,
        model: MODEL.to_string(),
        usage,
    }
}

pub fn shape_sentiment(
    req: &AnalyzeSentimentRequest,
    raw: &str,
    usage: Usage,
) -> AnalyzeSentimentResponse {
    let reply: SentimentReply = decode(raw);

    let sentiment = match reply.sentiment {
        Some(Label::Known(sentiment)) => sentiment,
        Some(Label::Other(label)) => {
            warn!("Unrecognized sentiment label {label}, coercing to neutral");
            Sentiment::default()
        }
        None => Sentiment::default(),
    };

    let rationale = if req.return_rationale {
        reply.rationale
    } else {
        String::new()
    };

    let aspect_sentiments = match req.granularity {
        Granularity::Aspect => keep_valid(reply.aspect_sentiments, "aspect sentiment"),
        Granularity::Overall => Vec::new(),
    };

    AnalyzeSentimentResponse {
        sentiment,
        confidence: reply.confidence,
        rationale,
        aspect_sentiments,
        model: MODEL.to_string(),
        usage,
    }
}
