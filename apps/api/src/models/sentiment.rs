use serde::{Deserialize, Serialize};

use crate::analysis::lenient;
use crate::models::common::{default_true, Document, PromptVariant, Usage};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    #[default]
    Neutral,
    Negative,
    Mixed,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    #[default]
    Overall,
    Aspect,
}

impl Granularity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Granularity::Overall => "overall",
            Granularity::Aspect => "aspect",
        }
    }
}

/// Sentiment scoped to one named facet of the input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectSentiment {
    pub aspect: String,
    pub sentiment: Sentiment,
    #[serde(deserialize_with = "lenient::number")]
    pub confidence: f64,
    pub rationale: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeSentimentRequest {
    pub input_text: String,
    #[serde(default)]
    pub documents: Option<Vec<Document>>,
    #[serde(default)]
    pub granularity: Granularity,
    #[serde(default)]
    pub aspects: Option<Vec<String>>,
    #[serde(default = "default_true")]
    pub return_rationale: bool,
    #[serde(default)]
    pub prompt_variant: PromptVariant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeSentimentResponse {
    pub sentiment: Sentiment,
    pub confidence: f64,
    pub rationale: String,
    pub aspect_sentiments: Vec<AspectSentiment>,
    pub model: String,
    pub usage: Usage,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sentiment_serde_lowercase() {
        let s: Sentiment = serde_json::from_str(r#""mixed""#).unwrap();
        assert_eq!(s, Sentiment::Mixed);
        assert_eq!(serde_json::to_value(Sentiment::Negative).unwrap(), json!("negative"));
    }

    #[test]
    fn test_sentiment_rejects_unknown_label() {
        assert!(serde_json::from_str::<Sentiment>(r#""ecstatic""#).is_err());
    }

    #[test]
    fn test_aspect_sentiment_accepts_numeric_string_confidence() {
        let aspect: AspectSentiment = serde_json::from_value(json!({
            "aspect": "pricing",
            "sentiment": "negative",
            "confidence": "0.75",
            "rationale": "Too expensive."
        }))
        .unwrap();
        assert!((aspect.confidence - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_request_defaults_applied() {
        let req: AnalyzeSentimentRequest =
            serde_json::from_value(json!({"input_text": "great"})).unwrap();
        assert_eq!(req.granularity, Granularity::Overall);
        assert!(req.return_rationale);
        assert!(req.aspects.is_none());
        assert_eq!(req.prompt_variant, PromptVariant::A);
    }
}
