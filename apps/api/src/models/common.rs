use serde::{Deserialize, Serialize};

/// A caller-supplied evidence snippet. Rendered into the prompt verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub title: String,
    pub content: String,
    pub source: String,
}

/// Which of the three fixed prompt templates to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PromptVariant {
    /// Grounded-RAG default instructions.
    #[default]
    A,
    /// Includes a worked example.
    B,
    /// Silent reasoning, stricter conflict handling.
    C,
}

/// Token counters reported by the oracle. Zero when not reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

pub(crate) fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_variant_defaults_to_a() {
        assert_eq!(PromptVariant::default(), PromptVariant::A);
    }

    #[test]
    fn test_prompt_variant_rejects_unknown_letter() {
        assert!(serde_json::from_str::<PromptVariant>(r#""D""#).is_err());
        assert_eq!(
            serde_json::from_str::<PromptVariant>(r#""C""#).unwrap(),
            PromptVariant::C
        );
    }

    #[test]
    fn test_usage_default_is_all_zero() {
        let usage = Usage::default();
        assert_eq!(usage.prompt_tokens, 0);
        assert_eq!(usage.completion_tokens, 0);
        assert_eq!(usage.total_tokens, 0);
    }
}
