// Prompt templates for the analyze-sentiment task.
// No placeholders; request fields are rendered in the user message only.

use crate::models::AnalyzeSentimentRequest;
use crate::prompts::{PromptPair, UserMessage, VariantTemplate};

const TASK_LINE: &str = "Determine sentiment and confidence for the input text.";

/// Rendered when the caller supplied no aspects.
pub const NO_ASPECTS: &str = "None provided";

/// JSON shape the model must return.
pub const OUTPUT_SHAPE: &str = r#"{ "sentiment": "positive|neutral|negative|mixed", "confidence": 0.0, "rationale": "string", "aspect_sentiments": [{"aspect": "string", "sentiment": "positive|neutral|negative|mixed", "confidence": 0.0, "rationale": "string"}] }"#;

/// Variant A: grounded-RAG defaults.
pub const VARIANT_A: VariantTemplate = VariantTemplate {
    system: "You are a sentiment analyst in a multi-agent RAG system. \
        Ground sentiment in the provided text and documents.",
    constraints: "- Use only the given text and documents.\n\
        - If sentiment is mixed, explain briefly why.\n\
        - Output JSON only.",
    example: "",
};

/// Variant B: aspect-based with a worked example.
pub const VARIANT_B: VariantTemplate = VariantTemplate {
    system: "You are an aspect-based sentiment analyzer. The caller may supply aspects.",
    constraints: "- If granularity is aspect, use provided aspects; otherwise infer 3–5.\n\
        - Keep rationales to one sentence each.\n\
        - Output JSON only.",
    example: r#"Example:
Input text:
The app is smooth, but the subscription fee is steep.
granularity: aspect
aspects: performance, pricing
Output JSON:
{ "sentiment": "mixed", "confidence": 0.8, "rationale": "Positive on performance, negative on pricing.", "aspect_sentiments": [{"aspect": "performance", "sentiment": "positive", "confidence": 0.9, "rationale": "Smooth experience."}, {"aspect": "pricing", "sentiment": "negative", "confidence": 0.8, "rationale": "Fee is steep."}]}"#,
};

/// Variant C: strict classifier, conflicts resolve to mixed.
pub const VARIANT_C: VariantTemplate = VariantTemplate {
    system: "You are a strict, evidence-grounded sentiment classifier in a RAG pipeline.",
    constraints: "- If evidence conflicts, choose mixed and state the conflict briefly.\n\
        - Avoid hedging language; express confidence numerically.\n\
        - Think step-by-step internally, but output only the final JSON.\n\
        - Output JSON only.",
    example: "",
};

pub(crate) fn render(template: &VariantTemplate, req: &AnalyzeSentimentRequest) -> PromptPair {
    let aspects = match req.aspects.as_deref() {
        Some(list) if !list.is_empty() => list.join(", "),
        _ => NO_ASPECTS.to_string(),
    };

    let fields = format!(
        "granularity: {}\naspects: {aspects}\nreturn_rationale: {}",
        req.granularity.as_str(),
        req.return_rationale
    );

    let user = UserMessage {
        task_line: TASK_LINE,
        example: template.example,
        input_text: &req.input_text,
        documents: req.documents.as_deref(),
        fields,
        output_shape: OUTPUT_SHAPE,
        constraints: template.constraints.to_string(),
    }
    .render();

    PromptPair {
        system: template.system.to_string(),
        user,
    }
}
