// Prompt templates for the summarize task.
// Placeholders: {summary_type}, {max_words}.

use crate::models::SummarizeRequest;
use crate::prompts::{PromptPair, UserMessage, VariantTemplate};

const TASK_LINE: &str = "Summarize the input text into the requested format and length.";

/// JSON shape the model must return.
pub const OUTPUT_SHAPE: &str =
    r#"{ "summary": "string", "citations": [{"id": "string", "source": "string"}] }"#;

/// Variant A: grounded-RAG defaults.
pub const VARIANT_A: VariantTemplate = VariantTemplate {
    system: "You are a precise summarizer in a multi-agent RAG system. \
        When documents are provided, ground the summary in those documents and cite their ids.",
    constraints: "- Use only facts present in the input and provided documents.\n\
        - If documents exist, prefer them over the raw input for factual claims.\n\
        - Keep within max_words (soft limit): {max_words}.\n\
        - Output JSON only.",
    example: "",
};

/// Variant B: worked example.
pub const VARIANT_B: VariantTemplate = VariantTemplate {
    system: "You are an expert technical writer. \
        Produce concise, high-signal summaries that help downstream agents decide what to retrieve next.",
    constraints: "- Use summary_type: {summary_type}\n\
        - Emphasize key decisions, outcomes, and open questions.\n\
        - If evidence is in documents, include citations for those points.\n\
        - Output JSON only.",
    example: r#"Example:
Input text:
The beta rollout improved performance but raised hosting costs. Support tickets dropped after fixing login issues.
Documents:
- id: ex-1
  title: Beta Report
  source: internal
  content: Performance improved 15%; hosting costs +10%. Login bug fix reduced tickets.
Output JSON:
{ "summary": "- Performance improved 15% during beta.\n- Hosting costs rose 10%.\n- Login fix reduced support tickets.", "citations": [{"id": "ex-1", "source": "internal"}] }"#,
};

/// Variant C: silent reasoning.
pub const VARIANT_C: VariantTemplate = VariantTemplate {
    system: "You are a project analyst in a multi-agent RAG workflow. \
        Summaries must be actionable and accurate.",
    constraints: "- If summary_type is bullet, use 3–7 bullets.\n\
        - Maintain neutral tone; do not add new information.\n\
        - Use citations when documents are provided.\n\
        - Think step-by-step internally, but output only the final JSON.\n\
        - Output JSON only.",
    example: "",
};

pub(crate) fn render(template: &VariantTemplate, req: &SummarizeRequest) -> PromptPair {
    let summary_type = req.summary_type.as_str();
    let max_words = req.max_words.get().to_string();

    let constraints = template
        .constraints
        .replace("{summary_type}", summary_type)
        .replace("{max_words}", &max_words);

    let fields = format!(
        "summary_type: {summary_type}\nmax_words: {max_words}\ninclude_citations: {}",
        req.include_citations
    );

    let user = UserMessage {
        task_line: TASK_LINE,
        example: template.example,
        input_text: &req.input_text,
        documents: req.documents.as_deref(),
        fields,
        output_shape: OUTPUT_SHAPE,
        constraints,
    }
    .render();

    PromptPair {
        system: template.system.to_string(),
        user,
    }
}
