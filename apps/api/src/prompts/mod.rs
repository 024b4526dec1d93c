//! Prompt Builder: turns a request into a system + user message pair.
//!
//! Every (task, variant) combination is an independent literal template in
//! `summarize.rs` / `sentiment.rs`. Variant dispatch happens only in
//! [`build_prompt`]; the renderers never branch on the variant.

use crate::models::{AnalyzeSentimentRequest, Document, PromptVariant, SummarizeRequest};

pub mod sentiment;
pub mod summarize;

/// Placeholder rendered in place of an empty document list.
pub const NO_DOCUMENTS: &str = "No documents provided.";

/// The two messages sent to the oracle. Identical shape across all variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptPair {
    pub system: String,
    pub user: String,
}

/// One fixed prompt configuration.
#[derive(Debug)]
pub struct VariantTemplate {
    pub system: &'static str,
    /// Bullet list appended under `Constraints:`. May contain `{placeholders}`.
    pub constraints: &'static str,
    /// Worked example placed ahead of the input. Empty when the variant has none.
    pub example: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub enum Task<'a> {
    Summarize(&'a SummarizeRequest),
    Sentiment(&'a AnalyzeSentimentRequest),
}

/// Builds the message pair for a task. Pure and deterministic.
pub fn build_prompt(task: Task<'_>) -> PromptPair {
    match task {
        Task::Summarize(req) => {
            let template = match req.prompt_variant {
                PromptVariant::A => &summarize::VARIANT_A,
                PromptVariant::B => &summarize::VARIANT_B,
                PromptVariant::C => &summarize::VARIANT_C,
            };
            summarize::render(template, req)
        }
        Task::Sentiment(req) => {
            let template = match req.prompt_variant {
                PromptVariant::A => &sentiment::VARIANT_A,
                PromptVariant::B => &sentiment::VARIANT_B,
                PromptVariant::C => &sentiment::VARIANT_C,
            };
            sentiment::render(template, req)
        }
    }
}

/// Renders documents as one indented record per document, in request order.
pub fn format_documents(documents: Option<&[Document]>) -> String {
    match documents {
        Some(docs) if !docs.is_empty() => docs
            .iter()
            .map(|doc| {
                format!(
                    "- id: {}\n  title: {}\n  source: {}\n  content: {}",
                    doc.id, doc.title, doc.source, doc.content
                )
            })
            .collect::<Vec<_>>()
            .join("\n"),
        _ => NO_DOCUMENTS.to_string(),
    }
}

/// Sections shared by every user message.
pub(crate) struct UserMessage<'a> {
    pub task_line: &'a str,
    pub example: &'a str,
    pub input_text: &'a str,
    pub documents: Option<&'a [Document]>,
    pub fields: String,
    pub output_shape: &'a str,
    pub constraints: String,
}

impl UserMessage<'_> {
    pub fn render(self) -> String {
        format!(
            "Task: {}\n\n{}\n\nInput text:\n{}\n\nDocuments:\n{}\n\n{}\n\nOutput JSON format:\n{}\n\nConstraints:\n{}",
            self.task_line,
            self.example,
            self.input_text,
            format_documents(self.documents),
            self.fields,
            self.output_shape,
            self.constraints,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(id: &str) -> Document {
        Document {
            id: id.to_string(),
            title: format!("Title {id}"),
            content: format!("Content {id}"),
            source: "wiki".to_string(),
        }
    }

    fn summarize_request(variant: &str) -> SummarizeRequest {
        serde_json::from_value(json!({
            "input_text": "Quarterly revenue grew while churn fell.",
            "documents": [{"id": "d1", "title": "Q3", "content": "Revenue +8%", "source": "finance"}],
            "summary_type": "bullet",
            "max_words": 80,
            "prompt_variant": variant
        }))
        .unwrap()
    }

    fn sentiment_request(variant: &str) -> AnalyzeSentimentRequest {
        serde_json::from_value(json!({
            "input_text": "Support was quick but the docs are thin.",
            "granularity": "aspect",
            "aspects": ["support", "docs"],
            "prompt_variant": variant
        }))
        .unwrap()
    }

    #[test]
    fn test_format_documents_empty_or_absent() {
        assert_eq!(format_documents(None), NO_DOCUMENTS);
        assert_eq!(format_documents(Some(&[][..])), NO_DOCUMENTS);
    }

    #[test]
    fn test_format_documents_field_order_and_joining() {
        let rendered = format_documents(Some(&[doc("a"), doc("b")][..]));
        assert_eq!(
            rendered,
            "- id: a\n  title: Title a\n  source: wiki\n  content: Content a\n\
             - id: b\n  title: Title b\n  source: wiki\n  content: Content b"
        );
    }

    #[test]
    fn test_build_prompt_is_deterministic_for_every_variant() {
        for variant in ["A", "B", "C"] {
            let s = summarize_request(variant);
            assert_eq!(
                build_prompt(Task::Summarize(&s)),
                build_prompt(Task::Summarize(&s.clone()))
            );
            let a = sentiment_request(variant);
            assert_eq!(
                build_prompt(Task::Sentiment(&a)),
                build_prompt(Task::Sentiment(&a.clone()))
            );
        }
    }

    #[test]
    fn test_variants_produce_distinct_system_messages() {
        let systems: Vec<String> = ["A", "B", "C"]
            .iter()
            .map(|v| build_prompt(Task::Summarize(&summarize_request(v))).system)
            .collect();
        assert_ne!(systems[0], systems[1]);
        assert_ne!(systems[1], systems[2]);
        assert_ne!(systems[0], systems[2]);
    }

    #[test]
    fn test_every_variant_ends_with_json_only_constraint() {
        for variant in ["A", "B", "C"] {
            let s = build_prompt(Task::Summarize(&summarize_request(variant)));
            assert!(s.user.ends_with("- Output JSON only."), "summarize {variant}");
            assert!(s.user.contains("Output JSON format:\n"));
            let a = build_prompt(Task::Sentiment(&sentiment_request(variant)));
            assert!(a.user.ends_with("- Output JSON only."), "sentiment {variant}");
            assert!(a.user.contains("Output JSON format:\n"));
        }
    }

    #[test]
    fn test_user_message_sections_appear_in_order() {
        let pair = build_prompt(Task::Summarize(&summarize_request("A")));
        let positions: Vec<usize> = [
            "Task:",
            "Input text:\n",
            "Documents:\n",
            "summary_type:",
            "Output JSON format:",
            "Constraints:\n",
        ]
        .iter()
        .map(|marker| pair.user.find(marker).unwrap())
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
