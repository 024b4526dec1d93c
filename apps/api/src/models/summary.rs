use serde::{Deserialize, Serialize};

use crate::models::common::{default_true, Document, PromptVariant, Usage};

pub const MIN_WORDS: u32 = 20;
pub const MAX_WORDS: u32 = 500;
const DEFAULT_WORDS: u32 = 120;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryType {
    Bullet,
    #[default]
    Paragraph,
}

impl SummaryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SummaryType::Bullet => "bullet",
            SummaryType::Paragraph => "paragraph",
        }
    }
}

/// Soft word limit for a summary. Always within `MIN_WORDS..=MAX_WORDS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct MaxWords(u32);

impl MaxWords {
    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for MaxWords {
    fn default() -> Self {
        MaxWords(DEFAULT_WORDS)
    }
}

impl TryFrom<u32> for MaxWords {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        if (MIN_WORDS..=MAX_WORDS).contains(&value) {
            Ok(MaxWords(value))
        } else {
            Err(format!(
                "max_words must be between {MIN_WORDS} and {MAX_WORDS}, got {value}"
            ))
        }
    }
}

impl From<MaxWords> for u32 {
    fn from(value: MaxWords) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SummarizeRequest {
    pub input_text: String,
    #[serde(default)]
    pub documents: Option<Vec<Document>>,
    #[serde(default)]
    pub summary_type: SummaryType,
    #[serde(default)]
    pub max_words: MaxWords,
    #[serde(default = "default_true")]
    pub include_citations: bool,
    #[serde(default)]
    pub prompt_variant: PromptVariant,
}

/// Reference to a supplied document id. Not checked against the request's documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Citation {
    pub id: String,
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummarizeResponse {
    pub summary: String,
    pub citations: Vec<Citation>,
    pub model: String,
    pub usage: Usage,
}
