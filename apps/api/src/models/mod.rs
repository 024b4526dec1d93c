pub mod common;
pub mod sentiment;
pub mod summary;

pub use common::{Document, PromptVariant, Usage};
pub use sentiment::{
    AnalyzeSentimentRequest, AnalyzeSentimentResponse, AspectSentiment, Granularity, Sentiment,
};
pub use summary::{Citation, SummarizeRequest, SummarizeResponse};
