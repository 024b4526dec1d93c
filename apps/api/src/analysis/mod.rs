// Summarize and sentiment analysis.
// All oracle calls go through `oracle::CompletionOracle`; nothing here talks HTTP.

pub mod lenient;
pub mod pipeline;
pub mod shaper;
pub mod validator;
