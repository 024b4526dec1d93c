use std::sync::Arc;

use crate::config::Config;
use crate::oracle::CompletionOracle;

/// Shared application state injected into all route handlers via Axum extractors.
/// Immutable; nothing in here changes between requests.
#[derive(Clone)]
pub struct AppState {
    /// Completion backend. `OpenAiClient` in production, a stub in tests.
    pub oracle: Arc<dyn CompletionOracle>,
    pub config: Config,
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::config::tests::config_with_key;

    pub fn test_state(oracle: Arc<dyn CompletionOracle>, api_key: Option<&str>) -> AppState {
        AppState {
            oracle,
            config: config_with_key(api_key),
        }
    }
}
