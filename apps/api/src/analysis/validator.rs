use crate::config::Config;
use crate::errors::AppError;

/// Rejects blank input, then looks up the credential.
///
/// Returns the API key on success. Runs before any prompt is built or any
/// oracle call is made. Documents and aspects are trusted as-is.
pub fn validate(input_text: &str, config: &Config) -> Result<String, AppError> {
    if input_text.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "input_text must be non-empty".to_string(),
        ));
    }

    config.api_key().ok_or_else(|| {
        AppError::MissingCredential(format!("{} is not set", config.api_key_var))
    })
}
