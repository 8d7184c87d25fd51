use crate::config::types::{Config, FetchConfig, OutputConfig};
use crate::ConfigError;

/// Upper bound accepted for `max-redirects`
const MAX_REDIRECTS_LIMIT: usize = 20;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_fetch_config(&config.fetch)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates fetch configuration
fn validate_fetch_config(config: &FetchConfig) -> Result<(), ConfigError> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    // Header values cannot carry control characters
    if config.user_agent.chars().any(|c| c.is_control()) {
        return Err(ConfigError::Validation(format!(
            "user_agent contains control characters: {:?}",
            config.user_agent
        )));
    }

    if config.max_redirects > MAX_REDIRECTS_LIMIT {
        return Err(ConfigError::Validation(format!(
            "max_redirects must be at most {}, got {}",
            MAX_REDIRECTS_LIMIT, config.max_redirects
        )));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if let Some(path) = &config.report_path {
        if path.trim().is_empty() {
            return Err(ConfigError::Validation(
                "report_path cannot be empty when set".to_string(),
            ));
        }
    }

    Ok(())
}
