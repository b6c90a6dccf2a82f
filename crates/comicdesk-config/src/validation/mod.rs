//! Full configuration validation.
//!
//! Each section has its own validator; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod compositor;
mod helpers;
mod logging;
mod windows;


use crate::schema::DeskConfig;
use comicdesk_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &DeskConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    windows::validate_windows(&mut errors, config);
    compositor::validate_compositor(&mut errors, config);
    logging::validate_logging(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
