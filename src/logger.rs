//! Diagnostic logging for the upload pipeline
//!
//! The service talks to an injected [`DiagnosticLogger`] instead of checking
//! the `logger_info` flag at every call site.

use crate::config::Config;
use std::sync::Arc;

pub trait DiagnosticLogger: Send + Sync {
    fn info(&self, message: &str);
    fn error(&self, message: &str);
}

/// Emits progress and failures through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl DiagnosticLogger for TracingLogger {
    fn info(&self, message: &str) {
        tracing::info!(target: "assets_copyparty", "{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!(target: "assets_copyparty", "{}", message);
    }
}

/// Drops progress messages. Failures are still reported.
#[derive(Debug, Default, Clone, Copy)]
pub struct QuietLogger;

impl DiagnosticLogger for QuietLogger {
    fn info(&self, _message: &str) {}

    fn error(&self, message: &str) {
        tracing::error!(target: "assets_copyparty", "{}", message);
    }
}

pub fn logger_for(config: &Config) -> Arc<dyn DiagnosticLogger> {
    if config.logger_info {
        Arc::new(TracingLogger)
    } else {
        Arc::new(QuietLogger)
    }
}


#[cfg(test)]
mod tests {
    use super::recording::capture_events;
    use super::*;
    use pretty_assertions::assert_eq;
    use tracing::Level;

    fn config(logger_info: bool) -> Config {
        Config::new("https://store.example", "uploads").with_logger_info(logger_info)
    }

    #[test]
    fn test_disabled_flag_drops_progress_but_keeps_errors() {
        let (_guard, events) = capture_events();

        let logger = logger_for(&config(false));
        logger.info("uploading cat.png");
        logger.error("upload failed");

        assert_eq!(
            *events.lock().unwrap(),
            vec![(Level::ERROR, "upload failed".to_string())]
        );
    }

    #[test]
    fn test_enabled_flag_emits_progress_and_errors() {
        let (_guard, events) = capture_events();

        let logger = logger_for(&config(true));
        logger.info("uploading cat.png");
        logger.error("upload failed");

        assert_eq!(
            *events.lock().unwrap(),
            vec![
                (Level::INFO, "uploading cat.png".to_string()),
                (Level::ERROR, "upload failed".to_string()),
            ]
        );
    }

    #[test]
    fn test_default_config_is_quiet() {
        let (_guard, events) = capture_events();

        let config = Config::from_json(r#"{"endpoint": "https://store.example", "bin": "up"}"#)
            .unwrap();
        logger_for(&config).info("initialized");

        assert!(events.lock().unwrap().is_empty());
    }
}
