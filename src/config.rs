//! Plugin configuration
//!
//! Mirrors the options a host passes to the plugin. The configuration is
//! validated once when the service is built and is read-only afterwards.

use crate::{Error, Result};
use reqwest::Url;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Base address of the copyparty server.
    pub endpoint: String,
    /// Folder on the server that receives uploads.
    pub bin: String,
    /// Sent verbatim in the `PW` header, even when empty.
    #[serde(default)]
    pub password: String,
    /// Prefix substituted for `endpoint` in returned URLs.
    #[serde(default)]
    pub replace: Option<String>,
    #[serde(default, alias = "loggerinfo")]
    pub logger_info: bool,
}

impl Config {
    pub fn new(endpoint: impl Into<String>, bin: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            bin: bin.into(),
            password: String::new(),
            replace: None,
            logger_info: false,
        }
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    pub fn with_replace(mut self, replace: impl Into<String>) -> Self {
        self.replace = Some(replace.into());
        self
    }

    pub fn with_logger_info(mut self, enabled: bool) -> Self {
        self.logger_info = enabled;
        self
    }

    /// Parse the host's JSON options object.
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let logger_info = match std::env::var("COPYPARTY_LOGGER_INFO") {
            Ok(value) => parse_flag(&value)?,
            Err(_) => false,
        };

        Ok(Self {
            endpoint: std::env::var("COPYPARTY_ENDPOINT")
                .map_err(|_| Error::Config("COPYPARTY_ENDPOINT not set".to_string()))?,
            bin: std::env::var("COPYPARTY_BIN")
                .map_err(|_| Error::Config("COPYPARTY_BIN not set".to_string()))?,
            password: std::env::var("COPYPARTY_PASSWORD").unwrap_or_default(),
            replace: std::env::var("COPYPARTY_REPLACE").ok(),
            logger_info,
        })
    }

    /// Check required fields and URL shapes, returning the normalised config.
    ///
    /// An empty `replace` is treated as unset.
    pub fn validate(mut self) -> Result<Self> {
        if self.endpoint.trim().is_empty() {
            return Err(Error::Config("endpoint must not be empty".to_string()));
        }
        if self.bin.trim().is_empty() {
            return Err(Error::Config("bin must not be empty".to_string()));
        }

        let endpoint = Url::parse(&self.endpoint)
            .map_err(|e| Error::Config(format!("invalid endpoint '{}': {}", self.endpoint, e)))?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "endpoint must use http or https, got '{}'",
                endpoint.scheme()
            )));
        }

        if self.replace.as_deref().is_some_and(|r| r.is_empty()) {
            self.replace = None;
        }
        if let Some(replace) = &self.replace {
            Url::parse(replace)
                .map_err(|e| Error::Config(format!("invalid replace '{}': {}", replace, e)))?;
        }

        Ok(self)
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        other => Err(Error::Config(format!(
            "COPYPARTY_LOGGER_INFO must be a boolean, got '{}'",
            other
        ))),
    }
}
