use super::AssetService;
use crate::analyzer::{Analyzer, SourceAnalyzer};
use crate::config::Config;
use crate::logger::{logger_for, DiagnosticLogger};
use crate::models::{AnalyzedAsset, Stats, UploadResponse};
use crate::urls::{compose_upload_url, rewrite_url};
use crate::{Error, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use std::sync::Arc;

/// Disables copyparty's upload checksum check.
const CHECK_HEADER: HeaderName = HeaderName::from_static("ck");
const PASSWORD_HEADER: HeaderName = HeaderName::from_static("pw");

/// Stores assets on a copyparty server with one PUT per upload.
pub struct CopypartyAssets {
    config: Config,
    client: Client,
    password: HeaderValue,
    analyzer: Arc<dyn Analyzer>,
    logger: Arc<dyn DiagnosticLogger>,
}

impl CopypartyAssets {
    /// Validate `config` and build the HTTP client. The client sends
    /// `Accept: application/json` on every request.
    pub fn new(config: Config) -> Result<Self> {
        let config = config.validate()?;

        let mut password = HeaderValue::from_str(&config.password)
            .map_err(|e| Error::Config(format!("password is not a valid header value: {}", e)))?;
        password.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let client = Client::builder().default_headers(headers).build()?;

        let logger = logger_for(&config);
        logger.info(&format!(
            "Initialized - endpoint: {}, bin: {}",
            config.endpoint, config.bin
        ));

        Ok(Self {
            config,
            client,
            password,
            analyzer: Arc::new(SourceAnalyzer::new()),
            logger,
        })
    }

    pub fn with_analyzer(mut self, analyzer: Arc<dyn Analyzer>) -> Self {
        self.analyzer = analyzer;
        self
    }

    pub fn with_logger(mut self, logger: Arc<dyn DiagnosticLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Upload an already analyzed asset and return its public URL.
    ///
    /// Any failure is logged once and returned as [`Error::Upload`]. Nothing
    /// is retried.
    pub async fn upload_asset(&self, asset: &AnalyzedAsset) -> Result<String> {
        let upload_url =
            compose_upload_url(&self.config.endpoint, &self.config.bin, &asset.filename);

        self.logger.info(&format!(
            "Uploading {} (type: {}) to {}",
            asset.filename, asset.asset_type, upload_url
        ));

        let file_url = self.put(&upload_url, asset).await.map_err(|e| {
            self.logger
                .error(&format!("Upload of {} failed: {}", asset.filename, e));
            e
        })?;
        self.logger.info(&format!("Uploaded: {}", file_url));

        if self.config.replace.is_none() {
            return Ok(file_url);
        }

        let rewritten = rewrite_url(
            &file_url,
            &self.config.endpoint,
            self.config.replace.as_deref(),
        );
        self.logger.info(&format!("Rewritten: {}", rewritten));
        Ok(rewritten)
    }

    async fn put(&self, url: &str, asset: &AnalyzedAsset) -> Result<String> {
        let response = self
            .client
            .put(url)
            .header(CONTENT_TYPE, "application/octet-stream")
            .header(CHECK_HEADER, "no")
            .header(PASSWORD_HEADER, self.password.clone())
            .body(asset.buffer.clone())
            .send()
            .await
            .map_err(|e| Error::Upload(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(Error::Upload(format!(
                "server responded with status {}: {}",
                status,
                error_text.trim()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::Upload(format!("failed to read response: {}", e)))?;
        let parsed: UploadResponse = serde_json::from_str(&body)
            .map_err(|e| Error::Upload(format!("invalid response body: {}", e)))?;

        parsed
            .fileurl
            .filter(|url| !url.is_empty())
            .ok_or_else(|| Error::Upload("response missing fileurl".to_string()))
    }
}

#[async_trait]
impl AssetService for CopypartyAssets {
    async fn upload(&self, source: &str, filename: Option<&str>) -> Result<String> {
        let asset = self.analyzer.analyze(source, filename).await?;
        self.upload_asset(&asset).await
    }

    async fn stats(&self) -> Result<Stats> {
        // copyparty exposes no usage figures through this API.
        Ok(Stats::default())
    }
}
