use super::mime::{detect_mime, extension_for};
use super::Analyzer;
use crate::models::AnalyzedAsset;
use crate::{Error, Result};
use async_trait::async_trait;
use base64::Engine as _;
use bytes::Bytes;
use percent_encoding::percent_decode_str;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Url};
use sha2::{Digest, Sha256};
use std::path::PathBuf;

/// Default analyzer: fetches `http(s)://` sources, reads `file://` URLs and
/// local paths, and decodes `data:` / `base64://` payloads.
pub struct SourceAnalyzer {
    client: Client,
}

struct Loaded {
    data: Bytes,
    mime: Option<String>,
}

impl SourceAnalyzer {
    pub fn new() -> Self {
        Self::with_client(Client::new())
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    async fn load(&self, source: &str) -> Result<Loaded> {
        if source.starts_with("http://") || source.starts_with("https://") {
            self.fetch(source).await
        } else if let Some(rest) = source.strip_prefix("data:") {
            decode_data_url(rest)
        } else if let Some(rest) = source.strip_prefix("base64://") {
            Ok(Loaded {
                data: decode_base64(rest)?,
                mime: None,
            })
        } else if source.starts_with("file://") {
            let path = Url::parse(source)
                .ok()
                .and_then(|url| url.to_file_path().ok())
                .ok_or_else(|| Error::Analysis(format!("invalid file URL: {}", source)))?;
            read_local(path).await
        } else {
            read_local(PathBuf::from(source)).await
        }
    }

    async fn fetch(&self, url: &str) -> Result<Loaded> {
        tracing::debug!("Fetching asset source {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Analysis(format!("failed to fetch {}: {}", url, e)))?;

        if !response.status().is_success() {
            return Err(Error::Analysis(format!(
                "failed to fetch {} (status {})",
                url,
                response.status()
            )));
        }

        let mime = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.split(';').next().unwrap_or_default().trim().to_string())
            .filter(|value| !value.is_empty());

        let data = response
            .bytes()
            .await
            .map_err(|e| Error::Analysis(format!("failed to read body of {}: {}", url, e)))?;

        Ok(Loaded { data, mime })
    }
}

impl Default for SourceAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

async fn read_local(path: PathBuf) -> Result<Loaded> {
    let data = tokio::fs::read(&path)
        .await
        .map_err(|e| Error::Analysis(format!("failed to read {}: {}", path.display(), e)))?;
    Ok(Loaded {
        data: Bytes::from(data),
        mime: None,
    })
}

fn decode_base64(payload: &str) -> Result<Bytes> {
    base64::engine::general_purpose::STANDARD
        .decode(payload.trim())
        .map(Bytes::from)
        .map_err(|e| Error::Analysis(format!("invalid base64 payload: {}", e)))
}

/// Parse the part of a data URL after `data:`.
fn decode_data_url(rest: &str) -> Result<Loaded> {
    let (meta, payload) = rest
        .split_once(',')
        .ok_or_else(|| Error::Analysis("malformed data URL".to_string()))?;

    let mut parts = meta.split(';');
    let mime = parts
        .next()
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string);
    let is_base64 = parts.any(|p| p.eq_ignore_ascii_case("base64"));

    let data = if is_base64 {
        decode_base64(payload)?
    } else {
        Bytes::from(percent_decode_str(payload).collect::<Vec<u8>>())
    };

    Ok(Loaded { data, mime })
}

fn hashed_filename(data: &[u8], mime: &str) -> String {
    let digest = Sha256::digest(data);
    format!("{}.{}", hex::encode(digest), extension_for(mime))
}

#[async_trait]
impl Analyzer for SourceAnalyzer {
    async fn analyze(&self, source: &str, filename: Option<&str>) -> Result<AnalyzedAsset> {
        let loaded = self.load(source).await?;

        if loaded.data.is_empty() {
            return Err(Error::Analysis(format!("source {} is empty", source)));
        }

        let mime = loaded
            .mime
            .unwrap_or_else(|| detect_mime(&loaded.data).to_string());

        let filename = match filename.filter(|name| !name.is_empty()) {
            Some(name) => name.to_string(),
            None => hashed_filename(&loaded.data, &mime),
        };

        Ok(AnalyzedAsset::new(loaded.data, filename, &mime))
    }
}
