use super::AssetService;
use crate::models::Stats;
use crate::urls::compose_upload_url;
use crate::{Error, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// In-memory stand-in for hosts that need an `AssetService` in their tests.
#[derive(Clone)]
pub struct MockAssetService {
    uploads: Arc<Mutex<HashMap<String, String>>>,
    base_url: String,
    bin: String,
    fail_with: Option<String>,
    upload_count: Arc<Mutex<usize>>,
}

impl MockAssetService {
    pub fn new() -> Self {
        Self {
            uploads: Arc::new(Mutex::new(HashMap::new())),
            base_url: "https://mock-store.example.com".to_string(),
            bin: "uploads".to_string(),
            fail_with: None,
            upload_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Make every upload fail with `Error::Upload(message)`.
    pub fn failing(mut self, message: &str) -> Self {
        self.fail_with = Some(message.to_string());
        self
    }

    pub fn get_upload_count(&self) -> usize {
        *self.upload_count.lock().unwrap()
    }

    /// Source reference recorded for each stored object name.
    pub fn get_uploads(&self) -> HashMap<String, String> {
        self.uploads.lock().unwrap().clone()
    }
}

impl Default for MockAssetService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AssetService for MockAssetService {
    async fn upload(&self, source: &str, filename: Option<&str>) -> Result<String> {
        *self.upload_count.lock().unwrap() += 1;

        if let Some(message) = &self.fail_with {
            return Err(Error::Upload(message.clone()));
        }

        let name = filename.unwrap_or_else(|| {
            source
                .rsplit(['/', '\\'])
                .next()
                .filter(|s| !s.is_empty())
                .unwrap_or("asset.bin")
        });

        self.uploads
            .lock()
            .unwrap()
            .insert(name.to_string(), source.to_string());
        Ok(compose_upload_url(&self.base_url, &self.bin, name))
    }

    async fn stats(&self) -> Result<Stats> {
        Ok(Stats::default())
    }
}
