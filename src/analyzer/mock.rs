use super::Analyzer;
use crate::models::AnalyzedAsset;
use crate::{Error, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Serves canned assets keyed by source reference.
#[derive(Clone, Default)]
pub struct MockAnalyzer {
    assets: Arc<Mutex<HashMap<String, AnalyzedAsset>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_asset(self, source: &str, asset: AnalyzedAsset) -> Self {
        self.assets
            .lock()
            .unwrap()
            .insert(source.to_string(), asset);
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

#[async_trait]
impl Analyzer for MockAnalyzer {
    async fn analyze(&self, source: &str, filename: Option<&str>) -> Result<AnalyzedAsset> {
        *self.call_count.lock().unwrap() += 1;

        let mut asset = self
            .assets
            .lock()
            .unwrap()
            .get(source)
            .cloned()
            .ok_or_else(|| Error::Analysis(format!("unknown source: {}", source)))?;

        if let Some(name) = filename {
            asset.filename = name.to_string();
        }
        Ok(asset)
    }
}
