//! Asset service contract and the copyparty implementation
//!
//! Hosts hold an `AssetService` and call `upload` with whatever reference a
//! user supplied; the service returns a durable public URL.

pub mod client;
pub mod mock;

pub use client::CopypartyAssets;
pub use mock::MockAssetService;

use crate::models::{AssetType, Stats};
use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait AssetService: Send + Sync {
    /// Asset types this service will store.
    fn types(&self) -> &[AssetType] {
        &AssetType::ALL
    }

    async fn upload(&self, source: &str, filename: Option<&str>) -> Result<String>;
    async fn stats(&self) -> Result<Stats>;
}
