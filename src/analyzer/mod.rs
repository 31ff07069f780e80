//! Source analysis
//!
//! Turns a source reference (remote URL, local path, inline base64) into a
//! byte buffer, an object name, and an asset classification ready for upload.

pub mod mime;
pub mod mock;
pub mod source;

pub use mock::MockAnalyzer;
pub use source::SourceAnalyzer;

use crate::models::AnalyzedAsset;
use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait Analyzer: Send + Sync {
    /// Resolve `source`. When `filename` is given it is used as the object
    /// name, otherwise one is derived from the payload.
    async fn analyze(&self, source: &str, filename: Option<&str>) -> Result<AnalyzedAsset>;
}
