//! Data models and structures
//!
//! Defines the asset, response, and statistics types exchanged between the
//! analyzer, the upload executor, and the host.

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    Image,
    Img,
    Audio,
    Video,
    File,
}

impl AssetType {
    /// Every type the service accepts.
    pub const ALL: [AssetType; 5] = [
        AssetType::Image,
        AssetType::Img,
        AssetType::Audio,
        AssetType::Video,
        AssetType::File,
    ];

    /// Classify by primary MIME type; anything unrecognised is a plain file.
    pub fn from_mime(mime: &str) -> Self {
        match mime.split('/').next().map(str::trim) {
            Some("image") => AssetType::Image,
            Some("audio") => AssetType::Audio,
            Some("video") => AssetType::Video,
            _ => AssetType::File,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AssetType::Image => "image",
            AssetType::Img => "img",
            AssetType::Audio => "audio",
            AssetType::Video => "video",
            AssetType::File => "file",
        }
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetType {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AssetType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| crate::Error::Analysis(format!("unsupported asset type '{}'", s)))
    }
}

/// Output of the analyzer, consumed by a single upload call.
#[derive(Debug, Clone)]
pub struct AnalyzedAsset {
    pub buffer: Bytes,
    pub filename: String,
    pub mime: String,
    pub asset_type: AssetType,
}

impl AnalyzedAsset {
    pub fn new(buffer: impl Into<Bytes>, filename: impl Into<String>, mime: &str) -> Self {
        Self {
            buffer: buffer.into(),
            filename: filename.into(),
            mime: mime.to_string(),
            asset_type: AssetType::from_mime(mime),
        }
    }
}

/// copyparty's reply to a PUT. Only `fileurl` is read.
#[derive(Debug, Deserialize)]
pub struct UploadResponse {
    pub fileurl: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_size: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_type_from_mime() {
        assert_eq!(AssetType::from_mime("image/png"), AssetType::Image);
        assert_eq!(AssetType::from_mime("audio/ogg"), AssetType::Audio);
        assert_eq!(AssetType::from_mime("video/mp4"), AssetType::Video);
        assert_eq!(AssetType::from_mime("application/pdf"), AssetType::File);
        assert_eq!(AssetType::from_mime(""), AssetType::File);
    }

    #[test]
    fn test_asset_type_parse_and_display() {
        assert_eq!("img".parse::<AssetType>().unwrap(), AssetType::Img);
        assert_eq!(AssetType::Video.to_string(), "video");
        assert!("document".parse::<AssetType>().is_err());
    }

    #[test]
    fn test_asset_type_serialization() {
        let json = serde_json::to_string(&AssetType::Audio).unwrap();
        assert_eq!(json, "\"audio\"");
    }

    #[test]
    fn test_upload_response_ignores_extra_fields() {
        let response: UploadResponse = serde_json::from_str(
            r#"{"fileurl": "https://store.example/uploads/cat.png", "sha512": "abc", "size": 3}"#,
        )
        .unwrap();
        assert_eq!(
            response.fileurl.as_deref(),
            Some("https://store.example/uploads/cat.png")
        );
    }

    #[test]
    fn test_empty_stats_serializes_to_empty_object() {
        let json = serde_json::to_string(&Stats::default()).unwrap();
        assert_eq!(json, "{}");
    }
}
