use crate::enums::media::{FileStatus, MediaKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Uploaded file information
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaFile {
    pub id: i32,
    pub file_name: String,
    pub content_type: String,
    pub size_bytes: i64,
    #[serde(with = "pressmill_codec::wire_field")]
    pub kind: MediaKind,
    #[serde(with = "pressmill_codec::wire_field")]
    pub status: FileStatus,
    pub alt_text: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}
