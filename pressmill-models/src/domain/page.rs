use crate::enums::content::{CommentPolicy, PageStatus, PageVisibility, ReviewState};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Page information
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: i32,
    pub title: String,
    pub slug: String,
    #[serde(with = "pressmill_codec::wire_field")]
    pub status: PageStatus,
    #[serde(with = "pressmill_codec::wire_field")]
    pub visibility: PageVisibility,
    #[serde(with = "pressmill_codec::wire_field")]
    pub comment_policy: CommentPolicy,
    #[serde(default, with = "pressmill_codec::wire_field_opt")]
    pub review_state: Option<ReviewState>,
    pub body: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Payload for creating a page
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewPage {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(min = 1, max = 200))]
    pub slug: String,
    #[serde(with = "pressmill_codec::wire_field")]
    pub status: PageStatus,
    #[serde(with = "pressmill_codec::wire_field")]
    pub visibility: PageVisibility,
    #[serde(default, with = "pressmill_codec::wire_field_opt")]
    pub comment_policy: Option<CommentPolicy>,
    pub body: Option<String>,
}
