use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Image {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub datetime: DateTime<Utc>,
    #[serde(rename = "type", default)]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub animated: bool,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub views: u64,
    /// Only present for images owned by the caller or uploaded anonymously.
    #[serde(default)]
    pub deletehash: Option<String>,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub favorite: Option<bool>,
    #[serde(default)]
    pub nsfw: Option<bool>,
    #[serde(default)]
    pub vote: Option<String>,
    #[serde(default)]
    pub in_gallery: bool,
    #[serde(default)]
    pub ups: Option<i64>,
    #[serde(default)]
    pub downs: Option<i64>,
    #[serde(default)]
    pub points: Option<i64>,
}
