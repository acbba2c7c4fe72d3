use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub image_id: String,
    pub comment: String,
    pub author: String,
    #[serde(default)]
    pub author_id: i64,
    #[serde(default)]
    pub on_album: bool,
    #[serde(default)]
    pub album_cover: Option<String>,
    #[serde(default)]
    pub ups: i64,
    #[serde(default)]
    pub downs: i64,
    #[serde(default)]
    pub points: f64,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub datetime: DateTime<Utc>,
    /// Zero for top-level comments.
    #[serde(default)]
    pub parent_id: i64,
    #[serde(default)]
    pub deleted: bool,
    #[serde(default)]
    pub vote: Option<String>,
    #[serde(default)]
    pub children: Vec<Comment>,
}
