use crate::Image;

use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Album {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub datetime: DateTime<Utc>,
    #[serde(default)]
    pub cover: Option<String>,
    #[serde(default)]
    pub account_url: Option<String>,
    #[serde(default)]
    pub account_id: Option<i64>,
    #[serde(default)]
    pub privacy: Option<String>,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub favorite: Option<bool>,
    #[serde(default)]
    pub nsfw: Option<bool>,
    #[serde(default)]
    pub deletehash: Option<String>,
    #[serde(default)]
    pub images_count: u32,
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub ups: Option<i64>,
    #[serde(default)]
    pub downs: Option<i64>,
    #[serde(default)]
    pub points: Option<i64>,
}
