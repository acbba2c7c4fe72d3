use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Account {
    pub id: i64,
    /// Account username.
    pub url: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub reputation: f64,
    #[serde(default)]
    pub reputation_name: Option<String>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created: DateTime<Utc>,
}
