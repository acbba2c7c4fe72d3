use chrono::{DateTime, Utc};

/// Remaining request credits reported in the `X-RateLimit-*` headers.
///
/// Every field is optional: anonymous calls carry no user quota, and Imgur
/// omits the headers entirely on some endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RateLimitInfo {
    pub client_limit: Option<u32>,
    pub client_remaining: Option<u32>,
    pub user_limit: Option<u32>,
    pub user_remaining: Option<u32>,
    pub user_reset: Option<DateTime<Utc>>,
}

impl RateLimitInfo {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// True when either the client or user quota reports zero credits left.
    pub fn is_exhausted(&self) -> bool {
        self.client_remaining == Some(0) || self.user_remaining == Some(0)
    }
}
