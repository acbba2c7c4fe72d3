//! The JSON wrappers Imgur puts around every API response.

use serde::Deserialize;

/// Successful response: `{"data": ..., "success": true, "status": 200}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiEnvelope<T> {
    pub data: T,
    pub success: bool,
    pub status: u16,
}

/// Failed response: `{"data": {"error": ..., "request": ..., "method": ...}, "success": false, "status": 4xx}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiErrorEnvelope {
    pub data: ApiErrorData,
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub status: Option<u16>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiErrorData {
    pub error: ApiErrorDetail,
    #[serde(default)]
    pub request: Option<String>,
    #[serde(default)]
    pub method: Option<String>,
}

/// Most endpoints report a plain string; the upload endpoints nest an object.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ApiErrorDetail {
    Message(String),
    Detailed {
        message: String,
        #[serde(default)]
        code: Option<i64>,
    },
}

impl ApiErrorDetail {
    pub fn message(&self) -> &str {
        match self {
            Self::Message(message) => message,
            Self::Detailed { message, .. } => message,
        }
    }
}
