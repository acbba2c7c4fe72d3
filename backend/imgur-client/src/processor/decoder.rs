//! Turns Imgur response bodies into typed values or [`ApiClientError::Api`].
//!
//! Imgur wraps everything in `{"data", "success", "status"}`. The decoder reads
//! the `success` flag first and only then commits to either the payload type
//! or the error envelope, so callers never see a half-decoded value.

use crate::error::ApiClientError;

use common::HttpStatusCode;
use models::{ApiEnvelope, ApiErrorEnvelope, TokenResponse};

use log::warn;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

const ACCESS_TOKEN_FIELD: &str = "access_token";

/// Decode a response body into `T`.
///
/// # Errors
/// - [`ApiClientError::MalformedResponse`] if the body is not JSON, or fits
///   neither envelope
/// - [`ApiClientError::TypeMismatch`] if `data` does not match `T`
/// - [`ApiClientError::Api`] if Imgur reported a failure
pub fn decode<T: DeserializeOwned>(
    body: &[u8],
    http_status: u16,
) -> Result<ApiEnvelope<T>, ApiClientError> {
    decode_value(parse_body(body)?, http_status)
}

/// Decode a token endpoint body.
///
/// The token endpoint answers with the bare token object; some proxies and
/// older API versions wrap it in the regular envelope. Both are accepted.
pub fn decode_token(body: &[u8], http_status: u16) -> Result<TokenResponse, ApiClientError> {
    let value = parse_body(body)?;

    if value.get(ACCESS_TOKEN_FIELD).is_some() {
        return serde_json::from_value(value).map_err(|e| {
            ApiClientError::type_mismatch(format!("Token response has an unexpected shape: {e}"))
        });
    }

    decode_value::<TokenResponse>(value, http_status).map(|envelope| envelope.data)
}

fn parse_body(body: &[u8]) -> Result<Value, ApiClientError> {
    serde_json::from_slice(body).map_err(|e| {
        ApiClientError::malformed_response(format!("Response body is not valid JSON: {e}"))
    })
}

fn decode_value<T: DeserializeOwned>(
    value: Value,
    http_status: u16,
) -> Result<ApiEnvelope<T>, ApiClientError> {
    let Value::Object(mut envelope) = value else {
        return Err(ApiClientError::malformed_response(
            "Response body is not a JSON object",
        ));
    };

    let status = envelope
        .get("status")
        .and_then(Value::as_u64)
        .and_then(|status| u16::try_from(status).ok())
        .unwrap_or(http_status);

    let success = match envelope.get("success") {
        Some(Value::Bool(flag)) => *flag,
        Some(other) => {
            return Err(ApiClientError::malformed_response(format!(
                "Envelope `success` is not a boolean: {other}"
            )));
        }
        None => {
            let success = HttpStatusCode(http_status).is_success();
            if success {
                warn!(
                    "Response envelope has no `success` field; treating HTTP {http_status} as success"
                );
            }
            success
        }
    };

    if !success {
        return Err(decode_error(envelope, status));
    }

    let data = envelope.remove("data").unwrap_or(Value::Null);

    Ok(ApiEnvelope {
        data: decode_data(data)?,
        success,
        status,
    })
}

fn decode_data<T: DeserializeOwned>(data: Value) -> Result<T, ApiClientError> {
    if is_empty_payload(&data) {
        // Only sequences have a meaningful "nothing here" value.
        return serde_json::from_value(Value::Array(Vec::new())).map_err(|_| {
            ApiClientError::type_mismatch("Response data is empty but a single value was expected")
        });
    }

    serde_json::from_value(data).map_err(|e| {
        ApiClientError::type_mismatch(format!("Response data has an unexpected shape: {e}"))
    })
}

fn is_empty_payload(data: &Value) -> bool {
    match data {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

fn decode_error(envelope: Map<String, Value>, status: u16) -> ApiClientError {
    // OAuth-style `{"error": "invalid_grant"}` bodies have no `data` wrapper.
    if !envelope.contains_key("data") {
        if let Some(message) = envelope.get("error").and_then(Value::as_str) {
            return ApiClientError::api(status, message, None, None);
        }
    }

    match serde_json::from_value::<ApiErrorEnvelope>(Value::Object(envelope)) {
        Ok(error) => ApiClientError::api(
            status,
            error.data.error.message(),
            error.data.request,
            error.data.method,
        ),
        Err(e) => ApiClientError::malformed_response(format!(
            "Failure response does not match the error envelope: {e}"
        )),
    }
}
