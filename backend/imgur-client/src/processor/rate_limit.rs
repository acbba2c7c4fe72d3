//! `X-RateLimit-*` header parsing.

use crate::transport::TransportResponse;

use models::RateLimitInfo;

use chrono::DateTime;
use log::debug;

pub const CLIENT_LIMIT_HEADER: &str = "X-RateLimit-ClientLimit";
pub const CLIENT_REMAINING_HEADER: &str = "X-RateLimit-ClientRemaining";
pub const USER_LIMIT_HEADER: &str = "X-RateLimit-UserLimit";
pub const USER_REMAINING_HEADER: &str = "X-RateLimit-UserRemaining";
pub const USER_RESET_HEADER: &str = "X-RateLimit-UserReset";

/// Missing or unparseable headers leave the field `None`.
pub fn parse_rate_limit(response: &TransportResponse) -> RateLimitInfo {
    RateLimitInfo {
        client_limit: header_number(response, CLIENT_LIMIT_HEADER),
        client_remaining: header_number(response, CLIENT_REMAINING_HEADER),
        user_limit: header_number(response, USER_LIMIT_HEADER),
        user_remaining: header_number(response, USER_REMAINING_HEADER),
        user_reset: header_number::<i64>(response, USER_RESET_HEADER)
            .and_then(|seconds| DateTime::from_timestamp(seconds, 0)),
    }
}

fn header_number<N: std::str::FromStr>(response: &TransportResponse, name: &str) -> Option<N> {
    let raw = response.header(name)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            debug!("Ignoring unparseable {name} header: {raw:?}");
            None
        }
    }
}
