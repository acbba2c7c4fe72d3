//! Shared building blocks for the Imgur client workspace.
//!
//! Nothing in here knows about Imgur. These are the pieces every other crate
//! reaches for when it needs to report an error or hold a credential.
//!
//! ## Architecture
//!
//! - **common** (this crate): error locations, status codes, secrets
//! - **models**: wire and domain data structures
//! - **imgur-client**: request pipeline, OAuth2 flows and endpoints
//! - **imgur-auth**: command line login tool wiring everything together

pub mod error;
pub mod http_status;
pub mod redacted_secret;

pub use error::error_location::ErrorLocation;
pub use error::redact_error::RedactError;
pub use http_status::HttpStatusCode;
pub use redacted_secret::RedactedSecret;

#[cfg(test)]
mod tests;
