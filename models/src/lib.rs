//! Data structures for the Imgur API.
//!
//! Two families live here:
//!
//! - wire shapes: the response envelopes, token endpoint body and resource
//!   records exactly as Imgur sends them
//! - domain values: [`ClientIdentity`], [`OAuth2Token`] and [`RateLimitInfo`],
//!   which the client crate owns and passes around
//!
//! Models carry validation but no I/O.

pub mod envelope;
pub mod error;
pub mod identity;
pub mod oauth2;
pub mod rate_limit;
pub mod resources;

pub use common::ErrorLocation;
pub use envelope::{ApiEnvelope, ApiErrorData, ApiErrorDetail, ApiErrorEnvelope};
pub use error::model_error::ModelError;
pub use identity::ClientIdentity;
pub use identity::builder::ClientIdentityBuilder;
pub use oauth2::{GrantType, OAuth2ResponseType, OAuth2Token, TokenResponse};
pub use rate_limit::RateLimitInfo;
pub use resources::{
    Account, Album, BasicId, Comment, GalleryItem, GallerySection, GallerySort, GalleryWindow,
    Image, Vote,
};

#[cfg(test)]
mod tests;
