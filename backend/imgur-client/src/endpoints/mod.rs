//! Typed wrappers over [`RequestProcessor`](crate::processor::RequestProcessor).
//!
//! Each method validates its string inputs, builds an
//! [`OutgoingRequest`](crate::processor::OutgoingRequest) and names the type it
//! expects back. Nothing here touches the network directly.

pub mod account;
pub mod album;
pub mod comment;
pub mod gallery;
pub mod image;

pub use account::{AccountEndpoint, AccountQuery};
pub use album::AlbumEndpoint;
pub use comment::{CommentEndpoint, NewComment};
pub use gallery::{GalleryEndpoint, GalleryQuery};
pub use image::ImageEndpoint;

use crate::error::ApiClientError;

#[track_caller]
pub(crate) fn require_non_empty<'a>(name: &str, value: &'a str) -> Result<&'a str, ApiClientError> {
    if value.trim().is_empty() {
        return Err(ApiClientError::invalid_argument(format!(
            "{name} cannot be empty"
        )));
    }
    Ok(value)
}
