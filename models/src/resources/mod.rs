//! Resource records returned by the account, image, album, comment and gallery endpoints.
//!
//! Only the fields the client actually uses are modelled; Imgur sends many more
//! and serde skips them.

pub mod account;
pub mod album;
pub mod comment;
pub mod gallery;
pub mod image;

pub use account::Account;
pub use album::Album;
pub use comment::Comment;
pub use gallery::{GalleryItem, GallerySection, GallerySort, GalleryWindow, Vote};
pub use image::Image;

use serde::Deserialize;

/// `{"id": ...}` returned by create calls.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BasicId {
    pub id: i64,
}
