use crate::{Album, Image};

use std::fmt;

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A gallery post is either a single image or an album; Imgur tells them
/// apart with the `is_album` flag.
#[derive(Debug, Clone, PartialEq)]
pub enum GalleryItem {
    Album(Album),
    Image(Image),
}

impl GalleryItem {
    pub fn id(&self) -> &str {
        match self {
            Self::Album(album) => &album.id,
            Self::Image(image) => &image.id,
        }
    }

    pub fn is_album(&self) -> bool {
        matches!(self, Self::Album(_))
    }
}

impl<'de> Deserialize<'de> for GalleryItem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let is_album = value
            .get("is_album")
            .and_then(Value::as_bool)
            .unwrap_or(false);

        if is_album {
            Album::deserialize(value)
                .map(GalleryItem::Album)
                .map_err(DeError::custom)
        } else {
            Image::deserialize(value)
                .map(GalleryItem::Image)
                .map_err(DeError::custom)
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GallerySection {
    #[default]
    Hot,
    Top,
    User,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GallerySort {
    #[default]
    Viral,
    Top,
    Time,
    /// Only valid for the `user` section.
    Rising,
}

/// Time window for the `top` section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GalleryWindow {
    #[default]
    Day,
    Week,
    Month,
    Year,
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vote {
    Up,
    Down,
    Veto,
}

impl GallerySection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hot => "hot",
            Self::Top => "top",
            Self::User => "user",
        }
    }
}

impl GallerySort {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Viral => "viral",
            Self::Top => "top",
            Self::Time => "time",
            Self::Rising => "rising",
        }
    }
}

impl GalleryWindow {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
            Self::All => "all",
        }
    }
}

impl Vote {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Veto => "veto",
        }
    }
}

impl fmt::Display for Vote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
