use super::require_non_empty;
use crate::error::ApiClientError;
use crate::processor::{OutgoingRequest, RequestProcessor};

use models::{GalleryItem, GallerySection, GallerySort, GalleryWindow, Vote};

/// Gallery listing parameters.
///
/// Defaults: `hot` section, `viral` sort, `day` window, page `0`, viral posts shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryQuery {
    pub section: GallerySection,
    pub sort: GallerySort,
    /// Only used by the `top` section.
    pub window: GalleryWindow,
    pub page: u32,
    pub show_viral: bool,
}

impl Default for GalleryQuery {
    fn default() -> Self {
        Self {
            section: GallerySection::default(),
            sort: GallerySort::default(),
            window: GalleryWindow::default(),
            page: 0,
            show_viral: true,
        }
    }
}

pub struct GalleryEndpoint<'a> {
    processor: &'a RequestProcessor,
}

impl<'a> GalleryEndpoint<'a> {
    pub fn new(processor: &'a RequestProcessor) -> Self {
        Self { processor }
    }

    pub async fn get_gallery(&self, query: &GalleryQuery) -> Result<Vec<GalleryItem>, ApiClientError> {
        let request = OutgoingRequest::get([
            "gallery".to_string(),
            query.section.as_str().to_string(),
            query.sort.as_str().to_string(),
            query.window.as_str().to_string(),
            query.page.to_string(),
        ])
        .with_query("showViral", query.show_viral.to_string());

        Ok(self.processor.execute(request).await?.into_data())
    }

    pub async fn vote_gallery_item(&self, id: &str, vote: Vote) -> Result<bool, ApiClientError> {
        let id = require_non_empty("gallery item id", id)?;
        let request = OutgoingRequest::post(["gallery", id, "vote", vote.as_str()]).authenticated();

        Ok(self.processor.execute(request).await?.into_data())
    }
}
