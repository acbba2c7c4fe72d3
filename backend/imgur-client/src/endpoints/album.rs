use super::require_non_empty;
use crate::error::ApiClientError;
use crate::processor::{OutgoingRequest, RequestProcessor};

use models::{Album, Image};

pub struct AlbumEndpoint<'a> {
    processor: &'a RequestProcessor,
}

impl<'a> AlbumEndpoint<'a> {
    pub fn new(processor: &'a RequestProcessor) -> Self {
        Self { processor }
    }

    pub async fn get_album(&self, id: &str) -> Result<Album, ApiClientError> {
        let id = require_non_empty("album id", id)?;

        Ok(self
            .processor
            .execute(OutgoingRequest::get(["album", id]))
            .await?
            .into_data())
    }

    pub async fn get_album_images(&self, id: &str) -> Result<Vec<Image>, ApiClientError> {
        let id = require_non_empty("album id", id)?;

        Ok(self
            .processor
            .execute(OutgoingRequest::get(["album", id, "images"]))
            .await?
            .into_data())
    }

    pub async fn delete_album(&self, id_or_delete_hash: &str) -> Result<bool, ApiClientError> {
        let id = require_non_empty("album id", id_or_delete_hash)?;

        Ok(self
            .processor
            .execute(OutgoingRequest::delete(["album", id]))
            .await?
            .into_data())
    }
}
