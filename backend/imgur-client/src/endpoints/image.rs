use super::require_non_empty;
use crate::error::ApiClientError;
use crate::processor::{OutgoingRequest, RequestProcessor};

use models::Image;

pub struct ImageEndpoint<'a> {
    processor: &'a RequestProcessor,
}

impl<'a> ImageEndpoint<'a> {
    pub fn new(processor: &'a RequestProcessor) -> Self {
        Self { processor }
    }

    pub async fn get_image(&self, id: &str) -> Result<Image, ApiClientError> {
        let id = require_non_empty("image id", id)?;

        Ok(self
            .processor
            .execute(OutgoingRequest::get(["image", id]))
            .await?
            .into_data())
    }

    /// Delete by id (owner, authenticated) or by deletehash (anonymous upload).
    pub async fn delete_image(&self, id_or_delete_hash: &str) -> Result<bool, ApiClientError> {
        let id = require_non_empty("image id", id_or_delete_hash)?;

        Ok(self
            .processor
            .execute(OutgoingRequest::delete(["image", id]))
            .await?
            .into_data())
    }

    /// Toggle the favorite flag. Returns `"favorited"` or `"unfavorited"`.
    pub async fn favorite_image(&self, id: &str) -> Result<String, ApiClientError> {
        let id = require_non_empty("image id", id)?;
        let request = OutgoingRequest::post(["image", id, "favorite"]).authenticated();

        Ok(self.processor.execute(request).await?.into_data())
    }
}
