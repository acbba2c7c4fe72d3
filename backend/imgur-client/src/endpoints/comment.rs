use super::require_non_empty;
use crate::error::ApiClientError;
use crate::processor::{OutgoingRequest, RequestProcessor};

use models::{BasicId, Comment};

/// A comment to post on a gallery image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub image_id: String,
    pub comment: String,
    /// Comment being replied to. `None` posts a top-level comment.
    pub parent_id: Option<i64>,
}

impl NewComment {
    pub fn new(image_id: impl Into<String>, comment: impl Into<String>) -> Self {
        Self {
            image_id: image_id.into(),
            comment: comment.into(),
            parent_id: None,
        }
    }

    pub fn in_reply_to(mut self, parent_id: i64) -> Self {
        self.parent_id = Some(parent_id);
        self
    }
}

pub struct CommentEndpoint<'a> {
    processor: &'a RequestProcessor,
}

impl<'a> CommentEndpoint<'a> {
    pub fn new(processor: &'a RequestProcessor) -> Self {
        Self { processor }
    }

    pub async fn get_comment(&self, id: i64) -> Result<Comment, ApiClientError> {
        let request = OutgoingRequest::get(["comment".to_string(), id.to_string()]);

        Ok(self.processor.execute(request).await?.into_data())
    }

    pub async fn create_comment(&self, comment: &NewComment) -> Result<BasicId, ApiClientError> {
        let image_id = require_non_empty("image id", &comment.image_id)?;
        let text = require_non_empty("comment", &comment.comment)?;

        let mut request = OutgoingRequest::post(["comment"])
            .with_form("image_id", image_id)
            .with_form("comment", text)
            .authenticated();
        if let Some(parent_id) = comment.parent_id {
            request = request.with_form("parent_id", parent_id.to_string());
        }

        Ok(self.processor.execute(request).await?.into_data())
    }

    pub async fn delete_comment(&self, id: i64) -> Result<bool, ApiClientError> {
        let request =
            OutgoingRequest::delete(["comment".to_string(), id.to_string()]).authenticated();

        Ok(self.processor.execute(request).await?.into_data())
    }
}
