use super::require_non_empty;
use crate::error::ApiClientError;
use crate::processor::{OutgoingRequest, RequestProcessor};

use models::{Account, GalleryItem, Image};

/// Username Imgur resolves to the account behind the current access token.
pub const CURRENT_ACCOUNT: &str = "me";

/// Which account to read and which page of a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountQuery {
    /// Defaults to `"me"`, which requires an OAuth2 token.
    pub username: String,
    /// Zero-based page index. Defaults to `0`.
    pub page: u32,
}

impl Default for AccountQuery {
    fn default() -> Self {
        Self {
            username: CURRENT_ACCOUNT.to_string(),
            page: 0,
        }
    }
}

impl AccountQuery {
    pub fn for_user(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            ..Self::default()
        }
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    fn is_current_account(&self) -> bool {
        self.username.eq_ignore_ascii_case(CURRENT_ACCOUNT)
    }
}

pub struct AccountEndpoint<'a> {
    processor: &'a RequestProcessor,
}

impl<'a> AccountEndpoint<'a> {
    pub fn new(processor: &'a RequestProcessor) -> Self {
        Self { processor }
    }

    pub async fn get_account(&self, query: &AccountQuery) -> Result<Account, ApiClientError> {
        let username = require_non_empty("username", &query.username)?;
        let request = OutgoingRequest::get(["account", username])
            .with_auth(query.is_current_account());

        Ok(self.processor.execute(request).await?.into_data())
    }

    /// Gallery posts the account has favorited, public for any user.
    pub async fn get_account_gallery_favorites(
        &self,
        query: &AccountQuery,
    ) -> Result<Vec<GalleryItem>, ApiClientError> {
        let username = require_non_empty("username", &query.username)?;
        let request = OutgoingRequest::get([
            "account".to_string(),
            username.to_string(),
            "gallery_favorites".to_string(),
            query.page.to_string(),
        ])
        .with_auth(query.is_current_account());

        Ok(self.processor.execute(request).await?.into_data())
    }

    /// All favorites of the logged-in account, including private ones.
    pub async fn get_account_favorites(&self, page: u32) -> Result<Vec<GalleryItem>, ApiClientError> {
        let request = OutgoingRequest::get([
            "account".to_string(),
            CURRENT_ACCOUNT.to_string(),
            "favorites".to_string(),
            page.to_string(),
        ])
        .authenticated();

        Ok(self.processor.execute(request).await?.into_data())
    }

    pub async fn get_account_images(&self, page: u32) -> Result<Vec<Image>, ApiClientError> {
        let request = OutgoingRequest::get([
            "account".to_string(),
            CURRENT_ACCOUNT.to_string(),
            "images".to_string(),
            page.to_string(),
        ])
        .authenticated();

        Ok(self.processor.execute(request).await?.into_data())
    }

    pub async fn get_account_image_count(&self) -> Result<u64, ApiClientError> {
        let request =
            OutgoingRequest::get(["account", CURRENT_ACCOUNT, "images", "count"]).authenticated();

        Ok(self.processor.execute(request).await?.into_data())
    }

    pub async fn delete_account_image(&self, delete_hash: &str) -> Result<bool, ApiClientError> {
        let delete_hash = require_non_empty("delete_hash", delete_hash)?;
        let request =
            OutgoingRequest::delete(["account", CURRENT_ACCOUNT, "image", delete_hash])
                .authenticated();

        Ok(self.processor.execute(request).await?.into_data())
    }
}
