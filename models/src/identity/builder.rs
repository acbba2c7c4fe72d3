use crate::error::model_error::ModelError;
use crate::{ClientIdentity, ErrorLocation};

use common::RedactedSecret;

use std::panic::Location;

/// Builder for creating validated ClientIdentity instances.
#[derive(Debug, Default)]
pub struct ClientIdentityBuilder {
    id: Option<String>,
    secret: Option<RedactedSecret>,
}

impl ClientIdentityBuilder {
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_secret(mut self, secret: impl Into<RedactedSecret>) -> Self {
        self.secret = Some(secret.into());
        self
    }

    /// Build the ClientIdentity with validation.
    #[track_caller]
    pub fn build(self) -> Result<ClientIdentity, ModelError> {
        let id = self.id.ok_or_else(|| ModelError::Validation {
            field: "client_id",
            message: String::from("Client id is required"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        if id.trim().is_empty() {
            return Err(ModelError::Validation {
                field: "client_id",
                message: String::from("Client id cannot be empty"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let secret = self.secret.ok_or_else(|| ModelError::Validation {
            field: "client_secret",
            message: String::from("Client secret is required"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        if secret.is_blank() {
            return Err(ModelError::Validation {
                field: "client_secret",
                message: String::from("Client secret cannot be empty"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(ClientIdentity { id, secret })
    }
}
