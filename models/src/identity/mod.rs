pub mod builder;

use crate::ModelError;
use builder::ClientIdentityBuilder;

use common::RedactedSecret;

/// The registered application's credentials.
///
/// Every request carries the id, either as the anonymous `Client-ID` header or
/// alongside the secret when talking to the token endpoint. Both values are
/// checked once at construction, so holders of a `ClientIdentity` never need
/// to re-validate them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientIdentity {
    id: String,
    secret: RedactedSecret,
}

impl ClientIdentity {
    #[track_caller]
    pub fn new(
        id: impl Into<String>,
        secret: impl Into<RedactedSecret>,
    ) -> Result<Self, ModelError> {
        ClientIdentityBuilder::default()
            .with_id(id)
            .with_secret(secret)
            .build()
    }

    pub fn builder() -> ClientIdentityBuilder {
        ClientIdentityBuilder::default()
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn secret(&self) -> &RedactedSecret {
        &self.secret
    }
}
