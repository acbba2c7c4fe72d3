use crate::ErrorLocation;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum RedactError {
    /// A redacted credential reached a serializer.
    #[error("Secret Serialization Refused: {message} {location}")]
    Serialization {
        message: String,
        location: ErrorLocation,
    },
}
