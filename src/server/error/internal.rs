use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A status column holds a value outside of its enumeration.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Stored {column} '{value}' for row {id} is not a known status")]
    UnknownStatus {
        column: &'static str,
        id: i32,
        value: String,
    },

    /// Failure to hash a password with argon2.
    #[error("Failed to hash password: {0}")]
    PasswordHash(String),

    /// Failure to sign an access token.
    #[error("Failed to sign access token: {0}")]
    TokenSigning(#[source] jsonwebtoken::errors::Error),
}
