//! Errors raised while constructing or parsing fundamental types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TypesError {
    #[error("invalid public key: {0}")]
    InvalidKey(String),

    #[error("party name must not be empty")]
    EmptyPartyName,
}
