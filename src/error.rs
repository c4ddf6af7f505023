//! Error types for the browser edge
//!
//! The dice core never fails; only storage and the share action can.

use gloo_storage::errors::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DiceError {
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("local storage rejected access to {0}")]
    StorageRejected(&'static str),

    #[error("share failed: {0}")]
    Share(String),

    #[error("script error: {0}")]
    Script(String),
}

pub type Result<T> = std::result::Result<T, DiceError>;
