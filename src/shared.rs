use thiserror::Error;

use crate::holding::HandError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    InvalidHand(#[from] HandError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
