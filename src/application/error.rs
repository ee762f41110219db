use thiserror::Error;

use crate::domain::ParseAmountError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

impl From<ParseAmountError> for AppError {
    fn from(err: ParseAmountError) -> Self {
        AppError::InvalidAmount(err.to_string())
    }
}
