use thiserror::Error;

#[derive(Error, Debug)]
pub enum TristoreError {
    #[error("Empty batch")]
    EmptyBatch,
    #[error("Malformed batch: {message}")]
    Malformed { message: String },
}

pub type Result<T> = std::result::Result<T, TristoreError>;
