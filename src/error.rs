use thiserror::Error;

/**
 * Single error type for the whole binary. The first three variants are
 * recovered at the prompt that produced them (the rejected input itself is
 * logged at the call site); only Io aborts the session.
 */
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("Invalid date format. Please enter date as MM/DD/YYYY.")]
    InvalidDate,

    #[error("Invalid amount. Please enter a valid number.")]
    InvalidAmount,

    #[error("Invalid choice. Please enter a number between 1 and 5.")]
    InvalidChoice,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TrackerError>;
