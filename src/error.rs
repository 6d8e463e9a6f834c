use std::io;

use thiserror::Error;

pub type PwgenResult<T> = Result<T, PwgenError>;

#[derive(Debug, Error)]
pub enum PwgenError {
    /// Every character class toggle is off, so the pool is empty
    #[error("no character class selected")]
    NoCharacterClassSelected,
    #[error("password length {0} is out of range (0 to {max})", max = crate::password::MAX_LENGTH)]
    LengthOutOfRange(usize),
    #[error("invalid length: {0}")]
    InvalidLength(String),

    #[error("invalid config file: {0}")]
    InvalidConfigFile(#[from] serde_json::Error),
    #[error("could not serialize settings: {0}")]
    Serialization(serde_json::Error),
    #[error("clipboard error: {0}")]
    Clipboard(String),

    #[error(transparent)]
    IO(#[from] io::Error),
}
